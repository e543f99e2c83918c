use chrono::{TimeZone, Utc};

use randonneur::convert::{
    fit_time_to_string, fit_time_to_utc, semicircles_to_degrees, split_balance,
};

#[test]
fn semicircles_zero() {
    assert_eq!(semicircles_to_degrees(0), 0.0);
}

#[test]
fn semicircles_extremes() {
    assert_eq!(semicircles_to_degrees(i32::MIN), -180.0);

    let almost = semicircles_to_degrees(i32::MAX);
    assert!(almost < 180.0);
    assert!(180.0 - almost < 1e-6);
}

#[test]
fn semicircles_known_position() {
    // One quarter turn east.
    assert_eq!(semicircles_to_degrees(i32::MIN / -2), 90.0);
}

#[test]
fn fit_epoch_origin() {
    let expected = Utc.with_ymd_and_hms(1989, 12, 31, 0, 0, 0).unwrap();
    assert_eq!(fit_time_to_utc(0), expected);
}

#[test]
fn fit_epoch_monotonic() {
    let mut last = fit_time_to_utc(0);
    for timestamp in [1, 60, 3600, 86_400, 1_000_000_000, u32::MAX] {
        let next = fit_time_to_utc(timestamp);
        assert!(next > last);
        last = next;
    }
}

#[test]
fn fit_time_formatting() {
    assert_eq!(fit_time_to_string(0), "1989-12-31 00:00:00");
    // One day, one hour, one minute, one second past the epoch.
    assert_eq!(fit_time_to_string(90_061), "1990-01-01 01:01:01");
}

#[test]
fn balance_sums_to_one_hundred() {
    for raw in [0u16, 1, 4_830, 5_000, 0x3FFF, 0x8000, 0xFFFF] {
        let (left, right) = split_balance(raw);
        assert!((left + right - 100.0).abs() < 1e-9, "raw {raw}");
    }
}

#[test]
fn balance_right_from_low_bits() {
    let (_, right) = split_balance(4_830);
    assert_eq!(right, 48.30);
}

#[test]
fn balance_masks_reserved_bits() {
    // The upper two bits must not contribute.
    assert_eq!(split_balance(0x8000 | 4_830), split_balance(4_830));
    assert_eq!(split_balance(0xC000), split_balance(0));
}
