//! Conversions from raw FIT field values to domain units.

use chrono::{DateTime, Utc};

/// Seconds between the Unix epoch and the FIT epoch (1989-12-31T00:00:00Z).
const FIT_EPOCH_OFFSET: i64 = 631_065_600;

/// Convert a semicircle angle to WGS-84 degrees.
///
/// FIT encodes latitude and longitude as fixed point, with 2^31
/// semicircles to 180 degrees. North and east are positive.
pub fn semicircles_to_degrees(semicircles: i32) -> f64 {
    f64::from(semicircles) * (180.0 / 2_147_483_648.0)
}

/// Convert a FIT timestamp (seconds since the FIT epoch) to a UTC instant.
pub fn fit_time_to_utc(timestamp: u32) -> DateTime<Utc> {
    // Always in range for a u32 input.
    DateTime::from_timestamp(FIT_EPOCH_OFFSET + i64::from(timestamp), 0).unwrap_or_default()
}

/// Format a FIT timestamp for display, in UTC.
pub fn fit_time_to_string(timestamp: u32) -> String {
    fit_time_to_utc(timestamp)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Split a left/right balance bitmask into percentages.
///
/// The right contribution occupies the low 14 bits, in hundredths of a
/// percent; the upper two bits are dropped without interpretation.
pub fn split_balance(raw: u16) -> (f64, f64) {
    let right = f64::from(raw & 0x3FFF) / 100.0;
    (100.0 - right, right)
}
