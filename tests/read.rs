use randonneur::convert::{fit_time_to_string, fit_time_to_utc, semicircles_to_degrees};
use randonneur::mesg::{FitStream, Message, Value};
use randonneur::model::{Sensor, SummaryKind, Waypoint};
use randonneur::profile::{
    MesgNum, course, course_point, event, file_id, lap, location, record, segment_id,
    segment_point, session,
};
use randonneur::read::{Error, read_route, read_track, read_waypoint};

/// One quarter turn north, in semicircles.
const LAT: i32 = i32::MAX / 4;
const LON: i32 = 89_478_485;

fn record_mesg(lat: i32, lon: i32, timestamp: u32) -> Message {
    Message::new(MesgNum::Record)
        .with(record::POSITION_LAT, Value::I32(lat))
        .with(record::POSITION_LONG, Value::I32(lon))
        .with(record::TIMESTAMP, Value::U32(timestamp))
}

fn stop_mesg(event_type: u32) -> Message {
    Message::new(MesgNum::Event)
        .with(event::EVENT, Value::U8(event::EVENT_TIMER as u8))
        .with(event::EVENT_TYPE, Value::U8(event_type as u8))
}

fn stream(mesgs: Vec<Message>) -> FitStream {
    FitStream::new("afternoon_ride.fit", mesgs)
}

#[test]
fn records_accumulate_into_one_segment() {
    let mesgs = (0..5).map(|i| record_mesg(LAT + i, LON, 100 + i as u32)).collect();

    let track = read_track(&mut stream(mesgs)).unwrap();

    assert_eq!(track.segments.len(), 1);
    let points = &track.segments[0].points;
    assert_eq!(points.len(), 5);
    for (i, point) in points.iter().enumerate() {
        assert_eq!(point.point.time, Some(fit_time_to_utc(100 + i as u32)));
        assert_eq!(point.point.lat, semicircles_to_degrees(LAT + i as i32));
    }
}

#[test]
fn timer_stop_splits_segments() {
    for stop in [event::TYPE_STOP, event::TYPE_STOP_ALL, event::TYPE_STOP_DISABLE_ALL] {
        let mesgs = vec![
            record_mesg(LAT, LON, 100),
            record_mesg(LAT, LON, 101),
            stop_mesg(stop),
            record_mesg(LAT, LON, 102),
            record_mesg(LAT, LON, 103),
        ];

        let track = read_track(&mut stream(mesgs)).unwrap();

        let sizes: Vec<usize> = track.segments.iter().map(|s| s.points.len()).collect();
        assert_eq!(sizes, [2, 2]);
    }
}

#[test]
fn trailing_stop_closes_without_empty_segment() {
    let mesgs = vec![
        record_mesg(LAT, LON, 100),
        record_mesg(LAT, LON, 101),
        stop_mesg(event::TYPE_STOP),
    ];

    let track = read_track(&mut stream(mesgs)).unwrap();

    let sizes: Vec<usize> = track.segments.iter().map(|s| s.points.len()).collect();
    assert_eq!(sizes, [2]);
}

#[test]
fn start_events_do_not_split() {
    let start = Message::new(MesgNum::Event)
        .with(event::EVENT, Value::U8(event::EVENT_TIMER as u8))
        .with(event::EVENT_TYPE, Value::U8(0));

    let mesgs = vec![record_mesg(LAT, LON, 100), start, record_mesg(LAT, LON, 101)];

    let track = read_track(&mut stream(mesgs)).unwrap();

    assert_eq!(track.segments.len(), 1);
    assert_eq!(track.segments[0].points.len(), 2);
}

#[test]
fn events_without_event_field_do_not_split() {
    // A stop type alone is not a timer event.
    let bare = Message::new(MesgNum::Event).with(event::EVENT_TYPE, Value::U8(event::TYPE_STOP as u8));

    let mesgs = vec![record_mesg(LAT, LON, 100), bare, record_mesg(LAT, LON, 101)];

    let track = read_track(&mut stream(mesgs)).unwrap();

    assert_eq!(track.segments.len(), 1);
}

#[test]
fn records_without_position_are_skipped() {
    let partial = Message::new(MesgNum::Record)
        .with(record::POSITION_LONG, Value::I32(LON))
        .with(record::TIMESTAMP, Value::U32(101));

    let mesgs = vec![record_mesg(LAT, LON, 100), partial];

    let track = read_track(&mut stream(mesgs)).unwrap();

    assert_eq!(track.segments[0].points.len(), 1);
}

#[test]
fn no_points_is_fatal() {
    let mesgs = vec![stop_mesg(event::TYPE_STOP), Message::new(MesgNum::Lap)];

    let error = read_track(&mut FitStream::new("empty_ride.fit", mesgs)).unwrap_err();

    let Error::NoGpsData(name) = &error;
    assert_eq!(name, "empty_ride.fit");
    assert_eq!(
        error.to_string(),
        "FIT file empty_ride.fit contains no GPS data."
    );
}

#[test]
fn record_attributes_and_extensions() {
    let mesg = record_mesg(LAT, LON, 100)
        .with(record::ENHANCED_ALTITUDE, Value::U32(1_200))
        .with(record::HEART_RATE, Value::U8(150))
        .with(record::TEMPERATURE, Value::I8(21))
        .with(record::CADENCE, Value::U8(90))
        .with(record::POWER, Value::U16(250))
        .with(record::SPEED, Value::U16(2_500));

    let track = read_track(&mut stream(vec![mesg])).unwrap();

    let point = &track.segments[0].points[0];
    assert_eq!(point.speed, 2_500.0);
    assert_eq!(point.point.ele, Some(1_200.0));
    assert_eq!(point.point.extensions[&Sensor::HeartRate], 150.0);
    assert_eq!(point.point.extensions[&Sensor::Temperature], 21.0);
    assert_eq!(point.point.extensions[&Sensor::Cadence], 90.0);
    assert_eq!(point.point.extensions[&Sensor::Power], 250.0);
    assert_eq!(point.point.extensions[&Sensor::Speed], 2.5);
}

#[test]
fn extensions_only_when_present() {
    let track = read_track(&mut stream(vec![record_mesg(LAT, LON, 100)])).unwrap();

    let point = &track.segments[0].points[0];
    assert_eq!(point.speed, 0.0);
    assert_eq!(point.point.ele, None);
    assert!(point.point.extensions.is_empty());
}

#[test]
fn segment_points_use_creation_time_offset() {
    let file_id_mesg = Message::new(MesgNum::FileId)
        .with(file_id::TIME_CREATED, Value::U32(1_000))
        .with(file_id::PRODUCT, Value::U16(2_713));
    let segment_point_mesg = |leader_time: u32| {
        Message::new(MesgNum::SegmentPoint)
            .with(segment_point::POSITION_LAT, Value::I32(LAT))
            .with(segment_point::POSITION_LONG, Value::I32(LON))
            .with(segment_point::ALTITUDE, Value::U16(840))
            .with(segment_point::LEADER_TIME, Value::U32(leader_time))
    };

    let mesgs = vec![file_id_mesg, segment_point_mesg(0), segment_point_mesg(60)];

    let track = read_track(&mut stream(mesgs)).unwrap();

    assert_eq!(track.device_product, Some(2_713));
    assert!(track.has_fit_data);

    let points = &track.segments[0].points;
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].point.time, Some(fit_time_to_utc(1_000)));
    assert_eq!(points[1].point.time, Some(fit_time_to_utc(1_060)));
    assert_eq!(points[1].point.ele, Some(840.0));
}

#[test]
fn lap_summary_metrics() {
    let lap_mesg = Message::new(MesgNum::Lap)
        .with(lap::MESSAGE_INDEX, Value::U16(3))
        .with(lap::TOTAL_ELAPSED_TIME, Value::U32(3_723))
        .with(lap::TOTAL_TIMER_TIME, Value::U32(3_600))
        .with(lap::TOTAL_DISTANCE, Value::U32(25_000))
        .with(lap::AVG_SPEED, Value::U16(6_944))
        .with(lap::AVG_HEART_RATE, Value::U8(142))
        .with(lap::MAX_CADENCE, Value::U8(105))
        .with(lap::LEFT_RIGHT_BALANCE, Value::U16(0x8000 | 5_170))
        .with(lap::TOTAL_WORK, Value::U32(900_000));

    let mesgs = vec![record_mesg(LAT, LON, 100), lap_mesg];

    let track = read_track(&mut stream(mesgs)).unwrap();

    assert_eq!(track.summaries.len(), 1);
    let summary = &track.summaries[0];
    assert_eq!(summary.kind, SummaryKind::Lap);
    assert_eq!(summary.index, 3);
    assert_eq!(summary.elapsed_time, 3_723);
    assert_eq!(summary.timer_time, 3_600);
    assert_eq!(summary.distance, 25_000);
    assert_eq!(summary.avg_speed, 6_944);
    assert_eq!(summary.avg_heart_rate, 142);
    assert_eq!(summary.max_cadence, 105);
    assert!((summary.right_balance - 51.70).abs() < 1e-9);
    assert!((summary.left_balance - 48.30).abs() < 1e-9);
    assert_eq!(summary.work, 900_000);

    // Absent metrics stay zero.
    assert_eq!(summary.max_speed, 0);
    assert_eq!(summary.training_stress_score, 0.0);
}

#[test]
fn session_summary_metrics() {
    let session_mesg = Message::new(MesgNum::Session)
        .with(session::NUM_LAPS, Value::U16(2))
        .with(session::TOTAL_DISTANCE, Value::U32(50_000))
        .with(session::TRAINING_STRESS_SCORE, Value::U16(856))
        .with(session::INTENSITY_FACTOR, Value::U16(790));

    let mesgs = vec![record_mesg(LAT, LON, 100), session_mesg];

    let track = read_track(&mut stream(mesgs)).unwrap();

    let summary = &track.summaries[0];
    assert_eq!(summary.kind, SummaryKind::Session);
    assert_eq!(summary.index, 2);
    assert_eq!(summary.distance, 50_000);
    assert_eq!(summary.training_stress_score, 856.0);
    assert_eq!(summary.intensity_factor, 790.0);
}

#[test]
fn summaries_keep_document_order() {
    let mesgs = vec![
        record_mesg(LAT, LON, 100),
        Message::new(MesgNum::Lap).with(lap::MESSAGE_INDEX, Value::U16(0)),
        Message::new(MesgNum::Lap).with(lap::MESSAGE_INDEX, Value::U16(1)),
        Message::new(MesgNum::Session).with(session::NUM_LAPS, Value::U16(2)),
    ];

    let track = read_track(&mut stream(mesgs)).unwrap();

    let kinds: Vec<SummaryKind> = track.summaries.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        [SummaryKind::Lap, SummaryKind::Lap, SummaryKind::Session]
    );
}

#[test]
fn name_prefers_segment_id() {
    let mesgs = vec![
        Message::new(MesgNum::Course).with(course::NAME, Value::Text("Stage 12".to_owned())),
        Message::new(MesgNum::SegmentId).with(segment_id::NAME, Value::Text("Alpe".to_owned())),
        Message::new(MesgNum::Session).with(session::START_TIME, Value::U32(1_000)),
        record_mesg(LAT, LON, 100),
    ];

    let track = read_track(&mut stream(mesgs)).unwrap();

    assert_eq!(track.name, "Alpe");
}

#[test]
fn name_falls_back_to_course() {
    let mesgs = vec![
        Message::new(MesgNum::Course).with(course::NAME, Value::Text("Stage 12".to_owned())),
        Message::new(MesgNum::Session).with(session::START_TIME, Value::U32(1_000)),
        record_mesg(LAT, LON, 100),
    ];

    let track = read_track(&mut stream(mesgs)).unwrap();

    assert_eq!(track.name, "Stage 12");
}

#[test]
fn name_falls_back_to_session_start() {
    let mesgs = vec![
        Message::new(MesgNum::Session).with(session::START_TIME, Value::U32(1_000)),
        Message::new(MesgNum::FileId).with(file_id::TIME_CREATED, Value::U32(990)),
        record_mesg(LAT, LON, 100),
    ];

    let track = read_track(&mut stream(mesgs)).unwrap();

    assert_eq!(track.name, fit_time_to_string(1_000));
}

#[test]
fn name_falls_back_to_creation_time() {
    let mesgs = vec![
        Message::new(MesgNum::FileId).with(file_id::TIME_CREATED, Value::U32(1_000_000_000)),
        record_mesg(LAT, LON, 100),
    ];

    let track = read_track(&mut stream(mesgs)).unwrap();

    assert_eq!(track.name, fit_time_to_string(1_000_000_000));
}

#[test]
fn name_falls_back_to_file_name() {
    let track = read_track(&mut stream(vec![record_mesg(LAT, LON, 100)])).unwrap();

    assert_eq!(track.name, "afternoon ride");
}

#[test]
fn route_collects_records_in_order() {
    let partial = Message::new(MesgNum::Record)
        .with(record::POSITION_LONG, Value::I32(LON))
        .with(record::TIMESTAMP, Value::U32(101));

    let mesgs = vec![
        record_mesg(LAT, LON, 100),
        partial,
        stop_mesg(event::TYPE_STOP),
        record_mesg(LAT + 1, LON, 102),
    ];

    let route = read_route(&mut stream(mesgs));

    assert_eq!(route.name, "afternoon ride");
    assert_eq!(route.points.len(), 2);
    assert_eq!(route.points[0].time, Some(fit_time_to_utc(100)));
    assert_eq!(route.points[1].lat, semicircles_to_degrees(LAT + 1));
}

#[test]
fn waypoint_from_location() {
    let location_mesg = Message::new(MesgNum::Location)
        .with(location::NAME, Value::Text("Camp".to_owned()))
        .with(location::POSITION_LAT, Value::I32(LAT))
        .with(location::POSITION_LONG, Value::I32(LON))
        .with(location::ALTITUDE, Value::U16(820))
        .with(location::COMMENT, Value::Text("Shelter".to_owned()))
        .with(location::TIMESTAMP, Value::U32(100));

    let mesgs = vec![Message::new(MesgNum::FileId), location_mesg];

    let waypoint = read_waypoint(&stream(mesgs));

    assert_eq!(waypoint.name.as_deref(), Some("Camp"));
    assert_eq!(waypoint.description.as_deref(), Some("Shelter"));
    assert_eq!(waypoint.symbol.as_deref(), Some("Default"));
    assert_eq!(waypoint.ele, Some(820.0));
    assert_eq!(waypoint.time, Some(fit_time_to_utc(100)));
    assert_eq!(waypoint.lat, semicircles_to_degrees(LAT));
    assert_eq!(waypoint.lon, semicircles_to_degrees(LON));
}

#[test]
fn waypoint_from_course_point() {
    let course_point_mesg = Message::new(MesgNum::CoursePoint)
        .with(course_point::NAME, Value::Text("Turn here".to_owned()))
        .with(course_point::POSITION_LAT, Value::I32(LAT))
        .with(course_point::POSITION_LONG, Value::I32(LON))
        .with(course_point::TYPE, Value::U8(6));

    let waypoint = read_waypoint(&stream(vec![course_point_mesg]));

    assert_eq!(waypoint.name.as_deref(), Some("Turn here"));
    assert_eq!(waypoint.symbol.as_deref(), Some("Left"));
}

#[test]
fn course_point_type_out_of_range_leaves_symbol_unset() {
    let course_point_mesg = Message::new(MesgNum::CoursePoint)
        .with(course_point::NAME, Value::Text("Odd".to_owned()))
        .with(course_point::TYPE, Value::U8(26));

    let waypoint = read_waypoint(&stream(vec![course_point_mesg]));

    assert_eq!(waypoint.symbol, None);
}

#[test]
fn empty_stream_stays_queryable() {
    let empty = FitStream::new("empty.fit", vec![]);

    let miss = empty.first_mesg_of(MesgNum::SegmentId);
    assert!(!miss.is_valid(segment_id::NAME));
    assert_eq!(empty.last_mesg().uint(record::TIMESTAMP), None);

    assert_eq!(read_waypoint(&empty), Waypoint::default());
}
