//! Mapping single messages to points.

use crate::convert::{fit_time_to_utc, semicircles_to_degrees};
use crate::mesg::Message;
use crate::model::{Sensor, TrackPoint, Waypoint};
use crate::profile::{COURSE_POINT_SYMBOLS, course_point, location, record, segment_point};

/// Copy the known sensor channels present on a `record` message.
fn known_extensions(mesg: &Message, point: &mut Waypoint) {
    if let Some(heart_rate) = mesg.float(record::HEART_RATE) {
        point.extensions.insert(Sensor::HeartRate, heart_rate);
    }
    if let Some(temperature) = mesg.float(record::TEMPERATURE) {
        point.extensions.insert(Sensor::Temperature, temperature);
    }
    if let Some(cadence) = mesg.float(record::CADENCE) {
        point.extensions.insert(Sensor::Cadence, cadence);
    }
    if let Some(power) = mesg.float(record::POWER) {
        point.extensions.insert(Sensor::Power, power);
    }
    if let Some(speed) = mesg.float(record::SPEED) {
        // Stored as mm/s; the extension carries m/s.
        point.extensions.insert(Sensor::Speed, speed / 1000.0);
    }
}

/// Map a `record` message to a waypoint.
///
/// Both position fields must be valid; otherwise no point is produced
/// and the caller skips the message.
pub(super) fn from_record(mesg: &Message) -> Option<Waypoint> {
    let lon = mesg.int(record::POSITION_LONG)?;
    let lat = mesg.int(record::POSITION_LAT)?;

    let mut point = Waypoint {
        lon: semicircles_to_degrees(lon),
        lat: semicircles_to_degrees(lat),
        ele: mesg.float(record::ENHANCED_ALTITUDE),
        time: mesg.uint(record::TIMESTAMP).map(fit_time_to_utc),
        ..Waypoint::default()
    };
    known_extensions(mesg, &mut point);

    Some(point)
}

/// Map a `record` message to a track point, keeping the raw speed.
pub(super) fn track_point_from_record(mesg: &Message) -> Option<TrackPoint> {
    let point = from_record(mesg)?;
    let speed = mesg.float(record::SPEED).unwrap_or_default();

    Some(TrackPoint { point, speed })
}

/// Map a `location` message to a waypoint.
///
/// Locations carry no symbol concept; the default symbol is assigned.
pub(super) fn from_location(mesg: &Message) -> Waypoint {
    let mut point = Waypoint::default();

    if let Some(name) = mesg.text(location::NAME) {
        point.name = Some(name.to_owned());
    }
    if let Some(timestamp) = mesg.uint(location::TIMESTAMP) {
        point.time = Some(fit_time_to_utc(timestamp));
    }
    if let (Some(lon), Some(lat)) = (
        mesg.int(location::POSITION_LONG),
        mesg.int(location::POSITION_LAT),
    ) {
        point.lon = semicircles_to_degrees(lon);
        point.lat = semicircles_to_degrees(lat);
    }
    point.ele = mesg.float(location::ALTITUDE);
    if let Some(comment) = mesg.text(location::COMMENT) {
        point.description = Some(comment.to_owned());
    }
    point.symbol = Some("Default".to_owned());

    point
}

/// Map a `course_point` message to a waypoint, with the symbol looked up
/// from the course point type.
pub(super) fn from_course_point(mesg: &Message) -> Waypoint {
    let mut point = Waypoint::default();

    if let Some(name) = mesg.text(course_point::NAME) {
        point.name = Some(name.to_owned());
    }
    if let Some(timestamp) = mesg.uint(course_point::TIMESTAMP) {
        point.time = Some(fit_time_to_utc(timestamp));
    }
    if let (Some(lon), Some(lat)) = (
        mesg.int(course_point::POSITION_LONG),
        mesg.int(course_point::POSITION_LAT),
    ) {
        point.lon = semicircles_to_degrees(lon);
        point.lat = semicircles_to_degrees(lat);
    }
    if let Some(kind) = mesg.uint(course_point::TYPE) {
        // A type outside the table leaves the symbol unset.
        point.symbol = COURSE_POINT_SYMBOLS
            .get(kind as usize)
            .map(|symbol| (*symbol).to_owned());
    }

    point
}

/// Map a `segment_point` message to a track point.
///
/// Segment points store time as an offset on the document's creation
/// time, passed in by the caller.
pub(super) fn track_point_from_segment_point(
    mesg: &Message,
    time_created: u32,
) -> Option<TrackPoint> {
    let lon = mesg.int(segment_point::POSITION_LONG)?;
    let lat = mesg.int(segment_point::POSITION_LAT)?;

    let leader_time = mesg.uint(segment_point::LEADER_TIME).unwrap_or_default();

    let point = Waypoint {
        lon: semicircles_to_degrees(lon),
        lat: semicircles_to_degrees(lat),
        ele: mesg.float(segment_point::ALTITUDE),
        time: Some(fit_time_to_utc(time_created.wrapping_add(leader_time))),
        ..Waypoint::default()
    };

    Some(TrackPoint {
        point,
        speed: 0.0,
    })
}
