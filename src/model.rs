//! Entities assembled from decoded documents.
//!
//! These are plain data carriers handed to the caller once a read
//! completes. Metric fields keep the integer widths and raw units of
//! their FIT source fields; display formatting and unit conversion are
//! the consumer's concern.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// An auxiliary sensor channel attached to a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sensor {
    HeartRate,
    Temperature,
    Cadence,
    Power,
    Speed,
}

impl Sensor {
    /// The extension key used when exporting points to GPX.
    pub fn gpx_key(self) -> &'static str {
        match self {
            Self::HeartRate => "gpxtpx:TrackPointExtension|gpxtpx:hr",
            Self::Temperature => "gpxtpx:TrackPointExtension|gpxtpx:atemp",
            Self::Cadence => "gpxtpx:TrackPointExtension|gpxtpx:cad",
            Self::Power => "power",
            Self::Speed => "speed",
        }
    }
}

/// A single position, with whatever attributes its source message carried.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Waypoint {
    /// Longitude in WGS-84 degrees, east positive.
    pub lon: f64,
    /// Latitude in WGS-84 degrees, north positive.
    pub lat: f64,
    /// Elevation in meters.
    pub ele: Option<f64>,
    /// Recording time.
    pub time: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Waypoint symbol identifier.
    pub symbol: Option<String>,
    /// Sensor channels recorded alongside the position.
    pub extensions: BTreeMap<Sensor, f64>,
}

/// A point on a track.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackPoint {
    pub point: Waypoint,
    /// Instantaneous speed, raw FIT units (mm/s), zero when unrecorded.
    pub speed: f64,
}

/// A contiguous run of track points between timer stops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackSegment {
    pub points: Vec<TrackPoint>,
}

/// Discriminator of a [`Summary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryKind {
    #[default]
    Lap,
    Session,
}

/// Aggregated metrics of a lap or a whole session.
///
/// Every metric defaults to zero when its source field is not present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub kind: SummaryKind,
    /// Lap sequence number, or the lap count for sessions.
    pub index: u16,
    /// Total elapsed time in seconds, pauses included.
    pub elapsed_time: u32,
    /// Time in seconds the timer was running.
    pub timer_time: u32,
    /// Distance covered in meters.
    pub distance: u32,
    /// Average and maximum speed in mm/s.
    pub avg_speed: u16,
    pub max_speed: u16,
    /// Average and maximum heart rate in beats per minute.
    pub avg_heart_rate: u8,
    pub max_heart_rate: u8,
    /// Average and maximum cadence in revolutions per minute.
    pub avg_cadence: u8,
    pub max_cadence: u8,
    /// Climb and descent in meters.
    pub ascent: u16,
    pub descent: u16,
    /// Average, maximum, and normalized power in watts.
    pub avg_power: u16,
    pub max_power: u16,
    pub normalized_power: u16,
    /// Pedaling balance split in percent, summing to 100.
    pub left_balance: f64,
    pub right_balance: f64,
    /// Pedal smoothness per side in percent.
    pub left_pedal_smoothness: u8,
    pub right_pedal_smoothness: u8,
    /// Torque effectiveness per side in percent.
    pub left_torque_effectiveness: u8,
    pub right_torque_effectiveness: u8,
    /// Training stress score and intensity factor, raw field values
    /// (sessions only).
    pub training_stress_score: f64,
    pub intensity_factor: f64,
    /// Total work in joules.
    pub work: u32,
    /// Total energy expended in kilocalories.
    pub calories: u16,
}

/// A recorded track: segmented points plus per-interval summaries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    pub name: String,
    pub segments: Vec<TrackSegment>,
    /// Lap and session summaries, in document order.
    pub summaries: Vec<Summary>,
    /// Product identifier of the recording device.
    pub device_product: Option<u16>,
    /// Whether the document carried FIT summary data for this track.
    pub has_fit_data: bool,
}

impl Track {
    /// Total number of points across all segments.
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(|s| s.points.len()).sum()
    }
}

/// An unsegmented sequence of route points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    pub name: String,
    pub points: Vec<Waypoint>,
}
