//! Readers assembling tracks, routes, and waypoints from message streams.
//!
//! Each reader drives a [`FitStream`] in a single sequential pass and
//! returns an owned entity. Skippable conditions (a field failing its
//! validity check, a point message missing its position) are handled
//! locally by omission; the one condition escalated to the caller is a
//! track ending up with no usable GPS data at all.

mod point;
mod route;
mod track;
mod waypoint;

pub use route::read as read_route;
pub use track::read as read_track;
pub use waypoint::read as read_waypoint;

use std::path::Path;

use thiserror::Error;

use crate::convert::fit_time_to_string;
use crate::mesg::FitStream;
use crate::profile::{MesgNum, course, file_id, segment_id, session};

/// Errors assembling an entity from a stream.
#[derive(Debug, Error)]
pub enum Error {
    /// The document yielded no usable GPS data.
    #[error("FIT file {0} contains no GPS data.")]
    NoGpsData(String),
}

/// Resolve a track or route name from a stream.
///
/// Sources are probed in a strict priority order, first hit wins:
/// segment name, course name, session start time, file creation time,
/// and finally the document's file name with underscores opened up.
fn evaluate_name(stream: &FitStream) -> String {
    segment_name(stream)
        .or_else(|| course_name(stream))
        .or_else(|| session_start(stream))
        .or_else(|| file_created(stream))
        .unwrap_or_else(|| base_name(stream.name()))
}

fn segment_name(stream: &FitStream) -> Option<String> {
    stream
        .first_mesg_of(MesgNum::SegmentId)
        .text(segment_id::NAME)
        .map(str::to_owned)
}

fn course_name(stream: &FitStream) -> Option<String> {
    // Course files can carry a name; activities don't.
    stream
        .first_mesg_of(MesgNum::Course)
        .text(course::NAME)
        .map(str::to_owned)
}

fn session_start(stream: &FitStream) -> Option<String> {
    stream
        .first_mesg_of(MesgNum::Session)
        .uint(session::START_TIME)
        .map(fit_time_to_string)
}

fn file_created(stream: &FitStream) -> Option<String> {
    // Typically the session start time, shifted by a few seconds.
    stream
        .first_mesg_of(MesgNum::FileId)
        .uint(file_id::TIME_CREATED)
        .map(fit_time_to_string)
}

fn base_name(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(name)
        .replace('_', " ")
}
