//! Track assembly.

use tracing::debug;

use crate::convert::split_balance;
use crate::mesg::{FitStream, Message};
use crate::model::{Summary, SummaryKind, Track, TrackSegment};
use crate::profile::{MesgNum, event, file_id, lap, session};

use super::{Error, evaluate_name, point};

/// Assemble a track from a stream.
///
/// The stream is consumed in one sequential pass: `record` and
/// `segment_point` messages accumulate points into the running segment,
/// timer-stop events close it, and `lap`/`session` messages accumulate
/// summaries. A stream yielding no points at all is an error naming the
/// document.
///
/// This method is also re-exported as `randonneur::read::read_track`.
pub fn read(stream: &mut FitStream) -> Result<Track, Error> {
    let mut track = Track {
        name: evaluate_name(stream),
        ..Track::default()
    };

    let file_id_mesg = stream.first_mesg_of(MesgNum::FileId);
    let time_created = file_id_mesg.uint(file_id::TIME_CREATED).unwrap_or_default();
    if let Some(product) = file_id_mesg.uint(file_id::PRODUCT) {
        track.device_product = Some(product as u16);
        track.has_fit_data = true;
    }

    stream.reset();

    // The FIT protocol allows records to be ordered chronologically or
    // grouped ahead of other messages. Devices write chronologically, and
    // only that ordering is considered; grouped records would need their
    // timestamps compared against the events'.
    let mut segment = TrackSegment::default();
    while stream.has_more_mesg() {
        let mesg = stream.next_mesg();

        match mesg.kind() {
            MesgNum::Record => {
                if let Some(point) = point::track_point_from_record(mesg) {
                    segment.points.push(point);
                }
            }
            MesgNum::Event => {
                if is_timer_stop(mesg) && !segment.points.is_empty() {
                    debug!(points = segment.points.len(), "closing segment at timer stop");
                    track.segments.push(std::mem::take(&mut segment));
                }
            }
            MesgNum::SegmentPoint => {
                if let Some(point) = point::track_point_from_segment_point(mesg, time_created) {
                    segment.points.push(point);
                }
            }
            MesgNum::Lap => track.summaries.push(lap_summary(mesg)),
            MesgNum::Session => track.summaries.push(session_summary(mesg)),
            _ => {}
        }
    }

    // Navigation course files need not carry timer events; close the
    // trailing segment regardless.
    if !segment.points.is_empty() {
        track.segments.push(segment);
    }

    if track.segments.is_empty() {
        return Err(Error::NoGpsData(stream.name().to_owned()));
    }

    debug!(
        segments = track.segments.len(),
        points = track.point_count(),
        summaries = track.summaries.len(),
        "assembled track"
    );

    Ok(track)
}

/// Whether an event message stops the recording timer.
fn is_timer_stop(mesg: &Message) -> bool {
    if mesg.uint(event::EVENT) != Some(event::EVENT_TIMER) {
        return false;
    }

    matches!(
        mesg.uint(event::EVENT_TYPE),
        Some(event::TYPE_STOP | event::TYPE_STOP_ALL | event::TYPE_STOP_DISABLE_ALL)
    )
}

/// Build a lap summary, defaulting every absent metric.
fn lap_summary(mesg: &Message) -> Summary {
    let (left_balance, right_balance) = mesg
        .uint(lap::LEFT_RIGHT_BALANCE)
        .map_or((0.0, 0.0), |raw| split_balance(raw as u16));

    Summary {
        kind: SummaryKind::Lap,
        index: mesg.uint(lap::MESSAGE_INDEX).unwrap_or_default() as u16,
        elapsed_time: mesg.uint(lap::TOTAL_ELAPSED_TIME).unwrap_or_default(),
        timer_time: mesg.uint(lap::TOTAL_TIMER_TIME).unwrap_or_default(),
        distance: mesg.uint(lap::TOTAL_DISTANCE).unwrap_or_default(),
        avg_speed: mesg.uint(lap::AVG_SPEED).unwrap_or_default() as u16,
        max_speed: mesg.uint(lap::MAX_SPEED).unwrap_or_default() as u16,
        avg_heart_rate: mesg.uint(lap::AVG_HEART_RATE).unwrap_or_default() as u8,
        max_heart_rate: mesg.uint(lap::MAX_HEART_RATE).unwrap_or_default() as u8,
        avg_cadence: mesg.uint(lap::AVG_CADENCE).unwrap_or_default() as u8,
        max_cadence: mesg.uint(lap::MAX_CADENCE).unwrap_or_default() as u8,
        ascent: mesg.uint(lap::TOTAL_ASCENT).unwrap_or_default() as u16,
        descent: mesg.uint(lap::TOTAL_DESCENT).unwrap_or_default() as u16,
        avg_power: mesg.uint(lap::AVG_POWER).unwrap_or_default() as u16,
        max_power: mesg.uint(lap::MAX_POWER).unwrap_or_default() as u16,
        normalized_power: mesg.uint(lap::NORMALIZED_POWER).unwrap_or_default() as u16,
        left_balance,
        right_balance,
        left_pedal_smoothness: mesg
            .uint(lap::AVG_LEFT_PEDAL_SMOOTHNESS)
            .unwrap_or_default() as u8,
        right_pedal_smoothness: mesg
            .uint(lap::AVG_RIGHT_PEDAL_SMOOTHNESS)
            .unwrap_or_default() as u8,
        left_torque_effectiveness: mesg
            .uint(lap::AVG_LEFT_TORQUE_EFFECTIVENESS)
            .unwrap_or_default() as u8,
        right_torque_effectiveness: mesg
            .uint(lap::AVG_RIGHT_TORQUE_EFFECTIVENESS)
            .unwrap_or_default() as u8,
        work: mesg.uint(lap::TOTAL_WORK).unwrap_or_default(),
        calories: mesg.uint(lap::TOTAL_CALORIES).unwrap_or_default() as u16,
        ..Summary::default()
    }
}

/// Build a session summary.
///
/// Sessions carry the lap count as their index, and the training stress
/// and intensity metrics laps lack.
fn session_summary(mesg: &Message) -> Summary {
    let (left_balance, right_balance) = mesg
        .uint(session::LEFT_RIGHT_BALANCE)
        .map_or((0.0, 0.0), |raw| split_balance(raw as u16));

    Summary {
        kind: SummaryKind::Session,
        index: mesg.uint(session::NUM_LAPS).unwrap_or_default() as u16,
        elapsed_time: mesg.uint(session::TOTAL_ELAPSED_TIME).unwrap_or_default(),
        timer_time: mesg.uint(session::TOTAL_TIMER_TIME).unwrap_or_default(),
        distance: mesg.uint(session::TOTAL_DISTANCE).unwrap_or_default(),
        avg_speed: mesg.uint(session::AVG_SPEED).unwrap_or_default() as u16,
        max_speed: mesg.uint(session::MAX_SPEED).unwrap_or_default() as u16,
        avg_heart_rate: mesg.uint(session::AVG_HEART_RATE).unwrap_or_default() as u8,
        max_heart_rate: mesg.uint(session::MAX_HEART_RATE).unwrap_or_default() as u8,
        avg_cadence: mesg.uint(session::AVG_CADENCE).unwrap_or_default() as u8,
        max_cadence: mesg.uint(session::MAX_CADENCE).unwrap_or_default() as u8,
        ascent: mesg.uint(session::TOTAL_ASCENT).unwrap_or_default() as u16,
        descent: mesg.uint(session::TOTAL_DESCENT).unwrap_or_default() as u16,
        avg_power: mesg.uint(session::AVG_POWER).unwrap_or_default() as u16,
        max_power: mesg.uint(session::MAX_POWER).unwrap_or_default() as u16,
        normalized_power: mesg.uint(session::NORMALIZED_POWER).unwrap_or_default() as u16,
        left_balance,
        right_balance,
        left_pedal_smoothness: mesg
            .uint(session::AVG_LEFT_PEDAL_SMOOTHNESS)
            .unwrap_or_default() as u8,
        right_pedal_smoothness: mesg
            .uint(session::AVG_RIGHT_PEDAL_SMOOTHNESS)
            .unwrap_or_default() as u8,
        left_torque_effectiveness: mesg
            .uint(session::AVG_LEFT_TORQUE_EFFECTIVENESS)
            .unwrap_or_default() as u8,
        right_torque_effectiveness: mesg
            .uint(session::AVG_RIGHT_TORQUE_EFFECTIVENESS)
            .unwrap_or_default() as u8,
        training_stress_score: mesg
            .float(session::TRAINING_STRESS_SCORE)
            .unwrap_or_default(),
        intensity_factor: mesg.float(session::INTENSITY_FACTOR).unwrap_or_default(),
        work: mesg.uint(session::TOTAL_WORK).unwrap_or_default(),
        calories: mesg.uint(session::TOTAL_CALORIES).unwrap_or_default() as u16,
    }
}
