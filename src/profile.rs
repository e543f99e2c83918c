//! The handled subset of the FIT global profile.
//!
//! FIT assigns every message a global number and every field within a
//! message a field number. This module names the numbers the decoders in
//! this crate dispatch on. Messages outside this subset pass through the
//! stream untouched and are ignored by the assemblers.

/// A global message number, folded onto the handled subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MesgNum {
    /// `file_id` (0).
    FileId,
    /// `session` (18).
    Session,
    /// `lap` (19).
    Lap,
    /// `record` (20).
    Record,
    /// `event` (21).
    Event,
    /// `location` (29), written by handheld devices for single waypoints.
    Location,
    /// `course` (31).
    Course,
    /// `course_point` (32).
    CoursePoint,
    /// `segment_id` (148).
    SegmentId,
    /// `segment_point` (150).
    SegmentPoint,
    /// Any message outside the handled subset.
    Other(u16),
}

impl From<u16> for MesgNum {
    fn from(number: u16) -> Self {
        match number {
            0 => Self::FileId,
            18 => Self::Session,
            19 => Self::Lap,
            20 => Self::Record,
            21 => Self::Event,
            29 => Self::Location,
            31 => Self::Course,
            32 => Self::CoursePoint,
            148 => Self::SegmentId,
            150 => Self::SegmentPoint,
            number => Self::Other(number),
        }
    }
}

impl MesgNum {
    /// The FIT global message number.
    pub fn number(self) -> u16 {
        match self {
            Self::FileId => 0,
            Self::Session => 18,
            Self::Lap => 19,
            Self::Record => 20,
            Self::Event => 21,
            Self::Location => 29,
            Self::Course => 31,
            Self::CoursePoint => 32,
            Self::SegmentId => 148,
            Self::SegmentPoint => 150,
            Self::Other(number) => number,
        }
    }
}

/// Field numbers of the `file_id` message.
pub mod file_id {
    pub const TYPE: u8 = 0;
    pub const MANUFACTURER: u8 = 1;
    pub const PRODUCT: u8 = 2;
    pub const SERIAL_NUMBER: u8 = 3;
    pub const TIME_CREATED: u8 = 4;
}

/// Field numbers of the `record` message.
pub mod record {
    pub const POSITION_LAT: u8 = 0;
    pub const POSITION_LONG: u8 = 1;
    pub const ALTITUDE: u8 = 2;
    pub const HEART_RATE: u8 = 3;
    pub const CADENCE: u8 = 4;
    pub const DISTANCE: u8 = 5;
    pub const SPEED: u8 = 6;
    pub const POWER: u8 = 7;
    pub const TEMPERATURE: u8 = 13;
    pub const ENHANCED_ALTITUDE: u8 = 78;
    pub const TIMESTAMP: u8 = 253;
}

/// Field numbers and values of the `event` message.
pub mod event {
    pub const EVENT: u8 = 0;
    pub const EVENT_TYPE: u8 = 1;

    /// `event` value marking activity timer events.
    pub const EVENT_TIMER: u32 = 0;

    /// `event_type` values after which the recording timer is stopped.
    pub const TYPE_STOP: u32 = 1;
    pub const TYPE_STOP_ALL: u32 = 4;
    pub const TYPE_STOP_DISABLE_ALL: u32 = 9;
}

/// Field numbers shared by the `lap` message.
pub mod lap {
    pub const TOTAL_ELAPSED_TIME: u8 = 7;
    pub const TOTAL_TIMER_TIME: u8 = 8;
    pub const TOTAL_DISTANCE: u8 = 9;
    pub const TOTAL_CALORIES: u8 = 11;
    pub const AVG_SPEED: u8 = 13;
    pub const MAX_SPEED: u8 = 14;
    pub const AVG_HEART_RATE: u8 = 15;
    pub const MAX_HEART_RATE: u8 = 16;
    pub const AVG_CADENCE: u8 = 17;
    pub const MAX_CADENCE: u8 = 18;
    pub const AVG_POWER: u8 = 19;
    pub const MAX_POWER: u8 = 20;
    pub const TOTAL_ASCENT: u8 = 21;
    pub const TOTAL_DESCENT: u8 = 22;
    pub const NORMALIZED_POWER: u8 = 33;
    pub const LEFT_RIGHT_BALANCE: u8 = 34;
    pub const TOTAL_WORK: u8 = 41;
    pub const AVG_LEFT_TORQUE_EFFECTIVENESS: u8 = 91;
    pub const AVG_RIGHT_TORQUE_EFFECTIVENESS: u8 = 92;
    pub const AVG_LEFT_PEDAL_SMOOTHNESS: u8 = 93;
    pub const AVG_RIGHT_PEDAL_SMOOTHNESS: u8 = 94;
    pub const MESSAGE_INDEX: u8 = 254;
}

/// Field numbers of the `session` message.
pub mod session {
    pub const START_TIME: u8 = 2;
    pub const TOTAL_ELAPSED_TIME: u8 = 7;
    pub const TOTAL_TIMER_TIME: u8 = 8;
    pub const TOTAL_DISTANCE: u8 = 9;
    pub const TOTAL_CALORIES: u8 = 11;
    pub const AVG_SPEED: u8 = 14;
    pub const MAX_SPEED: u8 = 15;
    pub const AVG_HEART_RATE: u8 = 16;
    pub const MAX_HEART_RATE: u8 = 17;
    pub const AVG_CADENCE: u8 = 18;
    pub const MAX_CADENCE: u8 = 19;
    pub const AVG_POWER: u8 = 20;
    pub const MAX_POWER: u8 = 21;
    pub const TOTAL_ASCENT: u8 = 22;
    pub const TOTAL_DESCENT: u8 = 23;
    pub const NUM_LAPS: u8 = 26;
    pub const NORMALIZED_POWER: u8 = 34;
    pub const TRAINING_STRESS_SCORE: u8 = 35;
    pub const INTENSITY_FACTOR: u8 = 36;
    pub const LEFT_RIGHT_BALANCE: u8 = 37;
    pub const TOTAL_WORK: u8 = 48;
    pub const AVG_LEFT_TORQUE_EFFECTIVENESS: u8 = 101;
    pub const AVG_RIGHT_TORQUE_EFFECTIVENESS: u8 = 102;
    pub const AVG_LEFT_PEDAL_SMOOTHNESS: u8 = 103;
    pub const AVG_RIGHT_PEDAL_SMOOTHNESS: u8 = 104;
}

/// Field numbers of the `location` message.
///
/// The message is absent from the published profile; the layout follows
/// the files written by Garmin handhelds.
pub mod location {
    pub const NAME: u8 = 0;
    pub const POSITION_LAT: u8 = 1;
    pub const POSITION_LONG: u8 = 2;
    pub const ALTITUDE: u8 = 4;
    pub const COMMENT: u8 = 6;
    pub const TIMESTAMP: u8 = 253;
}

/// Field numbers of the `course` message.
pub mod course {
    pub const NAME: u8 = 5;
}

/// Field numbers of the `course_point` message.
pub mod course_point {
    pub const TIMESTAMP: u8 = 1;
    pub const POSITION_LAT: u8 = 2;
    pub const POSITION_LONG: u8 = 3;
    pub const TYPE: u8 = 5;
    pub const NAME: u8 = 6;
}

/// Field numbers of the `segment_id` message.
pub mod segment_id {
    pub const NAME: u8 = 0;
}

/// Field numbers of the `segment_point` message.
pub mod segment_point {
    pub const POSITION_LAT: u8 = 1;
    pub const POSITION_LONG: u8 = 2;
    pub const ALTITUDE: u8 = 3;
    pub const LEADER_TIME: u8 = 5;
}

/// Waypoint symbols by `course_point` type, in profile order.
pub const COURSE_POINT_SYMBOLS: [&str; 26] = [
    "Default",
    "Summit",
    "Valley",
    "Water",
    "Food",
    "Danger",
    "Left",
    "Right",
    "Straight",
    "FirstAid",
    "4thCategory",
    "3rdCategory",
    "2ndCategory",
    "1stCategory",
    "HorsCategory",
    "Sprint",
    "LeftFork",
    "RightFork",
    "MiddleFork",
    "SlightLeft",
    "SharpLeft",
    "SlightRight",
    "SharpRight",
    "UTurn",
    "Start",
    "End",
];
