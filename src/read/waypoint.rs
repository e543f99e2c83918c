//! Waypoint assembly.

use crate::mesg::FitStream;
use crate::model::Waypoint;
use crate::profile::MesgNum;

use super::point;

/// Assemble a single waypoint from a stream's final message.
///
/// `location` messages (waypoint files written by handhelds) decode
/// directly; any other final message is treated as a course point.
///
/// This method is also re-exported as `randonneur::read::read_waypoint`.
pub fn read(stream: &FitStream) -> Waypoint {
    let mesg = stream.last_mesg();

    if mesg.kind() == MesgNum::Location {
        point::from_location(mesg)
    } else {
        point::from_course_point(mesg)
    }
}
