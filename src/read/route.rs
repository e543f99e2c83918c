//! Route assembly.

use crate::mesg::FitStream;
use crate::model::Route;
use crate::profile::MesgNum;

use super::{evaluate_name, point};

/// Assemble a route from a stream.
///
/// A course file read as a route: every mappable `record` message
/// contributes a point, in document order, without segmentation.
///
/// This method is also re-exported as `randonneur::read::read_route`.
pub fn read(stream: &mut FitStream) -> Route {
    let mut route = Route {
        name: evaluate_name(stream),
        points: Vec::new(),
    };

    stream.reset();
    while stream.has_more_mesg() {
        let mesg = stream.next_mesg();

        if mesg.kind() == MesgNum::Record {
            if let Some(point) = point::from_record(mesg) {
                route.points.push(point);
            }
        }
    }

    route
}
