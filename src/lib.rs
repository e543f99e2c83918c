//! A decoder for Garmin's Flexible and Interoperable Data Transfer
//! activity and course files, producing GPS tracks, routes, and
//! waypoints.
//!
//! Decoding runs in two stages. The [`wire`] module turns document bytes
//! into a [`mesg::FitStream`] of materialized messages; the [`read`]
//! module drives such a stream once per target entity and assembles a
//! [`model::Track`] (segmented on timer stops, with lap and session
//! summaries), a [`model::Route`], or a single [`model::Waypoint`].
//!
//! The stages are independent: streams can also be built directly from
//! another parser's output, and the raw message stream is available to
//! applications needing fields outside the handled profile subset.
//!
//! ```
//! let data = std::fs::read("afternoon-ride.fit")?;
//!
//! let mut stream = wire::decode_slice(&data, "afternoon-ride.fit")?;
//! let track = read::read_track(&mut stream)?;
//!
//! println!("{}: {} points", track.name, track.point_count());
//! ```

pub mod convert;
pub mod mesg;
pub mod model;
pub mod profile;
pub mod read;
pub mod wire;
