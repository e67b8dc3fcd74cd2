//! Model types and entry points for common encoding patterns.
//!
//! The functions in this module are suited to encoding a track model into
//! activity and course documents. Populate an [`Activity`] (every field of
//! the model is optional; absent fields are simply left out of the emitted
//! messages) and pass it to [`encode_activity`] or [`encode_course`].
//!
//! Applications emitting message sequences these builders do not cover can
//! drive an [`Emitter`] directly.

use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

use crate::wire::types::Value;

pub mod activity;
pub mod course;
pub mod emitter;
pub mod message;

pub use activity::encode as encode_activity;
pub use course::encode as encode_course;
pub use emitter::Emitter;
pub use message::BuildError;

/// Errors occurring while encoding a document.
#[derive(Debug, Error)]
pub enum Error {
    /// The activity holds no sessions.
    #[error("The activity holds no sessions.")]
    EmptyActivity,
    /// The activity holds no sessions or no route points.
    #[error("The activity holds no sessions or no route points.")]
    EmptyCourse,
    /// A message instance could not be constructed.
    #[error(transparent)]
    Build(#[from] BuildError),
    /// An error from the supplied writer.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A track to encode, as assembled by a recording device or a converter
/// from another track format.
#[derive(Debug, Clone, Default)]
pub struct Activity {
    pub name: Option<String>,
    pub sport: Sport,
    /// Unix seconds. Falls back to the first session's start time.
    pub created: Option<u32>,
    pub sessions: Vec<Session>,
}

/// One session of an activity, with its aggregate metrics.
///
/// Aggregates are carried as supplied; this crate does not derive them from
/// the points.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Unix seconds.
    pub start_time: Option<u32>,
    /// Unix seconds.
    pub end_time: Option<u32>,
    /// Seconds, including pauses.
    pub total_elapsed_time: Option<f64>,
    /// Seconds, excluding pauses.
    pub total_timer_time: Option<f64>,
    /// Meters.
    pub total_distance: Option<f64>,
    /// Meters per second.
    pub avg_speed: Option<f64>,
    /// Meters per second.
    pub max_speed: Option<f64>,
    pub avg_heart_rate: Option<u8>,
    pub max_heart_rate: Option<u8>,
    pub avg_cadence: Option<u8>,
    /// Watts.
    pub avg_power: Option<u16>,
    /// Watts.
    pub max_power: Option<u16>,
    pub total_calories: Option<u16>,
    pub laps: Vec<Lap>,
}

/// One lap of a session, with its aggregate metrics and track points.
#[derive(Debug, Clone, Default)]
pub struct Lap {
    /// Unix seconds.
    pub start_time: Option<u32>,
    /// Unix seconds.
    pub end_time: Option<u32>,
    pub total_elapsed_time: Option<f64>,
    pub total_timer_time: Option<f64>,
    pub total_distance: Option<f64>,
    pub avg_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub avg_heart_rate: Option<u8>,
    pub max_heart_rate: Option<u8>,
    pub avg_cadence: Option<u8>,
    pub avg_power: Option<u16>,
    pub max_power: Option<u16>,
    pub total_calories: Option<u16>,
    pub points: Vec<Point>,
}

/// One track point.
#[derive(Debug, Clone, Default)]
pub struct Point {
    /// Unix seconds.
    pub timestamp: Option<u32>,
    /// Decimal degrees.
    pub latitude: Option<f64>,
    /// Decimal degrees.
    pub longitude: Option<f64>,
    /// Meters.
    pub altitude: Option<f64>,
    /// Meters from the start of the activity.
    pub distance: Option<f64>,
    /// Meters per second.
    pub speed: Option<f64>,
    pub heart_rate: Option<u8>,
    /// Revolutions (or strides) per minute.
    pub cadence: Option<u8>,
    /// Watts.
    pub power: Option<u16>,
    /// Degrees Celsius.
    pub temperature: Option<i8>,
}

/// Sport discipline codes of the profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Sport {
    #[default]
    Generic = 0,
    Running = 1,
    Cycling = 2,
    Swimming = 5,
    Walking = 11,
    Hiking = 17,
}

// Profile enumeration values used by the content builders.
const FILE_ACTIVITY: u32 = 4;
const FILE_COURSE: u32 = 6;
const MANUFACTURER_DEVELOPMENT: u32 = 255;
const EVENT_TIMER: u32 = 0;
const EVENT_SESSION: u32 = 8;
const EVENT_LAP: u32 = 9;
const EVENT_ACTIVITY: u32 = 26;
const EVENT_TYPE_START: u32 = 0;
const EVENT_TYPE_STOP: u32 = 1;
const EVENT_TYPE_STOP_ALL: u32 = 4;
const ACTIVITY_MANUAL: u32 = 0;

fn emit_file_id(emitter: &mut Emitter, file_type: u32, activity: &Activity) -> Result<(), BuildError> {
    let created = activity
        .created
        .or_else(|| activity.sessions.iter().find_map(|s| s.start_time));

    emitter.emit(
        "file_id",
        &[
            ("type", Some(Value::Uint(file_type))),
            ("manufacturer", Some(Value::Uint(MANUFACTURER_DEVELOPMENT))),
            ("product", Some(Value::Uint(0))),
            ("serial_number", None),
            ("time_created", created.map(Value::Uint)),
        ],
    )
}

fn emit_timer_event(
    emitter: &mut Emitter,
    timestamp: Option<u32>,
    event_type: u32,
) -> Result<(), BuildError> {
    emitter.emit(
        "event",
        &[
            ("timestamp", timestamp.map(Value::Uint)),
            ("event", Some(Value::Uint(EVENT_TIMER))),
            ("event_type", Some(Value::Uint(event_type))),
            ("event_group", Some(Value::Uint(0))),
        ],
    )
}

fn emit_point(emitter: &mut Emitter, point: &Point) -> Result<(), BuildError> {
    emitter.emit(
        "record",
        &[
            ("timestamp", point.timestamp.map(Value::Uint)),
            ("position_lat", point.latitude.map(Value::Float)),
            ("position_long", point.longitude.map(Value::Float)),
            ("altitude", point.altitude.map(Value::Float)),
            ("heart_rate", point.heart_rate.map(|x| Value::Uint(x.into()))),
            ("cadence", point.cadence.map(|x| Value::Uint(x.into()))),
            ("distance", point.distance.map(Value::Float)),
            ("speed", point.speed.map(Value::Float)),
            ("power", point.power.map(|x| Value::Uint(x.into()))),
            ("temperature", point.temperature.map(|x| Value::Sint(x.into()))),
        ],
    )
}

fn emit_lap(emitter: &mut Emitter, lap: &Lap) -> Result<(), BuildError> {
    let first = lap.points.first();
    let last = lap.points.last();

    emitter.emit(
        "lap",
        &[
            ("timestamp", lap.end_time.map(Value::Uint)),
            ("event", Some(Value::Uint(EVENT_LAP))),
            ("event_type", Some(Value::Uint(EVENT_TYPE_STOP))),
            ("start_time", lap.start_time.map(Value::Uint)),
            ("start_position_lat", first.and_then(|p| p.latitude).map(Value::Float)),
            ("start_position_long", first.and_then(|p| p.longitude).map(Value::Float)),
            ("end_position_lat", last.and_then(|p| p.latitude).map(Value::Float)),
            ("end_position_long", last.and_then(|p| p.longitude).map(Value::Float)),
            ("total_elapsed_time", lap.total_elapsed_time.map(Value::Float)),
            ("total_timer_time", lap.total_timer_time.map(Value::Float)),
            ("total_distance", lap.total_distance.map(Value::Float)),
            ("total_calories", lap.total_calories.map(|x| Value::Uint(x.into()))),
            ("avg_speed", lap.avg_speed.map(Value::Float)),
            ("max_speed", lap.max_speed.map(Value::Float)),
            ("avg_heart_rate", lap.avg_heart_rate.map(|x| Value::Uint(x.into()))),
            ("max_heart_rate", lap.max_heart_rate.map(|x| Value::Uint(x.into()))),
            ("avg_cadence", lap.avg_cadence.map(|x| Value::Uint(x.into()))),
            ("avg_power", lap.avg_power.map(|x| Value::Uint(x.into()))),
            ("max_power", lap.max_power.map(|x| Value::Uint(x.into()))),
        ],
    )
}

fn emit_session(emitter: &mut Emitter, session: &Session, sport: Sport) -> Result<(), BuildError> {
    let first = session.laps.first().and_then(|l| l.points.first());

    emitter.emit(
        "session",
        &[
            ("timestamp", session.end_time.map(Value::Uint)),
            ("event", Some(Value::Uint(EVENT_SESSION))),
            ("event_type", Some(Value::Uint(EVENT_TYPE_STOP))),
            ("start_time", session.start_time.map(Value::Uint)),
            ("start_position_lat", first.and_then(|p| p.latitude).map(Value::Float)),
            ("start_position_long", first.and_then(|p| p.longitude).map(Value::Float)),
            ("sport", Some(Value::Uint(sport as u32))),
            ("total_elapsed_time", session.total_elapsed_time.map(Value::Float)),
            ("total_timer_time", session.total_timer_time.map(Value::Float)),
            ("total_distance", session.total_distance.map(Value::Float)),
            ("total_calories", session.total_calories.map(|x| Value::Uint(x.into()))),
            ("avg_speed", session.avg_speed.map(Value::Float)),
            ("max_speed", session.max_speed.map(Value::Float)),
            ("avg_heart_rate", session.avg_heart_rate.map(|x| Value::Uint(x.into()))),
            ("max_heart_rate", session.max_heart_rate.map(|x| Value::Uint(x.into()))),
            ("avg_cadence", session.avg_cadence.map(|x| Value::Uint(x.into()))),
            ("avg_power", session.avg_power.map(|x| Value::Uint(x.into()))),
            ("max_power", session.max_power.map(|x| Value::Uint(x.into()))),
            ("first_lap_index", Some(Value::Uint(0))),
            ("num_laps", Some(Value::Uint(session.laps.len() as u32))),
        ],
    )
}

fn emit_activity(emitter: &mut Emitter, session: &Session) -> Result<(), BuildError> {
    emitter.emit(
        "activity",
        &[
            ("timestamp", session.end_time.map(Value::Uint)),
            ("total_timer_time", session.total_timer_time.map(Value::Float)),
            ("num_sessions", Some(Value::Uint(1))),
            ("type", Some(Value::Uint(ACTIVITY_MANUAL))),
            ("event", Some(Value::Uint(EVENT_ACTIVITY))),
            ("event_type", Some(Value::Uint(EVENT_TYPE_STOP))),
        ],
    )
}

#[cfg(feature = "std")]
mod io {
    use std::io::Write;

    use super::{Activity, Error};

    /// Encode an activity document, writing it out.
    ///
    /// _Requires Cargo feature `std`._
    pub fn write_activity(w: &mut impl Write, activity: &Activity) -> Result<(), Error> {
        let document = super::encode_activity(activity)?;
        Ok(w.write_all(&document)?)
    }

    /// Encode a course document, writing it out.
    ///
    /// _Requires Cargo feature `std`._
    pub fn write_course(w: &mut impl Write, activity: &Activity) -> Result<(), Error> {
        let document = super::encode_course(activity)?;
        Ok(w.write_all(&document)?)
    }
}

#[cfg(feature = "std")]
pub use io::{write_activity, write_course};
