//! Course-mode content builder.

use alloc::string::String;
use alloc::vec::Vec;

use crate::wire::types::Value;

use super::emitter::Emitter;
use super::{
    Activity, EVENT_TYPE_START, EVENT_TYPE_STOP_ALL, Error, FILE_COURSE, Point, emit_file_id,
    emit_lap, emit_point, emit_timer_event,
};

/// Encode a track into a course document.
///
/// Points from all laps are merged and sorted ascending by timestamp,
/// falling back to ascending distance where timestamps tie, and bracketed
/// by synthetic timer events. Points without a timestamp sort ahead of
/// timestamped ones, ordered among themselves by distance. Only the first
/// lap's lap message is emitted.
///
/// This function is also re-exported as `pannier::encode::encode_course`.
pub fn encode(activity: &Activity) -> Result<Vec<u8>, Error> {
    if activity.sessions.is_empty() {
        return Err(Error::EmptyCourse);
    }

    let laps = || activity.sessions.iter().flat_map(|s| &s.laps);

    let mut points: Vec<&Point> = laps().flat_map(|l| &l.points).collect();
    if points.is_empty() {
        return Err(Error::EmptyCourse);
    }

    // The comparator must be a total order for `sort_by`.
    points.sort_by(|a, b| {
        let by_distance = match (a.distance, b.distance) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (x, y) => x.is_some().cmp(&y.is_some()),
        };

        a.timestamp.cmp(&b.timestamp).then(by_distance)
    });

    let mut emitter = Emitter::new();

    emit_file_id(&mut emitter, FILE_COURSE, activity)?;

    let name = activity.name.as_deref().unwrap_or("Course");
    emitter.emit(
        "course",
        &[
            ("sport", Some(Value::Uint(activity.sport as u32))),
            ("name", Some(Value::Text(String::from(name)))),
        ],
    )?;

    emit_timer_event(
        &mut emitter,
        points.first().and_then(|p| p.timestamp),
        EVENT_TYPE_START,
    )?;

    for &point in &points {
        emit_point(&mut emitter, point)?;
    }

    emit_timer_event(
        &mut emitter,
        points.last().and_then(|p| p.timestamp),
        EVENT_TYPE_STOP_ALL,
    )?;

    // A non-empty point set implies at least one lap.
    if let Some(lap) = laps().next() {
        emit_lap(&mut emitter, lap)?;
    }

    Ok(emitter.finish())
}
