//! Activity-mode content builder.

use alloc::vec::Vec;

use super::emitter::Emitter;
use super::{
    Activity, EVENT_TYPE_START, EVENT_TYPE_STOP, EVENT_TYPE_STOP_ALL, Error, FILE_ACTIVITY,
    emit_activity, emit_file_id, emit_lap, emit_point, emit_session, emit_timer_event,
};

/// Encode a track into an activity document.
///
/// Emission order per session: timer events synthesized from each lap's
/// start and end times (the last lap ends the timer entirely), every point
/// across the session's laps, each lap message, then the session message.
/// One activity message per session follows after all sessions.
///
/// This function is also re-exported as `pannier::encode::encode_activity`.
pub fn encode(activity: &Activity) -> Result<Vec<u8>, Error> {
    if activity.sessions.is_empty() {
        return Err(Error::EmptyActivity);
    }

    let mut emitter = Emitter::new();

    emit_file_id(&mut emitter, FILE_ACTIVITY, activity)?;

    for session in &activity.sessions {
        for (index, lap) in session.laps.iter().enumerate() {
            let stop = if index + 1 == session.laps.len() {
                EVENT_TYPE_STOP_ALL
            } else {
                EVENT_TYPE_STOP
            };

            emit_timer_event(&mut emitter, lap.start_time, EVENT_TYPE_START)?;
            emit_timer_event(&mut emitter, lap.end_time, stop)?;
        }

        for lap in &session.laps {
            for point in &lap.points {
                emit_point(&mut emitter, point)?;
            }
        }

        for lap in &session.laps {
            emit_lap(&mut emitter, lap)?;
        }

        emit_session(&mut emitter, session, activity.sport)?;
    }

    for session in &activity.sessions {
        emit_activity(&mut emitter, session)?;
    }

    Ok(emitter.finish())
}
