use crate::modules::clock_entries::core::entry::{ClockType, NewClockEntry};
use crate::modules::session::core::events::SessionEvent;
use crate::modules::session::core::state::{Role, Screen, SessionState};
use chrono::{DateTime, Utc};

pub const UNASSIGNED_PROPERTY_ID: &str = "unassigned";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("screen {screen} requires an active {role} session")]
    ScreenRequiresRole { screen: Screen, role: Role },

    #[error("no active user to record a clock entry for")]
    NoActiveUser,
}

pub fn decide_navigate(state: &SessionState, screen: Screen) -> Result<Vec<SessionEvent>, DecideError> {
    if state.current_screen == screen {
        return Ok(Vec::new());
    }
    match screen.required_role() {
        Some(role) if state.role != Some(role) => {
            Err(DecideError::ScreenRequiresRole { screen, role })
        }
        _ => Ok(vec![SessionEvent::ScreenChanged { screen }]),
    }
}

/// The entry a clock action would store for the active user.
pub fn decide_clock(
    state: &SessionState,
    clock_type: ClockType,
    now: DateTime<Utc>,
) -> Result<NewClockEntry, DecideError> {
    let (Some(user_id), Some(user_name)) = (&state.user_id, &state.user_name) else {
        return Err(DecideError::NoActiveUser);
    };
    let property_id = state
        .property_id
        .as_deref()
        .unwrap_or(UNASSIGNED_PROPERTY_ID);
    Ok(NewClockEntry::new(
        user_id.as_str(),
        user_name.as_str(),
        clock_type,
        property_id,
        now,
    ))
}
