use crate::modules::clock_entries::core::entry::ClockEntry;
use crate::modules::session::core::events::SessionEvent;
use crate::modules::session::core::state::{Role, Screen, SessionState};

pub fn evolve(state: SessionState, event: SessionEvent) -> SessionState {
    match event {
        SessionEvent::ScreenChanged { screen } => SessionState {
            current_screen: screen,
            ..state
        },
        SessionEvent::LoadingChanged { is_loading } => SessionState { is_loading, ..state },
        SessionEvent::AdminLoggedIn {
            property_id,
            user_name,
        } => {
            let user_id = format!("admin_{property_id}");
            let clock_entries = entries_for(&state, &user_id);
            SessionState {
                current_screen: Screen::AdminDashboard,
                role: Some(Role::Admin),
                user_id: Some(user_id),
                user_name: Some(user_name),
                property_id: Some(property_id),
                clock_entries,
                is_loading: false,
            }
        }
        SessionEvent::EmployeeLoggedIn { identity } => {
            let clock_entries = entries_for(&state, &identity.employee_id);
            SessionState {
                current_screen: Screen::EmployeeDashboard,
                role: Some(Role::Employee),
                user_id: Some(identity.employee_id),
                user_name: Some(identity.employee_name),
                property_id: Some(identity.property_id),
                clock_entries,
                is_loading: false,
            }
        }
        SessionEvent::ClockRecorded { entry } => {
            let mut clock_entries = Vec::with_capacity(state.clock_entries.len() + 1);
            clock_entries.push(entry);
            clock_entries.extend(state.clock_entries);
            SessionState {
                clock_entries,
                ..state
            }
        }
        SessionEvent::LoggedOut => SessionState::initial(),
    }
}

// Session entries belong to one user; a different user starts empty.
fn entries_for(state: &SessionState, user_id: &str) -> Vec<ClockEntry> {
    if state.user_id.as_deref() == Some(user_id) {
        state.clock_entries.clone()
    } else {
        Vec::new()
    }
}
