use crate::modules::clock_entries::core::entry::ClockEntry;
use crate::modules::session::core::access_code::EmployeeIdentity;
use crate::modules::session::core::state::Screen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    ScreenChanged { screen: Screen },
    LoadingChanged { is_loading: bool },
    AdminLoggedIn { property_id: String, user_name: String },
    EmployeeLoggedIn { identity: EmployeeIdentity },
    ClockRecorded { entry: ClockEntry },
    LoggedOut,
}

impl SessionEvent {
    /// Screen or role changes. These end any pending auto-logout.
    pub fn is_transition(&self) -> bool {
        matches!(
            self,
            SessionEvent::ScreenChanged { .. }
                | SessionEvent::AdminLoggedIn { .. }
                | SessionEvent::EmployeeLoggedIn { .. }
                | SessionEvent::LoggedOut
        )
    }
}
