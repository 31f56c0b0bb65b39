use crate::modules::clock_entries::core::entry::{ClockEntry, ClockType};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Welcome,
    AdminRegistration,
    AdminLogin,
    AdminDashboard,
    EmployeeLogin,
    EmployeeDashboard,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::AdminRegistration => "admin-registration",
            Screen::AdminLogin => "admin-login",
            Screen::AdminDashboard => "admin-dashboard",
            Screen::EmployeeLogin => "employee-login",
            Screen::EmployeeDashboard => "employee-dashboard",
        }
    }

    /// Dashboards are only shown to a logged in user of the matching role.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Screen::AdminDashboard => Some(Role::Admin),
            Screen::EmployeeDashboard => Some(Role::Employee),
            _ => None,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub current_screen: Screen,
    pub role: Option<Role>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub property_id: Option<String>,
    /// Most recent first.
    pub clock_entries: Vec<ClockEntry>,
    pub is_loading: bool,
}

impl SessionState {
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.role.is_some()
    }

    pub fn is_clocked_in(&self) -> bool {
        self.clock_entries
            .first()
            .is_some_and(|entry| entry.clock_type == ClockType::ClockIn)
    }
}
