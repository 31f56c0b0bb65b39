use crate::modules::roster::core::employee::Employee;

const DEMO_ROSTER: &str = include_str!("demo_roster.json");

/// The three sample employees the admin view ships with.
pub fn demo_roster() -> Result<Vec<Employee>, serde_json::Error> {
    serde_json::from_str(DEMO_ROSTER)
}
