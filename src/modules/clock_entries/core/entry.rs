use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClockType {
    #[serde(rename = "clock-in", alias = "in")]
    ClockIn,
    #[serde(rename = "clock-out", alias = "out")]
    ClockOut,
}

impl ClockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockType::ClockIn => "clock-in",
            ClockType::ClockOut => "clock-out",
        }
    }
}

impl fmt::Display for ClockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clock event as persisted in the local entry slot.
///
/// Only `synced` ever changes after creation, and only from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockEntry {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    #[serde(rename = "type")]
    pub clock_type: ClockType,
    pub timestamp: DateTime<Utc>,
    pub property_id: String,
    pub synced: bool,
}

/// A clock event that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClockEntry {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub clock_type: ClockType,
    pub timestamp: DateTime<Utc>,
    pub property_id: String,
}

impl NewClockEntry {
    pub fn new(
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        clock_type: ClockType,
        property_id: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            clock_type,
            timestamp,
            property_id: property_id.into(),
        }
    }

    pub fn unsynced(self) -> ClockEntry {
        ClockEntry {
            id: self.id,
            employee_id: self.employee_id,
            employee_name: self.employee_name,
            clock_type: self.clock_type,
            timestamp: self.timestamp,
            property_id: self.property_id,
            synced: false,
        }
    }
}
