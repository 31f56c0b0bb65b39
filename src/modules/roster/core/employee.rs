use crate::modules::clock_entries::core::entry::ClockType;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayType {
    Hourly,
    Weekly,
    Annually,
}

/// A past clock event on the roster. `date` is the calendar day the
/// event is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalEntry {
    pub id: u32,
    #[serde(rename = "type")]
    pub clock_type: ClockType,
    pub timestamp: NaiveDateTime,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub pay_type: PayType,
    pub total_hours: f64,
    pub clock_entries: Vec<HistoricalEntry>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
