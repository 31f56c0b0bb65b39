// Roster projection: search, time window and sort.
//
// Pure functions over a borrowed roster. "Today" is passed in so results
// are reproducible; the view model supplies it from the clock.

use crate::modules::roster::core::employee::{Employee, HistoricalEntry};
use crate::shared::core::validation::ValidationErrors;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TimeFilter {
    #[default]
    All,
    Today,
    Yesterday,
    ThisWeek,
    ThisMonth,
    /// A missing bound lets every employee through.
    Custom {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl TimeFilter {
    /// Builds a filter from the kiosk's form values. Unknown kinds mean
    /// `all`; empty date strings are missing bounds.
    pub fn from_parts(kind: &str, start: &str, end: &str) -> Result<Self, ValidationErrors> {
        Ok(match kind {
            "today" => TimeFilter::Today,
            "yesterday" => TimeFilter::Yesterday,
            "this-week" => TimeFilter::ThisWeek,
            "this-month" => TimeFilter::ThisMonth,
            "custom" => {
                let mut errors = ValidationErrors::new();
                let start = parse_bound(&mut errors, "startDate", start);
                let end = parse_bound(&mut errors, "endDate", end);
                errors.into_result(TimeFilter::Custom { start, end })?
            }
            _ => TimeFilter::All,
        })
    }

    pub fn admits(&self, entry: &HistoricalEntry, today: NaiveDate) -> bool {
        let date = entry.date;
        match *self {
            TimeFilter::All => true,
            TimeFilter::Today => date == today,
            TimeFilter::Yesterday => today.pred_opt() == Some(date),
            TimeFilter::ThisWeek => date >= week_start(today),
            TimeFilter::ThisMonth => date.month() == today.month() && date.year() == today.year(),
            TimeFilter::Custom {
                start: Some(start),
                end: Some(end),
            } => start <= date && date <= end,
            TimeFilter::Custom { .. } => true,
        }
    }

    fn passes_everyone(&self) -> bool {
        matches!(
            self,
            TimeFilter::All
                | TimeFilter::Custom { start: None, .. }
                | TimeFilter::Custom { end: None, .. }
        )
    }
}

fn parse_bound(errors: &mut ValidationErrors, field: &str, value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, "Invalid date, expected YYYY-MM-DD");
            None
        }
    }
}

/// Most recent Sunday, `today` included.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    let back = u64::from(today.weekday().num_days_from_sunday());
    today.checked_sub_days(Days::new(back)).unwrap_or(today)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Name,
    TotalHours,
    Email,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeQuery {
    pub search_text: String,
    pub time_filter: TimeFilter,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl EmployeeQuery {
    fn matches_search(&self, employee: &Employee) -> bool {
        let needle = self.search_text.to_lowercase();
        employee.full_name().to_lowercase().contains(&needle)
            || employee.email.to_lowercase().contains(&needle)
    }

    fn matches_window(&self, employee: &Employee, today: NaiveDate) -> bool {
        self.time_filter.passes_everyone()
            || employee
                .clock_entries
                .iter()
                .any(|entry| self.time_filter.admits(entry, today))
    }

    fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        let ordering = match self.sort_field {
            SortField::Name => locale_compare(&a.full_name(), &b.full_name()),
            SortField::TotalHours => a.total_hours.total_cmp(&b.total_hours),
            SortField::Email => locale_compare(&a.email, &b.email),
        };
        match self.sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Case-insensitive first; on a tie lowercase sorts before uppercase.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Employees matching the query, in query order. Ties keep roster order.
pub fn project<'a>(roster: &'a [Employee], query: &EmployeeQuery, today: NaiveDate) -> Vec<&'a Employee> {
    let mut rows: Vec<&Employee> = roster
        .iter()
        .filter(|employee| query.matches_search(employee) && query.matches_window(employee, today))
        .collect();
    rows.sort_by(|a, b| query.compare(a, b));
    rows
}
