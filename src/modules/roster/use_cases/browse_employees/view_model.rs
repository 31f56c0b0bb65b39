use crate::modules::roster::core::employee::Employee;
use crate::modules::roster::core::view::{
    EmployeeQuery, SortDirection, SortField, TimeFilter, project,
};
use chrono::NaiveDate;
use tracing::debug;

/// The admin's employee list: a roster, a query over it and the rows the
/// query currently produces. Every query change recomputes the rows before
/// returning.
#[derive(Debug, Clone)]
pub struct EmployeeViewModel {
    roster: Vec<Employee>,
    query: EmployeeQuery,
    today: NaiveDate,
    rows: Vec<Employee>,
}

impl EmployeeViewModel {
    pub fn new(roster: Vec<Employee>, today: NaiveDate) -> Self {
        let mut view = Self {
            roster,
            query: EmployeeQuery::default(),
            today,
            rows: Vec::new(),
        };
        view.recompute();
        view
    }

    pub fn rows(&self) -> &[Employee] {
        &self.rows
    }

    pub fn query(&self) -> &EmployeeQuery {
        &self.query
    }

    pub fn set_search(&mut self, search_text: impl Into<String>) {
        self.query.search_text = search_text.into();
        self.recompute();
    }

    pub fn set_time_filter(&mut self, time_filter: TimeFilter) {
        self.query.time_filter = time_filter;
        self.recompute();
    }

    /// Same field flips the direction; a new field starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.query.sort_field == field {
            self.query.sort_direction = self.query.sort_direction.flipped();
        } else {
            self.query.sort_field = field;
            self.query.sort_direction = SortDirection::Asc;
        }
        self.recompute();
    }

    /// Moves the reference day for the relative time filters.
    pub fn set_today(&mut self, today: NaiveDate) {
        if self.today != today {
            self.today = today;
            self.recompute();
        }
    }

    /// Replaces the whole query at once.
    pub fn apply(&mut self, query: EmployeeQuery) {
        self.query = query;
        self.recompute();
    }

    pub fn employee(&self, id: u32) -> Option<&Employee> {
        self.roster.iter().find(|employee| employee.id == id)
    }

    pub fn recompute(&mut self) {
        self.rows = project(&self.roster, &self.query, self.today)
            .into_iter()
            .cloned()
            .collect();
        debug!(rows = self.rows.len(), query = ?self.query, "employee view recomputed");
    }
}
