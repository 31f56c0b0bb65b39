// Properties of the admin's employee list over the demo roster.

use chrono::NaiveDate;
use rstest::{fixture, rstest};
use time_clock::modules::roster::core::employee::Employee;
use time_clock::modules::roster::core::seed::demo_roster;
use time_clock::modules::roster::core::view::{
    EmployeeQuery, SortDirection, SortField, TimeFilter, project,
};
use time_clock::modules::roster::use_cases::browse_employees::view_model::EmployeeViewModel;

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

#[fixture]
fn roster() -> Vec<Employee> {
    demo_roster().unwrap()
}

#[rstest]
#[case(SortField::Name, SortDirection::Asc)]
#[case(SortField::Name, SortDirection::Desc)]
#[case(SortField::TotalHours, SortDirection::Asc)]
#[case(SortField::Email, SortDirection::Desc)]
fn an_unfiltered_query_should_return_the_whole_roster(
    roster: Vec<Employee>,
    #[case] sort_field: SortField,
    #[case] sort_direction: SortDirection,
) {
    let query = EmployeeQuery {
        sort_field,
        sort_direction,
        ..EmployeeQuery::default()
    };
    let rows = project(&roster, &query, jan(15));
    let mut ids: Vec<u32> = rows.iter().map(|e| e.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[rstest]
fn hours_descending_should_never_increase(roster: Vec<Employee>) {
    let query = EmployeeQuery {
        sort_field: SortField::TotalHours,
        sort_direction: SortDirection::Desc,
        ..EmployeeQuery::default()
    };
    let hours: Vec<f64> = project(&roster, &query, jan(15))
        .iter()
        .map(|e| e.total_hours)
        .collect();
    assert_eq!(hours, vec![45.0, 42.5, 38.25]);
}

#[rstest]
fn equal_hours_should_keep_roster_order(mut roster: Vec<Employee>) {
    roster[0].total_hours = 45.0;
    let query = EmployeeQuery {
        sort_field: SortField::TotalHours,
        sort_direction: SortDirection::Desc,
        ..EmployeeQuery::default()
    };
    let ids: Vec<u32> = project(&roster, &query, jan(15)).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3, 2]);
}

#[rstest]
fn an_incomplete_custom_range_should_let_everyone_through(roster: Vec<Employee>) {
    let mut view = EmployeeViewModel::new(roster, jan(20));
    view.set_time_filter(TimeFilter::from_parts("custom", "", "").unwrap());
    assert_eq!(view.rows().len(), 3);

    view.set_time_filter(TimeFilter::from_parts("custom", "2024-02-01", "2024-02-29").unwrap());
    assert!(view.rows().is_empty());
}

#[rstest]
fn search_and_time_filter_should_both_apply(roster: Vec<Employee>) {
    let mut view = EmployeeViewModel::new(roster, jan(16));
    view.set_search("DOE");
    view.set_time_filter(TimeFilter::Yesterday);
    let names: Vec<String> = view.rows().iter().map(Employee::full_name).collect();
    assert_eq!(names, vec!["John Doe"]);

    view.set_time_filter(TimeFilter::Today);
    assert!(view.rows().is_empty());
}
