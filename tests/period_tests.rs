use chrono::NaiveDate;

mod common;
use common::{event, ts};
use ctc_checkin::errors::AppError;
use ctc_checkin::models::{Location, Status, Table};
use ctc_checkin::utils::period::{self, Period};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_parse_single_forms() {
    let year = Period::parse("2025").unwrap().unwrap();
    assert_eq!((year.start, year.end), (day(2025, 1, 1), day(2025, 12, 31)));

    let month = Period::parse("2024-02").unwrap().unwrap();
    assert_eq!((month.start, month.end), (day(2024, 2, 1), day(2024, 2, 29)));

    let dec = Period::parse("2025-12").unwrap().unwrap();
    assert_eq!(dec.end, day(2025, 12, 31));

    let one = Period::parse("2025-10-03").unwrap().unwrap();
    assert_eq!((one.start, one.end), (day(2025, 10, 3), day(2025, 10, 3)));
}

#[test]
fn test_parse_ranges() {
    let p = Period::parse("2025-09:2025-10").unwrap().unwrap();
    assert_eq!((p.start, p.end), (day(2025, 9, 1), day(2025, 10, 31)));

    let p = Period::parse(" 2025-10-01 : 2025-10-05 ").unwrap().unwrap();
    assert_eq!((p.start, p.end), (day(2025, 10, 1), day(2025, 10, 5)));
}

#[test]
fn test_parse_all_disables_filter() {
    assert_eq!(Period::parse("all").unwrap(), None);
    assert_eq!(Period::parse("ALL").unwrap(), None);
}

#[test]
fn test_parse_rejects_bad_input() {
    for raw in ["", "25", "2025-1", "2025-13", "2025-02-30", "2025:2025-10", "2025-10:2025-09", "x"] {
        assert!(
            matches!(Period::parse(raw), Err(AppError::InvalidPeriod(_))),
            "{raw} should be rejected"
        );
    }
}

#[test]
fn test_apply_filters_and_keeps_order() {
    let table = Table::from_rows(vec![
        event("Alice", "Logistics", Location::LegoLand, Status::CheckIn, ts(1, 8, 0)),
        event("Bob", "Medical", Location::Other, Status::CheckIn, ts(3, 23, 59)),
        event("Carol", "Medical", Location::Other, Status::CheckOut, ts(4, 0, 0)),
        event("Dave", "Logistics", Location::LegoLand, Status::CheckIn, ts(2, 12, 0)),
    ]);

    let filtered = period::apply(table.clone(), Some("2025-10-02:2025-10-03")).unwrap();
    let names: Vec<&str> = filtered.iter().map(|ev| ev.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Dave"]);

    assert_eq!(period::apply(table.clone(), None).unwrap().len(), 4);
    assert_eq!(period::apply(table, Some("all")).unwrap().len(), 4);
}
