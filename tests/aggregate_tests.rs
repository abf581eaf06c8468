mod common;
use common::{event, ts};
use ctc_checkin::core::aggregate::{
    Dashboard, GroupCount, count_by_department, count_by_location, full_log_descending,
};
use ctc_checkin::db::append;
use ctc_checkin::models::{Location, Status, Table};

fn gc(label: &str, total: usize) -> GroupCount {
    GroupCount {
        label: label.to_string(),
        total,
    }
}

fn sample_table() -> Table {
    Table::from_rows(vec![
        event("Alice", "Logistics", Location::LegoLand, Status::CheckIn, ts(1, 8, 0)),
        event("Bob", "Logistics", Location::LegoLand, Status::CheckOut, ts(1, 9, 0)),
        event("Carol", "Aviation Wing", Location::SurvivalFta, Status::CheckIn, ts(1, 9, 30))
            .with_flight_name("Falcon 1"),
        event("Dave", "Medical", Location::CityOfColdLake, Status::CheckIn, ts(1, 10, 0)),
        event("Erin", "Medical", Location::MainTrainingSite, Status::CheckIn, ts(1, 11, 0)),
    ])
}

#[test]
fn test_check_out_rows_are_not_counted() {
    let table = Table::from_rows(vec![
        event("A", "Ops", Location::LegoLand, Status::CheckIn, ts(2, 8, 0)),
        event("B", "Ops", Location::LegoLand, Status::CheckOut, ts(2, 9, 0)),
    ]);

    assert_eq!(count_by_location(&table), vec![gc("LegoLand", 1)]);
}

#[test]
fn test_count_by_location_sorted_by_label_not_count() {
    let table = sample_table();

    assert_eq!(
        count_by_location(&table),
        vec![
            gc("City of Cold Lake", 1),
            gc("LegoLand", 1),
            gc("Main Training Site", 1),
            gc("Survival FTA", 1),
        ]
    );
}

#[test]
fn test_count_by_department_groups_and_sorts() {
    let table = sample_table();

    assert_eq!(
        count_by_department(&table),
        vec![gc("Aviation Wing", 1), gc("Logistics", 1), gc("Medical", 2)]
    );
}

#[test]
fn test_empty_table_has_no_groups() {
    let table = Table::new();

    assert!(count_by_location(&table).is_empty());
    assert!(count_by_department(&table).is_empty());
    assert!(full_log_descending(&table).is_empty());
}

#[test]
fn test_appending_a_check_in_bumps_its_location() {
    let table = sample_table();
    let before = count_by_location(&table);

    let e = event("Frank", "Logistics", Location::LegoLand, Status::CheckIn, ts(1, 12, 0));
    let after = count_by_location(&append(table, e));

    let total = |counts: &[GroupCount]| {
        counts
            .iter()
            .find(|c| c.label == "LegoLand")
            .map(|c| c.total)
            .unwrap_or(0)
    };
    assert_eq!(total(&after), total(&before) + 1);

    // Other locations untouched
    for c in before.iter().filter(|c| c.label != "LegoLand") {
        assert!(after.contains(c));
    }
}

#[test]
fn test_appending_a_check_in_to_new_location_counts_one() {
    let table = sample_table();
    assert!(count_by_location(&table).iter().all(|c| c.label != "Other"));

    let e = event("Gina", "Ops", Location::Other, Status::CheckIn, ts(1, 13, 0));
    let after = count_by_location(&append(table, e));

    assert!(after.contains(&gc("Other", 1)));
}

#[test]
fn test_full_log_descending_puts_latest_first() {
    let table = sample_table();
    let e = event("Hank", "Ops", Location::Other, Status::CheckOut, ts(1, 14, 0));

    let appended = append(table, e.clone());
    let log = full_log_descending(&appended);

    assert_eq!(log.first(), Some(&e));

    let mut reversed = appended.rows().to_vec();
    reversed.reverse();
    assert_eq!(log, reversed);
}

#[test]
fn test_full_log_is_not_filtered() {
    let table = sample_table();
    assert_eq!(full_log_descending(&table).len(), table.len());
}

#[test]
fn test_counts_are_repeatable() {
    let table = sample_table();

    assert_eq!(count_by_location(&table), count_by_location(&table));
    assert_eq!(count_by_department(&table), count_by_department(&table));
}

#[test]
fn test_append_preserves_prior_order() {
    let table = sample_table();
    let names_before: Vec<String> = table.iter().map(|e| e.name.clone()).collect();

    let appended = append(
        table,
        event("Ivy", "Ops", Location::Other, Status::CheckIn, ts(1, 15, 0)),
    );
    let names_after: Vec<String> = appended.iter().map(|e| e.name.clone()).collect();

    assert_eq!(&names_after[..names_before.len()], names_before.as_slice());
    assert_eq!(names_after.last().map(String::as_str), Some("Ivy"));
}

#[test]
fn test_dashboard_collects_all_views() {
    let table = sample_table();
    let dashboard = Dashboard::build(&table);

    assert_eq!(dashboard.by_location, count_by_location(&table));
    assert_eq!(dashboard.by_department, count_by_department(&table));
    assert_eq!(dashboard.log.first().map(|e| e.name.as_str()), Some("Erin"));
}
