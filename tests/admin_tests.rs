use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::time::{Duration, Instant};

mod common;
use common::{ctc_with, event, init_store, init_store_with_data, setup_test_store, ts};
use ctc_checkin::core::access::{AdminSession, PinOutcome};
use ctc_checkin::core::admin::{render_counts, render_dashboard};
use ctc_checkin::core::aggregate::{Dashboard, GroupCount};
use ctc_checkin::models::{Location, Status, Table};

#[test]
fn test_pin_gate_outcomes() {
    let mut session = AdminSession::new("2025", Duration::from_secs(10));
    assert!(!session.is_logged_in());

    assert_eq!(session.enter_pin(""), PinOutcome::Empty);
    assert!(!session.is_logged_in());

    assert_eq!(session.enter_pin("1234"), PinOutcome::Incorrect);
    assert!(!session.is_logged_in());

    assert_eq!(session.enter_pin("2025"), PinOutcome::Granted);
    assert!(session.is_logged_in());
}

#[test]
fn test_login_persists_for_the_session() {
    let mut session = AdminSession::new("2025", Duration::from_secs(10));
    session.enter_pin("2025");

    assert_eq!(session.enter_pin("wrong"), PinOutcome::Granted);
    assert_eq!(session.enter_pin(""), PinOutcome::Granted);
    assert!(session.is_logged_in());
}

#[test]
fn test_pin_is_compared_exactly() {
    let mut session = AdminSession::new("2025", Duration::from_secs(10));
    assert_eq!(session.enter_pin(" 2025"), PinOutcome::Incorrect);
    assert_eq!(session.enter_pin("20250"), PinOutcome::Incorrect);
}

#[test]
fn test_refresh_schedule() {
    let mut session = AdminSession::new("2025", Duration::from_secs(10));
    let start = Instant::now();

    assert!(session.due_for_refresh(start));
    assert_eq!(session.until_next_refresh(start), Duration::ZERO);

    session.mark_refreshed(start);
    assert!(!session.due_for_refresh(start + Duration::from_secs(3)));
    assert_eq!(
        session.until_next_refresh(start + Duration::from_secs(3)),
        Duration::from_secs(7)
    );
    assert!(session.due_for_refresh(start + Duration::from_secs(10)));
    assert_eq!(
        session.until_next_refresh(start + Duration::from_secs(12)),
        Duration::ZERO
    );
}

#[test]
fn test_render_counts_lists_each_group() {
    let counts = vec![
        GroupCount {
            label: "LegoLand".into(),
            total: 2,
        },
        GroupCount {
            label: "Main Training Site".into(),
            total: 1,
        },
    ];
    let out = render_counts("Location", &counts);
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[0].starts_with("Location"));
    assert!(lines[0].contains("Total Checked In"));
    assert!(lines[2].starts_with("LegoLand"));
    assert!(lines[2].trim_end().ends_with('2'));
    assert!(lines[3].starts_with("Main Training Site"));
}

#[test]
fn test_render_dashboard_sections_and_order() {
    let table = Table::from_rows(vec![
        event("Alice", "Logistics", Location::LegoLand, Status::CheckIn, ts(3, 8, 0)),
        event("Bob", "Medical", Location::Other, Status::CheckOut, ts(3, 9, 0)),
    ]);
    let out = render_dashboard(&Dashboard::build(&table));

    let loc = out.find("Current Check-Ins by Location").unwrap();
    let dept = out.find("Current Check-Ins by Department").unwrap();
    let log = out.find("Full Check-In/Out Log").unwrap();
    assert!(loc < dept && dept < log);

    // Bob checked out: only in the log, listed first.
    let bob = out.rfind("Bob").unwrap();
    let alice = out.rfind("Alice").unwrap();
    assert!(bob > log && bob < alice);
    assert!(!out[..log].contains("Medical"));
}

#[test]
fn test_cli_admin_incorrect_pin_fails() {
    let (data, db) = setup_test_store("admin_bad_pin");
    init_store_with_data(&data, &db);

    ctc_with(&data, &db, &["admin", "--pin", "1234"])
        .assert()
        .failure()
        .stderr(contains("Incorrect PIN."));
}

#[test]
fn test_cli_admin_empty_pin_shows_nothing() {
    let (data, db) = setup_test_store("admin_empty_pin");
    init_store_with_data(&data, &db);

    ctc_with(&data, &db, &["admin"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("Enter Admin PIN").and(contains("Check-Ins by Location").not()));
}

#[test]
fn test_cli_admin_dashboard() {
    let (data, db) = setup_test_store("admin_dashboard");
    init_store_with_data(&data, &db);

    ctc_with(&data, &db, &["admin", "--pin", "2025"])
        .assert()
        .success()
        .stdout(
            contains("Access granted")
                .and(contains("Check-Ins by Location"))
                .and(contains("LegoLand"))
                .and(contains("Aviation Wing"))
                .and(contains("Falcon 1")),
        );
}

#[test]
fn test_cli_admin_pin_from_stdin() {
    let (data, db) = setup_test_store("admin_stdin_pin");
    init_store_with_data(&data, &db);

    ctc_with(&data, &db, &["admin"])
        .write_stdin("2025\n")
        .assert()
        .success()
        .stdout(contains("Check-Ins by Department"));
}

#[test]
fn test_cli_admin_missing_data_file() {
    let (data, db) = setup_test_store("admin_no_data");

    ctc_with(&data, &db, &["admin", "--pin", "2025"])
        .assert()
        .success()
        .stdout(contains("No data file found."));
}

#[test]
fn test_cli_admin_watch_is_bounded() {
    let (data, db) = setup_test_store("admin_watch");
    init_store(&data, &db);

    ctc_with(&data, &db, &["admin", "--pin", "2025", "--watch", "--refreshes", "1"])
        .assert()
        .success()
        .stdout(contains("Full Check-In/Out Log"));
}
