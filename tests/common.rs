#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use ctc_checkin::models::{CheckEvent, Location, Status};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ctc() -> Command {
    cargo_bin_cmd!("ctc-checkin")
}

/// Unique CSV + SQLite paths inside the system temp dir; stale files removed.
pub fn setup_test_store(name: &str) -> (String, String) {
    let data = temp_path(&format!("{name}_checkin_log"), "csv");
    let db = temp_path(&format!("{name}_ctc-checkin"), "sqlite");
    (data, db)
}

/// Temp file path, removed if it already exists
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `ctc-checkin --data <data> --db <db> <args...>`
pub fn ctc_with(data: &str, db: &str, args: &[&str]) -> Command {
    let mut cmd = ctc();
    cmd.args(["--data", data, "--db", db]).args(args);
    cmd
}

/// Initialize the store in test mode (no config file written)
pub fn init_store(data: &str, db: &str) {
    ctc_with(data, db, &["--test", "init"]).assert().success();
}

/// Init and submit a small, known set of events
pub fn init_store_with_data(data: &str, db: &str) {
    init_store(data, db);

    for args in [
        vec!["submit", "Alice", "Logistics", "--location", "lego", "--status", "in"],
        vec!["submit", "Bob", "Logistics", "--location", "lego", "--status", "out"],
        vec![
            "submit",
            "Carol",
            "Aviation Wing",
            "--location",
            "fta",
            "--flight",
            "Falcon 1",
        ],
        vec!["submit", "Dave", "Medical", "--location", "city", "--notes", "ETA 1600"],
    ] {
        ctc_with(data, db, &args).assert().success();
    }
}

pub fn ts(day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

pub fn event(name: &str, dept: &str, location: Location, status: Status, time: NaiveDateTime) -> CheckEvent {
    CheckEvent::new(name, dept, location, status, time)
}
