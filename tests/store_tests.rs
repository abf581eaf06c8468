mod common;
use common::{event, setup_test_store, temp_path, ts};
use ctc_checkin::db::{CsvStore, EventStore, SqliteStore, append};
use ctc_checkin::models::{COLUMNS, Location, Status, Table};
use std::fs;

#[test]
fn test_load_missing_file_is_empty_table() {
    let path = temp_path("store_missing_file", "csv");

    let store = CsvStore::new(&path);
    assert!(!store.exists());

    let table = store.load().expect("missing file is not an error");
    assert!(table.is_empty());
    assert_eq!(table.columns(), &COLUMNS);
    assert_eq!(table.columns().len(), 7);
}

#[test]
fn test_create_if_missing_writes_header_only() {
    let path = temp_path("store_header_only", "csv");
    let store = CsvStore::new(&path);

    assert!(store.create_if_missing().unwrap());
    assert!(!store.create_if_missing().unwrap());

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content.trim_end(),
        "Name,Department,Location,Status,Time,Notes,Flight Name"
    );
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_record_appends_rows_with_single_header() {
    let path = temp_path("store_record_appends", "csv");
    let mut store = CsvStore::new(&path);

    let first = event("Alice", "Logistics", Location::LegoLand, Status::CheckIn, ts(3, 8, 0))
        .with_notes("ETA 1600");
    let second = event("Carol", "Survival", Location::SurvivalFta, Status::CheckOut, ts(3, 9, 5))
        .with_flight_name("Falcon 1");

    store.record(&first).unwrap();
    store.record(&second).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Name,Department,Location,Status,Time,Notes,Flight Name");
    assert_eq!(
        lines[1],
        "Alice,Logistics,LegoLand,Check In,2025-10-03 08:00:00,ETA 1600,"
    );
    assert_eq!(
        lines[2],
        "Carol,Survival,Survival FTA,Check Out,2025-10-03 09:05:00,,Falcon 1"
    );

    let table = store.load().unwrap();
    assert_eq!(table.rows(), &[first, second]);
}

#[test]
fn test_record_after_header_only_file_does_not_repeat_header() {
    let path = temp_path("store_record_after_init", "csv");
    let mut store = CsvStore::new(&path);
    store.create_if_missing().unwrap();

    store
        .record(&event("Dave", "Medical", Location::Other, Status::CheckIn, ts(4, 7, 30)))
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.matches("Flight Name").count(), 1);
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn test_fields_with_commas_and_quotes_survive() {
    let path = temp_path("store_quoting", "csv");
    let mut store = CsvStore::new(&path);

    let tricky = event("O'Neil, Pat", "Ops", Location::CityOfColdLake, Status::CheckIn, ts(5, 12, 0))
        .with_notes("said \"back at 1600\", maybe later");
    store.record(&tricky).unwrap();

    assert_eq!(store.load().unwrap().rows(), &[tricky]);
}

#[test]
fn test_persist_overwrites_with_full_table() {
    let path = temp_path("store_persist", "csv");
    let mut store = CsvStore::new(&path);

    store
        .record(&event("Old", "Ops", Location::Other, Status::CheckIn, ts(6, 8, 0)))
        .unwrap();

    let table = append(
        Table::new(),
        event("New", "Ops", Location::LegoLand, Status::CheckOut, ts(6, 9, 0)),
    );
    store.persist(&table).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, table);
}

#[test]
fn test_persist_empty_table_keeps_header() {
    let path = temp_path("store_persist_empty", "csv");
    let mut store = CsvStore::new(&path);

    store.persist(&Table::new()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Name,Department,Location,Status,Time,Notes,Flight Name"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_reads_file_written_by_legacy_form() {
    let path = temp_path("store_legacy_file", "csv");
    fs::write(
        &path,
        "Name,Department,Location,Status,Time,Notes,Flight Name\n\
         Jo,Aviation,Survival FTA,Check In,2025-09-30 07:45:12,,Hawk 2\n\
         Sam,HQ,Main Training Site,Check Out,2025-09-30 16:02:00,ETA 1600,\n",
    )
    .unwrap();

    let table = CsvStore::new(&path).load().unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0].flight_name, "Hawk 2");
    assert_eq!(table.rows()[1].notes, "ETA 1600");
    assert_eq!(table.rows()[1].status, Status::CheckOut);
}

#[test]
fn test_corrupt_row_is_a_parse_error() {
    let path = temp_path("store_corrupt_row", "csv");
    fs::write(
        &path,
        "Name,Department,Location,Status,Time,Notes,Flight Name\n\
         Jo,Ops,Moon Base,Check In,2025-09-30 07:45:12,,\n",
    )
    .unwrap();

    assert!(CsvStore::new(&path).load().is_err());
}

#[test]
fn test_sqlite_store_records_and_persists() {
    let (_, db) = setup_test_store("sqlite_store");
    let mut store = SqliteStore::open(&db).unwrap();

    assert!(store.load().unwrap().is_empty());

    let a = event("Alice", "Logistics", Location::LegoLand, Status::CheckIn, ts(7, 8, 0));
    let b = event("Bob", "Survival", Location::SurvivalFta, Status::CheckIn, ts(7, 9, 0))
        .with_flight_name("Falcon 2");
    store.record(&a).unwrap();
    store.record(&b).unwrap();
    assert_eq!(store.load().unwrap().rows(), &[a.clone(), b]);

    let replaced = append(Table::new(), a);
    store.persist(&replaced).unwrap();
    assert_eq!(store.load().unwrap(), replaced);
}

#[test]
fn test_record_after_file_without_trailing_newline() {
    let path = temp_path("store_no_trailing_newline", "csv");
    fs::write(
        &path,
        "Name,Department,Location,Status,Time,Notes,Flight Name\n\
         Jo,HQ,Other,Check In,2025-09-30 07:45:12,,",
    )
    .unwrap();

    let mut store = CsvStore::new(&path);
    assert_eq!(store.load().unwrap().len(), 1);

    store
        .record(&event("Ann", "Ops", Location::LegoLand, Status::CheckIn, ts(3, 8, 0)))
        .unwrap();

    let table = store.load().unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0].name, "Jo");
    assert_eq!(table.rows()[1].name, "Ann");
}

#[test]
fn test_concurrent_records_are_all_kept() {
    const WRITERS: usize = 8;
    const ROWS_EACH: usize = 25;

    let path = temp_path("store_concurrent_writers", "csv");
    assert!(CsvStore::new(&path).create_if_missing().unwrap());

    let handles: Vec<_> = (0..WRITERS)
        .map(|w| {
            let path = path.clone();
            std::thread::spawn(move || {
                let mut store = CsvStore::new(&path);
                for i in 0..ROWS_EACH {
                    let ev = event(
                        &format!("writer{w}-{i}"),
                        "Ops",
                        Location::Other,
                        Status::CheckIn,
                        ts(5, 9, (i % 60) as u32),
                    );
                    store.record(&ev).unwrap();
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    let table = CsvStore::new(&path).load().unwrap();
    assert_eq!(table.len(), WRITERS * ROWS_EACH);

    let content = fs::read_to_string(&path).unwrap();
    let headers = content.lines().filter(|l| l.starts_with("Name,")).count();
    assert_eq!(headers, 1);
}
