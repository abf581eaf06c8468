use crate::errors::AppError;
use crate::models::{CheckEvent, Location, Status, Table};
use crate::utils::time::{format_timestamp, parse_timestamp};
use rusqlite::{Connection, Result, Row, params};

pub fn insert_event(conn: &Connection, ev: &CheckEvent) -> Result<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO check_events (name, department, location, status, time, notes, flight_name)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;

    stmt.execute(params![
        ev.name,
        ev.department,
        ev.location.label(),
        ev.status.label(),
        format_timestamp(&ev.time),
        ev.notes,
        ev.flight_name,
    ])?;
    Ok(())
}

/// All events in insertion order.
pub fn load_events(conn: &Connection) -> Result<Vec<CheckEvent>> {
    let mut stmt = conn.prepare(
        "SELECT name, department, location, status, time, notes, flight_name
         FROM check_events
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Replace every stored event with `table`, in one transaction.
pub fn replace_all(conn: &mut Connection, table: &Table) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM check_events", [])?;
    for ev in table {
        insert_event(&tx, ev)?;
    }
    tx.commit()
}

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<CheckEvent> {
    let loc_str: String = row.get("location")?;
    let location = Location::from_label(&loc_str)
        .ok_or_else(|| conversion_error(2, AppError::InvalidLocation(loc_str.clone())))?;

    let status_str: String = row.get("status")?;
    let status = Status::from_label(&status_str)
        .ok_or_else(|| conversion_error(3, AppError::InvalidStatus(status_str.clone())))?;

    let time_str: String = row.get("time")?;
    let time = parse_timestamp(&time_str).map_err(|e| conversion_error(4, e))?;

    Ok(CheckEvent {
        name: row.get("name")?,
        department: row.get("department")?,
        location,
        status,
        time,
        notes: row.get("notes")?,
        flight_name: row.get("flight_name")?,
    })
}
