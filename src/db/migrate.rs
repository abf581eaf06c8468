use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `check_events` table; columns mirror the CSV backing file.
fn create_check_events_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS check_events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            department  TEXT NOT NULL,
            location    TEXT NOT NULL CHECK(location IN (
                            'Main Training Site','Survival FTA','LegoLand',
                            'City of Cold Lake','Other')),
            status      TEXT NOT NULL CHECK(status IN ('Check In','Check Out')),
            time        TEXT NOT NULL,
            notes       TEXT NOT NULL DEFAULT '',
            flight_name TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_check_events_status ON check_events(status);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked every time a DbPool is opened; each step is idempotent.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    let version = "20251001_0001_create_check_events";
    if table_exists(conn, "check_events")? {
        return Ok(());
    }

    create_check_events_table(conn)
        .map_err(|e| AppError::Migration(format!("{version}: {e}")))?;

    if !migration_applied(conn, version)? {
        mark_applied(conn, version, "Created check_events table")?;
        success(format!("Migration applied: {version}"));
    }

    Ok(())
}
