pub mod csv_store;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod sqlite_store;

use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::models::{CheckEvent, Table};
use std::path::Path;

pub use csv_store::CsvStore;
pub use sqlite_store::SqliteStore;

/// Persistence of check events.
pub trait EventStore {
    /// File backing this store.
    fn path(&self) -> &Path;

    fn exists(&self) -> bool;

    /// Every stored event, oldest first. A missing store is an empty table.
    fn load(&self) -> AppResult<Table>;

    /// Append one accepted event.
    fn record(&mut self, event: &CheckEvent) -> AppResult<()>;

    /// Overwrite the store with `table`.
    fn persist(&mut self, table: &Table) -> AppResult<()>;
}

/// Returns `table` with `event` as its last row.
pub fn append(table: Table, event: CheckEvent) -> Table {
    table.append(event)
}

/// Open the store selected by the configuration.
pub fn open(cfg: &Config) -> AppResult<Box<dyn EventStore>> {
    match cfg.backend {
        Backend::Csv => Ok(Box::new(CsvStore::new(&cfg.data_file))),
        Backend::Sqlite => Ok(Box::new(SqliteStore::open(&cfg.database)?)),
    }
}
