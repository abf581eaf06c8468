//! Embedded SQLite store, selected with `backend: sqlite`.

use crate::db::EventStore;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_event, load_events, replace_all};
use crate::errors::AppResult;
use crate::models::{CheckEvent, Table};
use std::path::{Path, PathBuf};

pub struct SqliteStore {
    path: PathBuf,
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            path: PathBuf::from(path),
            pool: DbPool::new(path)?,
        })
    }
}

impl EventStore for SqliteStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> AppResult<Table> {
        Ok(Table::from_rows(load_events(&self.pool.conn)?))
    }

    fn record(&mut self, event: &CheckEvent) -> AppResult<()> {
        insert_event(&self.pool.conn, event)?;
        Ok(())
    }

    fn persist(&mut self, table: &Table) -> AppResult<()> {
        self.pool.with_conn(|conn| Ok(replace_all(conn, table)?))
    }
}
