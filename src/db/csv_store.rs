//! CSV backing file: `Name,Department,Location,Status,Time,Notes,Flight Name`.

use crate::db::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::{COLUMNS, CheckEvent, Table};
use csv::WriterBuilder;
use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Write a header-only file if nothing exists yet. Returns true when created.
    pub fn create_if_missing(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.ensure_parent()?;

        let mut wtr = csv::Writer::from_path(&self.path)?;
        wtr.write_record(COLUMNS)?;
        wtr.flush()?;
        Ok(true)
    }
}

impl EventStore for CsvStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> AppResult<Table> {
        if !self.path.exists() {
            return Ok(Table::new());
        }

        let mut rdr = csv::Reader::from_path(&self.path)?;
        let mut rows = Vec::new();
        for record in rdr.deserialize::<CheckEvent>() {
            rows.push(record?);
        }
        Ok(Table::from_rows(rows))
    }

    /// Appends one row with a single write on an `O_APPEND` handle, so
    /// concurrent submitters never clobber each other's rows.
    fn record(&mut self, event: &CheckEvent) -> AppResult<()> {
        self.ensure_parent()?;

        let mut file = OpenOptions::new()
            .read(true)
            .create(true)
            .append(true)
            .open(&self.path)?;
        let len = file.metadata()?.len();

        // A hand-edited file may lack the final newline.
        let mut buf = Vec::new();
        if len > 0 && !ends_with_newline(&mut file, len)? {
            buf.push(b'\n');
        }

        let mut wtr = WriterBuilder::new()
            .has_headers(len == 0)
            .from_writer(buf);
        wtr.serialize(event)?;
        let buf = wtr
            .into_inner()
            .map_err(|e| AppError::Io(e.into_error()))?;

        file.write_all(&buf)?;
        file.flush()?;
        Ok(())
    }

    fn persist(&mut self, table: &Table) -> AppResult<()> {
        self.ensure_parent()?;

        let mut wtr = csv::Writer::from_path(&self.path)?;
        if table.is_empty() {
            wtr.write_record(COLUMNS)?;
        }
        for ev in table {
            wtr.serialize(ev)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn ends_with_newline(file: &mut fs::File, len: u64) -> AppResult<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
