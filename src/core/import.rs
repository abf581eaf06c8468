use crate::config::Config;
use crate::db::log::journal;
use crate::db::{self, CsvStore, EventStore};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::io;
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Append every row of an existing check-in CSV to the active store.
    ///
    /// The merged table is written back in one `persist`, so rows keep
    /// their order: existing first, imported after.
    pub fn import(cfg: &Config, source: &str) -> AppResult<usize> {
        let source_path = Path::new(source);
        if !source_path.exists() {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Import file not found: {source}"),
            )));
        }

        let mut store = db::open(cfg)?;
        if same_file(source_path, store.path()) {
            return Err(AppError::Other(
                "Import source is the active data file".to_string(),
            ));
        }

        let incoming = CsvStore::new(source_path).load()?;
        if incoming.is_empty() {
            warning(format!("No rows found in {source}."));
            return Ok(0);
        }

        let imported = incoming.len();
        let mut table = store.load()?;
        for event in incoming.into_rows() {
            table = db::append(table, event);
        }
        store.persist(&table)?;

        journal(
            cfg,
            "import",
            source,
            &format!("Imported {imported} rows ({} total)", table.len()),
        );
        success(format!(
            "Imported {imported} rows from {source} ({} total).",
            table.len()
        ));

        Ok(imported)
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
