use crate::config::Config;
use crate::core::aggregate::Dashboard;
use crate::db;
use crate::db::log::journal;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportView};
use crate::ui::messages::warning;
use crate::utils::period;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one admin view (or, for XLSX, all of them).
    ///
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"`, or `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and
    ///   `start:end` ranges of the same shape, matched on the event time
    pub fn export(
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        view: ExportView,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let store = db::open(cfg)?;
        let table = period::apply(store.load()?, range)?;

        if table.is_empty() {
            warning("No check events found for the selected range.");
        }

        let dashboard = Dashboard::build(&table);

        match format {
            ExportFormat::Csv => export_csv(&dashboard, view, path)?,
            ExportFormat::Json => export_json(&dashboard, view, path)?,
            ExportFormat::Xlsx => export_xlsx(&dashboard, path)?,
        }

        journal(
            cfg,
            "export",
            file,
            &format!(
                "Exported {} ({}) with {} rows",
                view.as_str(),
                format.as_str(),
                table.len()
            ),
        );

        Ok(())
    }
}
