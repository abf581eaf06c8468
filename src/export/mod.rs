mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod xlsx;

pub use logic::ExportLogic;
pub(crate) use fs_utils::ensure_writable;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Which admin view to export. XLSX always carries all three.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportView {
    /// Full check-in/out log, most recent first
    Log,
    /// Checked-in totals per location
    Location,
    /// Checked-in totals per department
    Department,
}

impl ExportView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportView::Log => "log",
            ExportView::Location => "location",
            ExportView::Department => "department",
        }
    }
}
