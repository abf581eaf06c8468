use crate::core::aggregate::Dashboard;
use crate::errors::{AppError, AppResult};
use crate::export::model::{headers, rows};
use crate::export::{ExportView, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
///
/// The log view keeps the backing-file field names; count views are
/// `[{"label": .., "total": ..}]`.
pub(crate) fn export_json(dashboard: &Dashboard, view: ExportView, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = match view {
        ExportView::Log => serde_json::to_string_pretty(&dashboard.log),
        ExportView::Location => serde_json::to_string_pretty(&dashboard.by_location),
        ExportView::Department => serde_json::to_string_pretty(&dashboard.by_department),
    }
    .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with the view's header row.
pub(crate) fn export_csv(dashboard: &Dashboard, view: ExportView, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(headers(view))?;
    for row in rows(view, dashboard) {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
