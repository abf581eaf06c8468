use crate::core::aggregate::{Dashboard, GroupCount};
use crate::export::ExportView;
use crate::models::COLUMNS;

/// Header row of one view.
pub(crate) fn headers(view: ExportView) -> Vec<&'static str> {
    match view {
        ExportView::Log => COLUMNS.to_vec(),
        ExportView::Location => vec!["Location", "Total Checked In"],
        ExportView::Department => vec!["Department", "Total Checked In"],
    }
}

fn count_rows(counts: &[GroupCount]) -> Vec<Vec<String>> {
    counts
        .iter()
        .map(|c| vec![c.label.clone(), c.total.to_string()])
        .collect()
}

/// One view as a table of strings, in display order.
pub(crate) fn rows(view: ExportView, dashboard: &Dashboard) -> Vec<Vec<String>> {
    match view {
        ExportView::Log => dashboard.log.iter().map(|ev| ev.to_row()).collect(),
        ExportView::Location => count_rows(&dashboard.by_location),
        ExportView::Department => count_rows(&dashboard.by_department),
    }
}

/// Worksheet title of one view.
pub(crate) fn sheet_name(view: ExportView) -> &'static str {
    match view {
        ExportView::Log => "Log",
        ExportView::Location => "By Location",
        ExportView::Department => "By Department",
    }
}
