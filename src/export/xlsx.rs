use crate::core::aggregate::Dashboard;
use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{EXCEL_TIMESTAMP_FORMAT, to_excel_serial};
use crate::export::model::{headers, rows, sheet_name};
use crate::export::{ExportView, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Index of the Time column in the log view.
const TIME_COL: usize = 4;

/// Export XLSX: one styled worksheet per admin view.
pub(crate) fn export_xlsx(dashboard: &Dashboard, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    for view in [ExportView::Location, ExportView::Department, ExportView::Log] {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_name(view)).map_err(to_app_error)?;
        write_sheet(worksheet, dashboard, view)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_sheet(
    worksheet: &mut Worksheet,
    dashboard: &Dashboard,
    view: ExportView,
) -> AppResult<()> {
    let headers = headers(view);
    let data = rows(view, dashboard);

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }
    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    if data.is_empty() {
        worksheet
            .write(1, 0, "No data available")
            .map_err(to_app_error)?;
    }

    let mut col_widths: Vec<usize> = headers
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, values) in data.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };
        let base = Format::new()
            .set_background_color(band)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        for (col, value) in values.iter().enumerate() {
            let c = col as u16;

            if view == ExportView::Log && col == TIME_COL {
                // Real Excel datetimes so the column sorts and filters.
                let serial = dashboard
                    .log
                    .get(row_index)
                    .and_then(|ev| to_excel_serial(&ev.time));
                if let Some(serial) = serial {
                    let fmt = base.clone().set_num_format(EXCEL_TIMESTAMP_FORMAT);
                    worksheet
                        .write_with_format(row, c, serial, &fmt)
                        .map_err(to_app_error)?;
                    col_widths[col] = col_widths[col].max(EXCEL_TIMESTAMP_FORMAT.len());
                    continue;
                }
            }

            if view != ExportView::Log
                && col == 1
                && let Ok(n) = value.parse::<f64>()
            {
                let fmt = base.clone().set_align(FormatAlign::Right);
                worksheet
                    .write_with_format(row, c, n, &fmt)
                    .map_err(to_app_error)?;
                col_widths[col] = col_widths[col].max(value.len());
                continue;
            }

            worksheet
                .write_with_format(row, c, value.as_str(), &base)
                .map_err(to_app_error)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
