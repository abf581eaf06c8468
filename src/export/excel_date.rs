use chrono::{NaiveDate, NaiveDateTime};

pub(crate) const EXCEL_TIMESTAMP_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Excel serial date: days since 1899-12-30, fraction for the time of day.
pub(crate) fn to_excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let secs = (*dt - epoch).num_seconds() as f64;
    Some(secs / 86_400.0)
}
