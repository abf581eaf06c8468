//! `--period` filters: YYYY, YYYY-MM, YYYY-MM-DD, or `start:end` in one of those forms.

use crate::errors::{AppError, AppResult};
use crate::models::{CheckEvent, Table};
use chrono::{Datelike, NaiveDate};

/// Inclusive day range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// `None` for `all`, which disables filtering.
    pub fn parse(raw: &str) -> AppResult<Option<Self>> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("all") {
            return Ok(None);
        }

        let (start, end) = match raw.split_once(':') {
            Some((s, e)) => {
                let (s, e) = (s.trim(), e.trim());
                if s.len() != e.len() {
                    return Err(AppError::InvalidPeriod(format!(
                        "start and end must have the same format: {raw}"
                    )));
                }
                (bounds(s)?.0, bounds(e)?.1)
            }
            None => bounds(raw)?,
        };

        if start > end {
            return Err(AppError::InvalidPeriod(format!("start after end: {raw}")));
        }
        Ok(Some(Self { start, end }))
    }

    pub fn contains(&self, event: &CheckEvent) -> bool {
        let day = event.time.date();
        self.start <= day && day <= self.end
    }

    /// Rows of `table` falling inside the period, order preserved.
    pub fn filter(&self, table: &Table) -> Table {
        Table::from_rows(table.iter().filter(|ev| self.contains(ev)).cloned().collect())
    }
}

/// First and last day covered by a single year, month or day.
fn bounds(s: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(s.to_string());

    match s.len() {
        // YYYY
        4 => {
            let y: i32 = s.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let first =
                NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            let next = if first.month() == 12 {
                NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
            }
            .ok_or_else(invalid)?;
            let last = next.pred_opt().ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

/// Apply an optional `--period` to a table.
pub fn apply(table: Table, period: Option<&str>) -> AppResult<Table> {
    match period {
        None => Ok(table),
        Some(raw) => match Period::parse(raw)? {
            None => Ok(table),
            Some(p) => Ok(p.filter(&table)),
        },
    }
}
