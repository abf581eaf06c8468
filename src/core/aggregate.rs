//! Admin summaries over an in-memory table. Everything here is pure.

use crate::models::{CheckEvent, Table};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of "Check In" rows sharing one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub label: String,
    pub total: usize,
}

/// Count checked-in rows per key, ascending by key.
fn count_checked_in_by<F>(table: &Table, key: F) -> Vec<GroupCount>
where
    F: Fn(&CheckEvent) -> &str,
{
    let mut groups: BTreeMap<&str, usize> = BTreeMap::new();
    for ev in table.iter().filter(|ev| ev.is_checked_in()) {
        *groups.entry(key(ev)).or_insert(0) += 1;
    }

    groups
        .into_iter()
        .map(|(label, total)| GroupCount {
            label: label.to_string(),
            total,
        })
        .collect()
}

pub fn count_by_location(table: &Table) -> Vec<GroupCount> {
    count_checked_in_by(table, |ev| ev.location.label())
}

pub fn count_by_department(table: &Table) -> Vec<GroupCount> {
    count_checked_in_by(table, |ev| ev.department.as_str())
}

/// The whole table, last submitted first.
pub fn full_log_descending(table: &Table) -> Vec<CheckEvent> {
    table.iter().rev().cloned().collect()
}

/// The three admin views, computed from one snapshot.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub by_location: Vec<GroupCount>,
    pub by_department: Vec<GroupCount>,
    pub log: Vec<CheckEvent>,
}

impl Dashboard {
    pub fn build(table: &Table) -> Self {
        Self {
            by_location: count_by_location(table),
            by_department: count_by_department(table),
            log: full_log_descending(table),
        }
    }
}
