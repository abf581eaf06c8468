use super::check_event::CheckEvent;

/// Column set of the backing file, in order.
pub const COLUMNS: [&str; 7] = [
    "Name",
    "Department",
    "Location",
    "Status",
    "Time",
    "Notes",
    "Flight Name",
];

/// In-memory snapshot of every CheckEvent, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<CheckEvent>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<CheckEvent>) -> Self {
        Self { rows }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    /// Returns a new table with `event` as the last row.
    pub fn append(mut self, event: CheckEvent) -> Self {
        self.rows.push(event);
        self
    }

    pub fn rows(&self) -> &[CheckEvent] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<CheckEvent> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CheckEvent> {
        self.rows.iter()
    }

    pub fn last(&self) -> Option<&CheckEvent> {
        self.rows.last()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a CheckEvent;
    type IntoIter = std::slice::Iter<'a, CheckEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
