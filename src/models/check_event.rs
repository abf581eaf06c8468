use super::{location::Location, status::Status};
use crate::utils::time::{format_timestamp, timestamp_format};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One staff check-in or check-out, exactly as stored in the backing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckEvent {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Location")]
    pub location: Location,
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Time", with = "timestamp_format")]
    pub time: NaiveDateTime,
    #[serde(rename = "Notes", default)]
    pub notes: String,
    #[serde(rename = "Flight Name", default)]
    pub flight_name: String,
}

impl CheckEvent {
    pub fn new(
        name: &str,
        department: &str,
        location: Location,
        status: Status,
        time: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.to_string(),
            department: department.to_string(),
            location,
            status,
            time,
            notes: String::new(),
            flight_name: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }

    pub fn with_flight_name(mut self, flight_name: &str) -> Self {
        self.flight_name = flight_name.to_string();
        self
    }

    pub fn time_str(&self) -> String {
        format_timestamp(&self.time)
    }

    pub fn is_checked_in(&self) -> bool {
        self.status.is_in()
    }

    /// Fields in column order, as plain strings (tables, sheets).
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.department.clone(),
            self.location.label().to_string(),
            self.status.label().to_string(),
            self.time_str(),
            self.notes.clone(),
            self.flight_name.clone(),
        ]
    }
}
