use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Status {
    #[serde(rename = "Check In")]
    CheckIn,
    #[serde(rename = "Check Out")]
    CheckOut,
}

impl Status {
    /// Accepts `in` / `out` as well as the stored labels.
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "in" | "check in" | "checkin" | "check-in" => Some(Self::CheckIn),
            "out" | "check out" | "checkout" | "check-out" => Some(Self::CheckOut),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::CheckIn => "Check In",
            Status::CheckOut => "Check Out",
        }
    }

    /// Convert stored label → enum
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Check In" => Some(Status::CheckIn),
            "Check Out" => Some(Status::CheckOut),
            _ => None,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, Status::CheckIn)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
