/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Green for a check-in, red for a check-out.
pub fn color_for_status(status: crate::models::Status) -> &'static str {
    if status.is_in() { GREEN } else { RED }
}

/// Empty optional fields (notes, flight name) are shown as a grey dash.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}-{RESET}")
    } else {
        value.to_string()
    }
}
