//! Formatting utilities used for CLI outputs.

use crate::models::CheckEvent;
use crate::utils::colors::{RESET, color_for_status, colorize_optional};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// One-line, coloured rendering of an event for `list`.
pub fn describe_event(ev: &CheckEvent) -> String {
    let color = color_for_status(ev.status);
    let flight = if ev.flight_name.is_empty() {
        String::new()
    } else {
        format!(" [{}]", ev.flight_name)
    };

    format!(
        "{} | {}{:<9}{} | {} ({}){} @ {} | {}",
        ev.time_str(),
        color,
        ev.status.label(),
        RESET,
        bold(&ev.name),
        ev.department,
        flight,
        ev.location,
        colorize_optional(&ev.notes)
    )
}
