//! Menu bar clock label.

use chrono::{Local, Timelike};

/// Formats a 24-hour `HH:MM` label.
pub fn clock_label(hour: u32, minute: u32) -> String {
    format!("{hour:02}:{minute:02}")
}

/// Label for the current local time.
pub fn current_clock_label() -> String {
    let now = Local::now();
    clock_label(now.hour(), now.minute())
}
