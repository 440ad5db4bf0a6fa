//! Parsing helpers for CLI input.

use chrono::NaiveTime;

/// Parse a wall-clock time in `HH:MM` form.
pub fn parse_time(value: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| anyhow::anyhow!("Invalid time (expected HH:MM): {}", value))
}
