// Formatting helpers shared by the report builders
use chrono::{DateTime, Duration, Utc};

/// Parses an RFC 3339 timestamp (FPL uses the `Z` suffix) into UTC.
pub fn parse_datetime(date_str: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(date_str.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Shortens large counts: `1.2M`, `350K`, `999`.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.0}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Time left until `deadline` as `2d 3h`, `5h 10m`, `42m`, or `PASSED`.
pub fn format_time_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = deadline - now;
    if remaining < Duration::zero() {
        return "PASSED".to_string();
    }

    let hours = remaining.num_hours();
    let minutes = remaining.num_minutes() % 60;

    if hours > 24 {
        format!("{}d {}h", hours / 24, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Hours until `deadline` as a fraction, negative once it has passed.
pub fn hours_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (deadline - now).num_seconds() as f64 / 3600.0
}
