use crate::report::HASHTAGS;
use chrono::{DateTime, Utc};

/// Reminder label for the windows around 24h, 6h and 1h before the deadline.
pub fn reminder_window(hours_until: f64) -> Option<&'static str> {
    if 23.5 < hours_until && hours_until <= 24.5 {
        Some("24 hours")
    } else if 5.5 < hours_until && hours_until <= 6.5 {
        Some("6 hours")
    } else if 0.5 < hours_until && hours_until <= 1.5 {
        Some("1 hour")
    } else {
        None
    }
}

pub fn format_deadline_reminder(
    gameweek: u32,
    deadline: DateTime<Utc>,
    reminder: &str,
    time_until: &str,
) -> String {
    format!(
        "⏰ DEADLINE REMINDER\n\n\
         Gameweek {gw} deadline in {reminder}!\n\n\
         📅 {when}\n\
         ⏳ {time_until} remaining\n\n\
         Make your transfers and set your captain!\n\n\
         {tags} #GW{gw}",
        gw = gameweek,
        reminder = reminder,
        when = deadline.format("%A %d %B at %H:%M GMT"),
        time_until = time_until,
        tags = HASHTAGS,
    )
}
