// Post text builders, one per feature.

pub mod daily;
pub mod deadline;
pub mod price;
pub mod results;

pub const HASHTAGS: &str = "#FPL #FPLCommunity";

pub use daily::format_daily_stats;
pub use deadline::{format_deadline_reminder, reminder_window};
pub use price::format_price_changes;
pub use results::format_gameweek_results;
