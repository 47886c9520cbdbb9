// Analyzer module: snapshot comparison plus gameweek and player queries.

pub mod gameweek;
pub mod leaderboards;
pub mod price_changes;

// Re-export the main Analyzer implementation for ease of use.
pub use price_changes::{Analyzer, AnalyzerImpl};
