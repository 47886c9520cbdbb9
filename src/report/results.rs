use crate::analyzer::gameweek::latest_finished;
use crate::analyzer::leaderboards::top_gameweek_scorers;
use crate::parser::BootstrapData;
use crate::report::HASHTAGS;

const TOP_PERFORMERS: usize = 5;

fn score_or_na(score: Option<i32>) -> String {
    score.map(|s| s.to_string()).unwrap_or_else(|| "N/A".into())
}

/// Summary of the latest finished gameweek; `None` until one has finished with scorers.
pub fn format_gameweek_results(data: &BootstrapData) -> Option<String> {
    let finished = latest_finished(&data.events)?;
    let scorers = top_gameweek_scorers(data, TOP_PERFORMERS);
    if scorers.is_empty() {
        return None;
    }

    let mut lines = vec![format!("📈 Gameweek {} Results\n", finished.id)];
    lines.push(format!("📊 Average: {} pts", score_or_na(finished.average_entry_score)));
    lines.push(format!("🏆 Highest: {} pts\n", score_or_na(finished.highest_score)));

    lines.push("⭐ Top Performers:".into());
    for p in scorers {
        lines.push(format!("  {} ({}) - {} pts", p.name, p.team, p.value));
    }

    lines.push(format!("\n{} #GW{}", HASHTAGS, finished.id));
    Some(lines.join("\n"))
}
