use crate::analyzer::gameweek::current_gameweek;
use crate::analyzer::leaderboards::{most_selected, top_transfers_in, top_transfers_out};
use crate::parser::BootstrapData;
use crate::report::HASHTAGS;
use crate::utils::format_count;

const ENTRIES_PER_SECTION: usize = 3;

pub fn format_daily_stats(data: &BootstrapData) -> String {
    let gw = current_gameweek(&data.events)
        .map(|e| e.id.to_string())
        .unwrap_or_else(|| "?".into());

    let mut lines = vec![format!("📊 FPL Daily Update - GW{}\n", gw)];

    lines.push("🔥 Top Transfers IN:".into());
    for p in top_transfers_in(data, ENTRIES_PER_SECTION) {
        lines.push(format!("  {} ({}) - {}", p.name, p.team, format_count(p.value)));
    }

    lines.push("\n❄️ Top Transfers OUT:".into());
    for p in top_transfers_out(data, ENTRIES_PER_SECTION) {
        lines.push(format!("  {} ({}) - {}", p.name, p.team, format_count(p.value)));
    }

    lines.push("\n👑 Most Selected:".into());
    for p in most_selected(data, ENTRIES_PER_SECTION) {
        lines.push(format!("  {} ({}) - {}%", p.name, p.team, p.value));
    }

    lines.push(format!("\n{}", HASHTAGS));
    lines.join("\n")
}
