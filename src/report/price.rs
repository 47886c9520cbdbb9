use crate::model::{ChangeRecord, DiffResult};
use crate::report::HASHTAGS;

/// Hard cap per section so the post stays within the platform's length limit.
pub const MAX_ENTRIES_PER_SECTION: usize = 5;

fn push_section(lines: &mut Vec<String>, title: &str, sign: char, changes: &[ChangeRecord]) {
    lines.push(title.to_string());
    for c in changes.iter().take(MAX_ENTRIES_PER_SECTION) {
        lines.push(format!(
            "  {} ({}) £{:.1}m ({}£{:.1}m)",
            c.name, c.team, c.new_price, sign, c.change
        ));
    }
}

/// Renders the price change post, or `None` when nothing moved.
pub fn format_price_changes(diff: &DiffResult) -> Option<String> {
    if diff.is_empty() {
        return None;
    }

    let mut lines = vec!["📊 FPL Price Changes\n".to_string()];

    if !diff.risers.is_empty() {
        push_section(&mut lines, "📈 RISERS:", '+', &diff.risers);
    }

    if !diff.fallers.is_empty() {
        if !diff.risers.is_empty() {
            lines.push(String::new());
        }
        push_section(&mut lines, "📉 FALLERS:", '-', &diff.fallers);
    }

    lines.push(format!("\n{}", HASHTAGS));
    Some(lines.join("\n"))
}
