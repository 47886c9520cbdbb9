use crate::model::{PriceRecord, Snapshot};
use crate::parser::{BootstrapData, Team};

/// Label used when a player's team id is missing from the team table.
pub const UNKNOWN_TEAM: &str = "???";

pub fn team_short_name(teams: &[Team], team_id: u32) -> &str {
    teams
        .iter()
        .find(|t| t.id == team_id)
        .map(|t| t.short_name.as_str())
        .unwrap_or(UNKNOWN_TEAM)
}

/// Builds the price snapshot for every player in the payload, keyed by player id.
pub fn extract_snapshot(data: &BootstrapData) -> Snapshot {
    data.elements
        .iter()
        .map(|player| {
            (
                player.id.to_string(),
                PriceRecord {
                    name: player.web_name.clone(),
                    team: team_short_name(&data.teams, player.team).to_string(),
                    price: player.now_cost,
                },
            )
        })
        .collect()
}
