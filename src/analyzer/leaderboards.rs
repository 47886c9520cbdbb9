// Player rankings used by the daily stats and gameweek results posts
use crate::normalizer::team_short_name;
use crate::parser::{BootstrapData, Element};
use std::cmp::Reverse;

/// Ownership (%) a player needs before counting as "most selected".
const MIN_SELECTED_PERCENT: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub name: String,
    pub team: String,
    pub value: T,
}

fn ranked<T>(data: &BootstrapData, player: &Element, value: T) -> Ranked<T> {
    Ranked {
        name: player.web_name.clone(),
        team: team_short_name(&data.teams, player.team).to_string(),
        value,
    }
}

/// Sorts players by `key` descending, keeping payload order for ties.
fn top_by<K: Ord>(data: &BootstrapData, key: impl Fn(&Element) -> K) -> Vec<&Element> {
    let mut players: Vec<&Element> = data.elements.iter().collect();
    players.sort_by_key(|p| Reverse(key(*p)));
    players
}

pub fn top_transfers_in(data: &BootstrapData, limit: usize) -> Vec<Ranked<u64>> {
    top_by(data, |p| p.transfers_in_event)
        .into_iter()
        .take(limit)
        .map(|p| ranked(data, p, p.transfers_in_event))
        .collect()
}

pub fn top_transfers_out(data: &BootstrapData, limit: usize) -> Vec<Ranked<u64>> {
    top_by(data, |p| p.transfers_out_event)
        .into_iter()
        .take(limit)
        .map(|p| ranked(data, p, p.transfers_out_event))
        .collect()
}

/// Most owned players above the ownership floor; the value is the API's percent string.
pub fn most_selected(data: &BootstrapData, limit: usize) -> Vec<Ranked<String>> {
    let mut popular: Vec<(&Element, f64)> = data
        .elements
        .iter()
        .filter_map(|p| p.selected_by().map(|pct| (p, pct)))
        .filter(|(_, pct)| *pct > MIN_SELECTED_PERCENT)
        .collect();
    popular.sort_by(|a, b| b.1.total_cmp(&a.1));

    popular
        .into_iter()
        .take(limit)
        .map(|(p, _)| ranked(data, p, p.selected_by_percent.clone()))
        .collect()
}

/// Highest scorers of the latest gameweek; players on zero or less are dropped.
pub fn top_gameweek_scorers(data: &BootstrapData, limit: usize) -> Vec<Ranked<i32>> {
    top_by(data, |p| p.event_points)
        .into_iter()
        .take(limit)
        .filter(|p| p.event_points > 0)
        .map(|p| ranked(data, p, p.event_points))
        .collect()
}
