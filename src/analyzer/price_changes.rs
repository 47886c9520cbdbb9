use crate::model::{ChangeRecord, DiffResult, PriceRecord, Snapshot};

/// Trait defining the interface for the snapshot comparison.
pub trait Analyzer {
    fn find_price_changes(&self, old: &Snapshot, new: &Snapshot) -> DiffResult;
}

/// Compares consecutive price snapshots.
pub struct AnalyzerImpl;

impl AnalyzerImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for AnalyzerImpl {
    /// Classifies every player present in both snapshots whose price moved.
    ///
    /// Results follow the iteration order of `new`. Players only in `old`
    /// (removed) or only in `new` (added) never produce a change.
    fn find_price_changes(&self, old: &Snapshot, new: &Snapshot) -> DiffResult {
        let mut result = DiffResult::default();

        for (player_id, current) in new {
            let Some(previous) = old.get(player_id) else {
                continue;
            };

            if current.price > previous.price {
                result
                    .risers
                    .push(change(previous, current, current.price - previous.price));
            } else if current.price < previous.price {
                result
                    .fallers
                    .push(change(previous, current, previous.price - current.price));
            }
        }

        result
    }
}

fn to_millions(tenths: u32) -> f64 {
    f64::from(tenths) / 10.0
}

fn change(previous: &PriceRecord, current: &PriceRecord, delta: u32) -> ChangeRecord {
    ChangeRecord {
        name: current.name.clone(),
        team: current.team.clone(),
        old_price: to_millions(previous.price),
        new_price: to_millions(current.price),
        change: to_millions(delta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(entries: &[(&str, &str, &str, u32)]) -> Snapshot {
        entries
            .iter()
            .map(|(id, name, team, price)| {
                (
                    id.to_string(),
                    PriceRecord {
                        name: name.to_string(),
                        team: team.to_string(),
                        price: *price,
                    },
                )
            })
            .collect()
    }

    fn diff(old: &Snapshot, new: &Snapshot) -> DiffResult {
        AnalyzerImpl::new().find_price_changes(old, new)
    }

    #[test]
    fn identical_snapshots_have_no_changes() {
        let s = snapshot(&[("1", "Salah", "LIV", 55), ("2", "Saka", "ARS", 70)]);
        assert!(diff(&s, &s).is_empty());
    }

    #[test]
    fn empty_previous_snapshot_has_no_changes() {
        let s = snapshot(&[("1", "Salah", "LIV", 55)]);
        assert!(diff(&Snapshot::new(), &s).is_empty());
    }

    #[test]
    fn price_rise_is_a_riser() {
        let old = snapshot(&[("1", "Old Name", "OLD", 55)]);
        let new = snapshot(&[("1", "Salah", "LIV", 60)]);

        let result = diff(&old, &new);
        assert!(result.fallers.is_empty());
        assert_eq!(
            result.risers,
            vec![ChangeRecord {
                name: "Salah".into(),
                team: "LIV".into(),
                old_price: 5.5,
                new_price: 6.0,
                change: 0.5,
            }]
        );
    }

    #[test]
    fn price_drop_is_a_faller() {
        let old = snapshot(&[("1", "Salah", "LIV", 55)]);
        let new = snapshot(&[("1", "Salah", "LIV", 50)]);

        let result = diff(&old, &new);
        assert!(result.risers.is_empty());
        assert_eq!(result.fallers.len(), 1);
        let faller = &result.fallers[0];
        assert_eq!(faller.old_price, 5.5);
        assert_eq!(faller.new_price, 5.0);
        assert_eq!(faller.change, 0.5);
    }

    #[test]
    fn added_and_removed_players_are_ignored() {
        let old = snapshot(&[("1", "A", "ARS", 50), ("2", "B", "AVL", 60)]);
        let new = snapshot(&[("1", "A", "ARS", 50), ("3", "C", "BOU", 45)]);
        assert!(diff(&old, &new).is_empty());
    }

    #[test]
    fn order_follows_new_snapshot_not_magnitude() {
        let old = snapshot(&[
            ("1", "A", "ARS", 50),
            ("2", "B", "AVL", 60),
            ("3", "C", "BOU", 70),
            ("4", "D", "BRE", 80),
        ]);
        let new = snapshot(&[
            ("4", "D", "BRE", 79),
            ("2", "B", "AVL", 63),
            ("1", "A", "ARS", 51),
            ("3", "C", "BOU", 68),
        ]);

        let result = diff(&old, &new);
        let risers: Vec<&str> = result.risers.iter().map(|c| c.name.as_str()).collect();
        let fallers: Vec<&str> = result.fallers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(risers, ["B", "A"]);
        assert_eq!(fallers, ["D", "C"]);
    }

    #[test]
    fn risers_and_fallers_are_disjoint_and_positive() {
        let old = snapshot(&[("1", "A", "ARS", 50), ("2", "B", "AVL", 60), ("3", "C", "BOU", 45)]);
        let new = snapshot(&[("1", "A", "ARS", 52), ("2", "B", "AVL", 59), ("3", "C", "BOU", 45)]);

        let result = diff(&old, &new);
        for riser in &result.risers {
            assert!(riser.change > 0.0);
            assert!(!result.fallers.iter().any(|f| f.name == riser.name));
        }
        assert!(result.fallers.iter().all(|f| f.change > 0.0));
        assert_eq!(result.risers.len() + result.fallers.len(), 2);
    }
}
