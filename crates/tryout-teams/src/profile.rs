//! Category profiles: the preprocessing step of team formation.
//!
//! Each player is reduced to one score per drill category:
//!
//! 1. Every drill result is normalized against the range of the player's own
//!    age group (static ranges apply as configured).
//! 2. A missing result is imputed with the median of the normalized results
//!    the other players posted for that drill. A drill nobody has a result
//!    for is dropped.
//! 3. The drill scores sharing a category are averaged.
//!
//! This differs from composite ranking, where a missing result counts as zero.
//!
//! The *impact score* (Euclidean distance of the category vector from the
//! neutral 50) orders players for seeding.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tryout_scoring::{
    drill::Drill,
    normalize::{self, NEUTRAL_SCORE},
    player::Player,
    range,
};
use tryout_stats::descriptive;

/// A player together with their per-category scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfiledPlayer {
    #[serde(flatten)]
    pub player: Player,
    pub category_scores: BTreeMap<String, f64>,
}

/// Category scores for a whole pool, indexed by position.
#[derive(Debug, Clone)]
pub(crate) struct PoolProfiles {
    /// Categories with at least one usable drill, in drill order.
    pub categories: Vec<String>,
    /// `scores[player][category]`, aligned with the input players and `categories`.
    pub scores: Vec<Vec<f64>>,
    /// Mean category score over the pool, aligned with `categories`.
    pub global_means: Vec<f64>,
}

impl PoolProfiles {
    pub(crate) fn build(players: &[Player], drills: &[Drill]) -> Self {
        let ranges_by_group = range::resolve_by_age_group(players, drills);

        // normalized[drill][player], imputed
        let mut usable = vec![];
        for drill in drills {
            let normalized = players
                .iter()
                .map(|p| {
                    let raw = p.score(&drill.key)?;
                    let range = ranges_by_group.get(&p.age_group)?.get(&drill.key)?;
                    Some(normalize::normalize(raw, *range, drill.lower_is_better))
                })
                .collect::<Vec<_>>();
            let Some(median) = descriptive::median(normalized.iter().flatten().copied()) else {
                continue;
            };
            let imputed = normalized
                .into_iter()
                .map(|v| v.unwrap_or(median))
                .collect::<Vec<_>>();
            usable.push((drill, imputed));
        }

        let mut categories: Vec<String> = vec![];
        for (drill, _) in &usable {
            if !categories.contains(&drill.category) {
                categories.push(drill.category.clone());
            }
        }

        let scores = (0..players.len())
            .map(|i| {
                categories
                    .iter()
                    .map(|category| {
                        let drill_scores = usable
                            .iter()
                            .filter(|(d, _)| &d.category == category)
                            .map(|(_, values)| values[i]);
                        descriptive::mean(drill_scores).unwrap_or(NEUTRAL_SCORE)
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let global_means = (0..categories.len())
            .map(|c| descriptive::mean(scores.iter().map(|s| s[c])).unwrap_or(NEUTRAL_SCORE))
            .collect();

        Self {
            categories,
            scores,
            global_means,
        }
    }

    /// Distance of player `index` from a perfectly average player.
    pub(crate) fn impact_score(&self, index: usize) -> f64 {
        self.scores[index]
            .iter()
            .map(|v| (v - NEUTRAL_SCORE).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    pub(crate) fn category_map(&self, values: &[f64]) -> BTreeMap<String, f64> {
        self.categories
            .iter()
            .cloned()
            .zip(values.iter().copied())
            .collect()
    }

    pub(crate) fn profiled_player(&self, players: &[Player], index: usize) -> ProfiledPlayer {
        ProfiledPlayer {
            player: players[index].clone(),
            category_scores: self.category_map(&self.scores[index]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drills() -> Vec<Drill> {
        vec![
            Drill::new("sprint", "Sprint", "s", "speed")
                .lower_is_better()
                .with_range(4.0, 6.0),
            Drill::new("shuttle", "Shuttle", "s", "speed")
                .lower_is_better()
                .with_range(10.0, 14.0),
            Drill::new("shooting", "Shooting", "%", "skill").with_range(0.0, 100.0),
            Drill::new("nobody", "Nobody", "pts", "ghost"),
        ]
    }

    #[test]
    fn test_categories_average_drills() {
        let players = vec![
            Player::new("a", "U12")
                .with_score("sprint", 4.0)
                .with_score("shuttle", 14.0)
                .with_score("shooting", 70.0),
        ];
        let profiles = PoolProfiles::build(&players, &drills());
        assert_eq!(profiles.categories, vec!["speed", "skill"]);
        // sprint 100, shuttle 0 -> speed 50
        assert_eq!(profiles.scores[0], vec![50.0, 70.0]);
    }

    #[test]
    fn test_missing_values_are_imputed_with_median() {
        let players = vec![
            Player::new("a", "U12").with_score("shooting", 20.0),
            Player::new("b", "U12").with_score("shooting", 40.0),
            Player::new("c", "U12").with_score("shooting", 90.0),
            Player::new("d", "U12"),
        ];
        let drills = vec![Drill::new("shooting", "Shooting", "%", "skill").with_range(0.0, 100.0)];
        let profiles = PoolProfiles::build(&players, &drills);
        assert_eq!(profiles.scores[3], vec![40.0]);
        assert_eq!(profiles.global_means, vec![47.5]);
    }

    #[test]
    fn test_dynamic_ranges_use_own_age_group() {
        let drills = vec![Drill::new("jump", "Jump", "in", "power")];
        let players = vec![
            Player::new("y1", "U10").with_score("jump", 10.0),
            Player::new("y2", "U10").with_score("jump", 20.0),
            Player::new("o1", "U14").with_score("jump", 20.0),
            Player::new("o2", "U14").with_score("jump", 40.0),
        ];
        let profiles = PoolProfiles::build(&players, &drills);
        let scores = profiles.scores.iter().map(|s| s[0]).collect::<Vec<_>>();
        assert_eq!(scores, vec![0.0, 100.0, 0.0, 100.0]);
    }

    #[test]
    fn test_impact_score() {
        let players = vec![
            Player::new("a", "U12")
                .with_score("sprint", 4.0)
                .with_score("shuttle", 10.0)
                .with_score("shooting", 10.0),
        ];
        let profiles = PoolProfiles::build(&players, &drills());
        // speed 100, skill 10 -> sqrt(50² + 40²)
        assert!((profiles.impact_score(0) - 4100_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_profiled_player_output() {
        let players = vec![Player::new("a", "U12").with_score("shooting", 65.0)];
        let profiles = PoolProfiles::build(&players, &drills());
        let profiled = profiles.profiled_player(&players, 0);
        assert_eq!(profiled.category_scores.len(), 1);
        assert_eq!(profiled.category_scores["skill"], 65.0);

        let json = serde_json::to_value(&profiled).unwrap();
        assert_eq!(json["id"], "a");
        assert_eq!(json["category_scores"]["skill"], 65.0);
    }
}
