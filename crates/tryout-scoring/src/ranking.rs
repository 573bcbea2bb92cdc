//! Leaderboard assembly.
//!
//! Players are split into cohorts, scored with [`composite_score`], sorted by
//! descending score and numbered from 1. The sort is stable and uses no
//! secondary key: players with equal composite scores receive distinct,
//! consecutive ranks in their input order. Re-running with the same input
//! always produces the same output, ties included.
//!
//! Players without any qualifying result are still ranked (their composite is
//! 0); nobody is dropped from the output.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    composite::composite_score,
    drill::Drill,
    player::Player,
    range,
    validation::{self, ValidationError},
    weights::WeightMap,
};

/// How players are grouped for comparison.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingScope {
    /// Rank within each age group, with dynamic ranges resolved per age group.
    #[default]
    AgeGroup,
    /// Rank the whole input as a single cohort.
    Pool,
}

/// A player with their composite score and 1-based rank within their cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPlayer {
    #[serde(flatten)]
    pub player: Player,
    /// Composite score on the 0–100 scale, rounded to two decimals.
    pub composite_score: f64,
    pub rank: usize,
}

/// Ranks `players` by composite score.
///
/// The output lists cohorts in the order their first player appears in the
/// input; within a cohort players are in rank order.
///
/// ```
/// use tryout_scoring::{
///     drill::Drill, player::Player, ranking::{self, RankingScope}, weights::WeightMap,
/// };
///
/// let drills = [Drill::new("score", "Score", "pts", "skills").with_range(0.0, 100.0)];
/// let players = [
///     Player::new("low", "U12").with_score("score", 20.0),
///     Player::new("high", "U12").with_score("score", 80.0),
/// ];
/// let weights: WeightMap = [("score", 1.0)].into_iter().collect();
///
/// let ranked = ranking::rank(&players, &weights, &drills, RankingScope::AgeGroup).unwrap();
/// assert_eq!(ranked[0].player.id, "high");
/// assert_eq!(ranked[0].rank, 1);
/// assert_eq!(ranked[1].composite_score, 20.0);
/// ```
pub fn rank(
    players: &[Player],
    weights: &WeightMap,
    drills: &[Drill],
    scope: RankingScope,
) -> Result<Vec<RankedPlayer>, ValidationError> {
    validation::validate(players, drills, weights)?;

    let mut ranked = Vec::with_capacity(players.len());
    for (cohort_key, members) in partition(players, scope) {
        let ranges = range::resolve_ranges(players, cohort_key, drills);
        let mut scored = members
            .into_iter()
            .map(|p| (p, composite_score(p, weights, drills, &ranges)))
            .collect::<Vec<_>>();
        scored.sort_by(|(_, a), (_, b)| b.total_cmp(a));

        debug!(
            cohort = cohort_key.unwrap_or("*"),
            players = scored.len(),
            resolved_drills = ranges.len(),
            "ranked cohort"
        );

        ranked.extend(
            scored
                .into_iter()
                .enumerate()
                .map(|(i, (player, composite_score))| RankedPlayer {
                    player: player.clone(),
                    composite_score,
                    rank: i + 1,
                }),
        );
    }
    Ok(ranked)
}

fn partition(players: &[Player], scope: RankingScope) -> Vec<(Option<&str>, Vec<&Player>)> {
    match scope {
        RankingScope::Pool => vec![(None, players.iter().collect())],
        RankingScope::AgeGroup => {
            let mut index = HashMap::new();
            let mut cohorts: Vec<(Option<&str>, Vec<&Player>)> = vec![];
            for player in players {
                let i = *index.entry(player.age_group.as_str()).or_insert_with(|| {
                    cohorts.push((Some(player.age_group.as_str()), vec![]));
                    cohorts.len() - 1
                });
                cohorts[i].1.push(player);
            }
            cohorts
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_drill() -> Vec<Drill> {
        vec![Drill::new("score", "Score", "pts", "skills").with_range(0.0, 100.0)]
    }

    fn ids(ranked: &[RankedPlayer]) -> Vec<&str> {
        ranked.iter().map(|r| r.player.id.as_str()).collect()
    }

    #[test]
    fn test_four_player_scenario() {
        let players = [80.0, 60.0, 40.0, 20.0]
            .iter()
            .enumerate()
            .map(|(i, &s)| Player::new(format!("p{i}"), "U12").with_score("score", s))
            .collect::<Vec<_>>();
        let weights: WeightMap = [("score", 1.0)].into_iter().collect();
        let ranked = rank(&players, &weights, &single_drill(), RankingScope::AgeGroup).unwrap();

        let scores = ranked.iter().map(|r| r.composite_score).collect::<Vec<_>>();
        let ranks = ranked.iter().map(|r| r.rank).collect::<Vec<_>>();
        assert_eq!(scores, vec![80.0, 60.0, 40.0, 20.0]);
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let players = vec![
            Player::new("a", "U12").with_score("score", 50.0),
            Player::new("b", "U12").with_score("score", 70.0),
            Player::new("c", "U12").with_score("score", 50.0),
            Player::new("d", "U12").with_score("score", 50.0),
        ];
        let weights: WeightMap = [("score", 1.0)].into_iter().collect();
        let first = rank(&players, &weights, &single_drill(), RankingScope::Pool).unwrap();
        assert_eq!(ids(&first), vec!["b", "a", "c", "d"]);
        assert_eq!(
            first.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );

        let second = rank(&players, &weights, &single_drill(), RankingScope::Pool).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_players_without_scores_are_ranked_last() {
        let players = vec![
            Player::new("empty", "U12"),
            Player::new("some", "U12").with_score("score", 10.0),
        ];
        let weights: WeightMap = [("score", 1.0)].into_iter().collect();
        let ranked = rank(&players, &weights, &single_drill(), RankingScope::Pool).unwrap();
        assert_eq!(ids(&ranked), vec!["some", "empty"]);
        assert_eq!(ranked[1].composite_score, 0.0);
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn test_age_groups_ranked_separately_with_own_ranges() {
        let drills = vec![Drill::new("jump", "Jump", "in", "power")];
        let players = vec![
            Player::new("y1", "U10").with_score("jump", 10.0),
            Player::new("o1", "U14").with_score("jump", 20.0),
            Player::new("y2", "U10").with_score("jump", 14.0),
            Player::new("o2", "U14").with_score("jump", 30.0),
        ];
        let weights: WeightMap = [("jump", 1.0)].into_iter().collect();
        let ranked = rank(&players, &weights, &drills, RankingScope::AgeGroup).unwrap();

        assert_eq!(ids(&ranked), vec!["y2", "y1", "o2", "o1"]);
        // each group's best gets 100 against its own observed range
        assert_eq!(ranked[0].composite_score, 100.0);
        assert_eq!(ranked[2].composite_score, 100.0);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[2].rank, 1);

        let pooled = rank(&players, &weights, &drills, RankingScope::Pool).unwrap();
        assert_eq!(ids(&pooled), vec!["o2", "o1", "y2", "y1"]);
        assert_eq!(pooled[2].composite_score, 20.0);
    }

    #[test]
    fn test_zero_weight_does_not_change_relative_order() {
        let drills = vec![
            Drill::new("a", "A", "pts", "skills").with_range(0.0, 100.0),
            Drill::new("b", "B", "pts", "skills").with_range(0.0, 100.0),
            Drill::new("noise", "Noise", "pts", "skills").with_range(0.0, 100.0),
        ];
        let players = vec![
            Player::new("p1", "U12")
                .with_score("a", 90.0)
                .with_score("b", 10.0)
                .with_score("noise", 0.0),
            Player::new("p2", "U12")
                .with_score("a", 40.0)
                .with_score("b", 70.0)
                .with_score("noise", 100.0),
            Player::new("p3", "U12")
                .with_score("a", 60.0)
                .with_score("b", 55.0)
                .with_score("noise", 50.0),
        ];
        let without: WeightMap = [("a", 0.6), ("b", 0.4)].into_iter().collect();
        let with_zero: WeightMap = [("a", 0.6), ("b", 0.4), ("noise", 0.0)].into_iter().collect();

        let r1 = rank(&players, &without, &drills, RankingScope::Pool).unwrap();
        let r2 = rank(&players, &with_zero, &drills, RankingScope::Pool).unwrap();
        assert_eq!(ids(&r1), ids(&r2));
        assert_eq!(r1, r2);
    }

    #[test]
    fn test_invalid_weights_are_rejected() {
        let players = vec![Player::new("a", "U12").with_score("score", 1.0)];
        let weights: WeightMap = [("nope", 1.0)].into_iter().collect();
        assert!(matches!(
            rank(&players, &weights, &single_drill(), RankingScope::Pool),
            Err(ValidationError::UnknownWeightDrill { .. })
        ));
    }

    #[test]
    fn test_ranked_player_serializes_flat() {
        let ranked = RankedPlayer {
            player: Player::new("a", "U12").with_score("score", 1.0),
            composite_score: 1.0,
            rank: 1,
        };
        let json = serde_json::to_value(&ranked).unwrap();
        assert_eq!(json["id"], "a");
        assert_eq!(json["age_group"], "U12");
        assert_eq!(json["rank"], 1);
        assert_eq!(json["composite_score"], 1.0);
    }
}
