//! Per-drill summary statistics over a player pool.
//!
//! Used for event dashboards: how many players were measured, the spread of
//! raw results, and who posted the best results. "Best" follows the drill's
//! direction, so the fastest sprint times lead a lower-is-better drill.

use serde::Serialize;
use tryout_stats::descriptive::DescriptiveStats;

use crate::{
    drill::Drill,
    player::Player,
    validation::{self, ValidationError},
};

/// Number of top performers reported when the caller has no preference.
pub const DEFAULT_TOP_PERFORMERS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrillSummary {
    pub key: String,
    pub label: String,
    pub unit: String,
    /// Players with a result for this drill.
    pub count: usize,
    /// Players without a result for this drill.
    pub missing: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub std_dev: Option<f64>,
    pub top_performers: Vec<TopPerformer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPerformer {
    pub player_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub age_group: String,
    pub value: f64,
}

/// Summarizes every drill over `players`.
///
/// Ties among top performers keep input order. Drills and players are
/// validated first, so a non-finite score is an error rather than a statistic.
pub fn drill_statistics(
    players: &[Player],
    drills: &[Drill],
    top_n: usize,
) -> Result<Vec<DrillSummary>, ValidationError> {
    validation::validate_drills(drills)?;
    validation::validate_players(players)?;
    Ok(drills
        .iter()
        .map(|drill| summarize(players, drill, top_n))
        .collect())
}

fn summarize(players: &[Player], drill: &Drill, top_n: usize) -> DrillSummary {
    let mut measured = players
        .iter()
        .filter_map(|p| p.score(&drill.key).map(|v| (p, v)))
        .collect::<Vec<_>>();
    let stats = DescriptiveStats::new(measured.iter().map(|(_, v)| *v));

    if drill.lower_is_better {
        measured.sort_by(|(_, a), (_, b)| a.total_cmp(b));
    } else {
        measured.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    }
    let top_performers = measured
        .iter()
        .take(top_n)
        .map(|(p, value)| TopPerformer {
            player_id: p.id.clone(),
            name: p.name.clone(),
            age_group: p.age_group.clone(),
            value: *value,
        })
        .collect();

    DrillSummary {
        key: drill.key.clone(),
        label: drill.label.clone(),
        unit: drill.unit.clone(),
        count: measured.len(),
        missing: players.len() - measured.len(),
        min: stats.as_ref().map(|s| s.min),
        max: stats.as_ref().map(|s| s.max),
        mean: stats.as_ref().map(|s| s.mean),
        median: stats.as_ref().map(|s| s.median),
        std_dev: stats.as_ref().map(|s| s.std_dev),
        top_performers,
    }
}
