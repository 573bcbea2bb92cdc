//! Comparison ranges for drills.
//!
//! Every normalized score is computed against a `[min, max]` range. A drill
//! with a static range in its configuration always uses it. Otherwise the range
//! is the observed minimum and maximum over a *cohort*: the players sharing an
//! age group, or the whole pool when no cohort key is given. A player's value
//! is never compared against another cohort's dynamic range.
//!
//! A drill that nobody in the cohort has a result for has no range and is
//! absent from the returned [`DrillRanges`]; scoring treats it as "cannot
//! normalize".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tryout_stats::descriptive;

use crate::{drill::Drill, player::Player};

/// Inclusive bounds a raw drill value is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrillRange {
    pub min: f64,
    pub max: f64,
}

impl DrillRange {
    /// Whether every value in the range is identical, so no player can be differentiated.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}

/// Resolved ranges keyed by drill key.
pub type DrillRanges = BTreeMap<String, DrillRange>;

/// Resolves the comparison range of each drill for one cohort.
///
/// With `cohort_key = Some(group)` only players whose `age_group` equals
/// `group` contribute to dynamic ranges; with `None` the whole slice is the
/// cohort.
///
/// ```
/// use tryout_scoring::{drill::Drill, player::Player, range::{self, DrillRange}};
///
/// let drills = [Drill::new("jump", "Jump", "in", "power")];
/// let players = [
///     Player::new("a", "U10").with_score("jump", 12.0),
///     Player::new("b", "U10").with_score("jump", 18.0),
///     Player::new("c", "U12").with_score("jump", 30.0),
/// ];
/// let ranges = range::resolve_ranges(&players, Some("U10"), &drills);
/// assert_eq!(ranges["jump"], DrillRange { min: 12.0, max: 18.0 });
/// ```
#[must_use]
pub fn resolve_ranges(
    players: &[Player],
    cohort_key: Option<&str>,
    drills: &[Drill],
) -> DrillRanges {
    drills
        .iter()
        .filter_map(|drill| {
            let range = drill.static_range().or_else(|| {
                let observed = players
                    .iter()
                    .filter(|p| cohort_key.is_none_or(|key| p.age_group == key))
                    .filter_map(|p| p.score(&drill.key));
                descriptive::min_max(observed).map(|(min, max)| DrillRange { min, max })
            })?;
            Some((drill.key.clone(), range))
        })
        .collect()
}

/// Resolves ranges separately for every age group present in `players`.
#[must_use]
pub fn resolve_by_age_group(
    players: &[Player],
    drills: &[Drill],
) -> BTreeMap<String, DrillRanges> {
    let mut by_group = BTreeMap::new();
    for player in players {
        if !by_group.contains_key(&player.age_group) {
            let ranges = resolve_ranges(players, Some(&player.age_group), drills);
            by_group.insert(player.age_group.clone(), ranges);
        }
    }
    by_group
}
