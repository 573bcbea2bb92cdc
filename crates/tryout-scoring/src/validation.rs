//! Input validation.
//!
//! Normal data gaps (missing scores, unresolvable or degenerate ranges) are
//! handled by the scoring code itself. The checks here cover inputs that can
//! only come from an integration bug and would otherwise yield misleading
//! scores; they fail before any computation happens.

use std::collections::{BTreeSet, HashSet};

use crate::{drill::Drill, player::Player, weights::WeightMap};

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    #[display("duplicate drill key '{key}'")]
    DuplicateDrill { key: String },
    #[display("drill '{key}' has an invalid static range [{min:?}, {max:?}]")]
    InvalidStaticRange {
        key: String,
        min: Option<f64>,
        max: Option<f64>,
    },
    #[display("weight references unknown drill '{key}'")]
    UnknownWeightDrill { key: String },
    #[display("weight for drill '{key}' must be finite and non-negative, got {weight}")]
    InvalidWeight { key: String, weight: f64 },
    #[display("player '{player_id}' has a non-finite score {value} for drill '{drill_key}'")]
    NonFiniteScore {
        player_id: String,
        drill_key: String,
        value: f64,
    },
    #[display("duplicate player id '{player_id}' in age group '{age_group}'")]
    DuplicatePlayer { player_id: String, age_group: String },
    #[display("team size penalty weight must be finite and non-negative, got {weight}")]
    InvalidSizePenalty { weight: f64 },
}

/// Checks drill keys are unique and configured bounds are usable.
pub fn validate_drills(drills: &[Drill]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for drill in drills {
        if !seen.insert(drill.key.as_str()) {
            return Err(ValidationError::DuplicateDrill {
                key: drill.key.clone(),
            });
        }
        let bad_bound = [drill.min, drill.max]
            .into_iter()
            .flatten()
            .any(|b| !b.is_finite());
        let inverted = drill.static_range().is_some_and(|r| r.min > r.max);
        if bad_bound || inverted {
            return Err(ValidationError::InvalidStaticRange {
                key: drill.key.clone(),
                min: drill.min,
                max: drill.max,
            });
        }
    }
    Ok(())
}

/// Checks every weighted key names a drill and every weight is a usable number.
pub fn validate_weights(weights: &WeightMap, drills: &[Drill]) -> Result<(), ValidationError> {
    let known = drills.iter().map(|d| d.key.as_str()).collect::<HashSet<_>>();
    for (key, &weight) in weights {
        if !known.contains(key.as_str()) {
            return Err(ValidationError::UnknownWeightDrill { key: key.clone() });
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(ValidationError::InvalidWeight {
                key: key.clone(),
                weight,
            });
        }
    }
    Ok(())
}

/// Checks scores are finite and ids are unique within each age group.
///
/// Scores for keys that name no drill are ignored: player records may carry
/// results for drills the current schema does not evaluate.
pub fn validate_players(players: &[Player]) -> Result<(), ValidationError> {
    let mut seen = BTreeSet::new();
    for player in players {
        if !seen.insert((player.age_group.as_str(), player.id.as_str())) {
            return Err(ValidationError::DuplicatePlayer {
                player_id: player.id.clone(),
                age_group: player.age_group.clone(),
            });
        }
        for (drill_key, value) in &player.scores {
            if let Some(value) = *value
                && !value.is_finite()
            {
                return Err(ValidationError::NonFiniteScore {
                    player_id: player.id.clone(),
                    drill_key: drill_key.clone(),
                    value,
                });
            }
        }
    }
    Ok(())
}

/// Runs all checks for a scoring request.
pub fn validate(
    players: &[Player],
    drills: &[Drill],
    weights: &WeightMap,
) -> Result<(), ValidationError> {
    validate_drills(drills)?;
    validate_weights(weights, drills)?;
    validate_players(players)
}
