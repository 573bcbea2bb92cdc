use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A tryout participant and their raw drill results.
///
/// Players are read-only inputs. Scoring produces derived records
/// ([`RankedPlayer`](crate::ranking::RankedPlayer), or category profiles in
/// `tryout-teams`) rather than mutating the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Identifier, unique within the player's age group.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Cohort key used for dynamic ranges.
    pub age_group: String,
    /// Raw results keyed by drill key. `None` and absent keys both mean "not measured".
    #[serde(default)]
    pub scores: BTreeMap<String, Option<f64>>,
}

impl Player {
    #[must_use]
    pub fn new(id: impl Into<String>, age_group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            age_group: age_group.into(),
            scores: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_score(mut self, drill_key: impl Into<String>, value: f64) -> Self {
        self.scores.insert(drill_key.into(), Some(value));
        self
    }

    /// Returns the raw result for `drill_key`, if measured.
    #[must_use]
    pub fn score(&self, drill_key: &str) -> Option<f64> {
        self.scores.get(drill_key).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_absent_scores_are_missing() {
        let json = r#"{
            "id": "p1",
            "age_group": "U12",
            "scores": { "sprint": 4.5, "jump": null }
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.score("sprint"), Some(4.5));
        assert_eq!(player.score("jump"), None);
        assert_eq!(player.score("throw"), None);
        assert_eq!(player.name, None);
    }
}
