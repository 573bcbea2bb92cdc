//! Drill definitions: what is measured, how it is compared, and how much it counts.

use serde::{Deserialize, Serialize};

use crate::range::DrillRange;

/// A single measured drill (sprint time, vertical jump, free-throw percentage, ...).
///
/// Drills arrive fully resolved from the schema layer: the engine never guesses
/// a drill's direction or category from its name.
///
/// When both [`min`](Self::min) and [`max`](Self::max) are set the drill has a
/// *static* comparison range; otherwise its range is derived from the scores
/// observed in each cohort (see [`crate::range`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drill {
    /// Unique key used in player score maps and weight maps.
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub unit: String,
    /// Ability axis this drill contributes to when balancing teams.
    pub category: String,
    /// Whether smaller raw values are better (e.g. sprint times).
    #[serde(default)]
    pub lower_is_better: bool,
    #[serde(default, alias = "min_value", skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, alias = "max_value", skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Weight used when the caller does not supply a weight map (0–1 scale).
    #[serde(default)]
    pub default_weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Drill {
    /// Creates a higher-is-better drill with a dynamic range and no default weight.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        unit: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            unit: unit.into(),
            category: category.into(),
            lower_is_better: false,
            min: None,
            max: None,
            default_weight: 0.0,
            description: None,
        }
    }

    /// Marks the drill as lower-is-better.
    #[must_use]
    pub fn lower_is_better(mut self) -> Self {
        self.lower_is_better = true;
        self
    }

    /// Gives the drill a static comparison range.
    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_default_weight(mut self, weight: f64) -> Self {
        self.default_weight = weight;
        self
    }

    /// Returns the configured range if both bounds are present.
    #[must_use]
    pub fn static_range(&self) -> Option<DrillRange> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some(DrillRange { min, max }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_range_requires_both_bounds() {
        let drill = Drill::new("vj", "Vertical Jump", "in", "power");
        assert_eq!(drill.static_range(), None);

        let mut half = drill.clone();
        half.min = Some(0.0);
        assert_eq!(half.static_range(), None);

        let full = drill.with_range(0.0, 50.0);
        assert_eq!(full.static_range(), Some(DrillRange { min: 0.0, max: 50.0 }));
    }

    #[test]
    fn test_deserialize_accepts_legacy_bound_names() {
        let json = r#"{
            "key": "lane_agility",
            "label": "Lane Agility",
            "unit": "sec",
            "category": "agility",
            "lower_is_better": true,
            "min_value": 8.0,
            "max_value": 20.0,
            "default_weight": 0.15
        }"#;
        let drill: Drill = serde_json::from_str(json).unwrap();
        assert!(drill.lower_is_better);
        assert_eq!(drill.static_range(), Some(DrillRange { min: 8.0, max: 20.0 }));
        assert_eq!(drill.default_weight, 0.15);
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{ "key": "catching", "category": "skills" }"#;
        let drill: Drill = serde_json::from_str(json).unwrap();
        assert!(!drill.lower_is_better);
        assert_eq!(drill.min, None);
        assert_eq!(drill.default_weight, 0.0);
        assert!(drill.label.is_empty());
    }
}
