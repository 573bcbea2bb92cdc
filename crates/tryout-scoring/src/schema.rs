//! Sport schemas: the drill set and named weight presets for one sport.
//!
//! A schema is plain configuration. Built-in schemas live in
//! [`registry`](crate::registry); custom ones deserialize from JSON of the same
//! shape.

use serde::{Deserialize, Serialize};

use crate::{drill::Drill, weights::WeightMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportSchema {
    pub id: String,
    pub sport: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub drills: Vec<Drill>,
    #[serde(default)]
    pub presets: Vec<Preset>,
}

/// A named weighting of a schema's drills (e.g. "Speed Focused").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub weights: WeightMap,
}

impl SportSchema {
    #[must_use]
    pub fn preset(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id.eq_ignore_ascii_case(id))
    }

    /// Weights of the preset named `id`, ignoring ASCII case.
    #[must_use]
    pub fn preset_weights(&self, id: &str) -> Option<&WeightMap> {
        self.preset(id).map(|p| &p.weights)
    }

    /// Weights built from each drill's default weight.
    #[must_use]
    pub fn default_weights(&self) -> WeightMap {
        WeightMap::from_defaults(&self.drills)
    }

    /// Distinct drill categories in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = vec![];
        for drill in &self.drills {
            if !categories.contains(&drill.category.as_str()) {
                categories.push(&drill.category);
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> SportSchema {
        SportSchema {
            id: "test".to_owned(),
            sport: "Test".to_owned(),
            name: "Test Combine".to_owned(),
            description: String::new(),
            drills: vec![
                Drill::new("a", "A", "s", "speed").with_default_weight(0.4),
                Drill::new("b", "B", "in", "power").with_default_weight(0.6),
                Drill::new("c", "C", "pts", "speed"),
            ],
            presets: vec![Preset {
                id: "power".to_owned(),
                name: "Power".to_owned(),
                description: String::new(),
                weights: [("b", 1.0)].into_iter().collect(),
            }],
        }
    }

    #[test]
    fn test_lookups() {
        let schema = schema();
        assert!(schema.preset("POWER").is_some());
        assert!(schema.preset("speed").is_none());
        assert_eq!(schema.preset_weights("power").map(|w| w.get("b")), Some(1.0));
        assert!(schema.preset_weights("speed").is_none());
    }

    #[test]
    fn test_default_weights_and_categories() {
        let schema = schema();
        let weights = schema.default_weights();
        assert_eq!(weights.get("a"), 0.4);
        assert_eq!(weights.get("c"), 0.0);
        assert_eq!(schema.categories(), vec!["speed", "power"]);
    }

    #[test]
    fn test_deserialize_without_presets() {
        let json = r#"{
            "id": "mini",
            "sport": "Mini",
            "name": "Mini",
            "drills": [{ "key": "x", "category": "skills" }]
        }"#;
        let schema: SportSchema = serde_json::from_str(json).unwrap();
        assert!(schema.presets.is_empty());
        assert_eq!(schema.drills.len(), 1);
    }
}
