//! Drill weight maps.
//!
//! A [`WeightMap`] assigns a non-negative relative importance to each drill.
//! Weights need not sum to any fixed total: the composite score divides by the
//! sum of the *active* weights, so `{a: 1, b: 1}` and `{a: 0.5, b: 0.5}` rank
//! players identically. A weight of zero (or a missing entry) disables a drill
//! without removing it from the map.
//!
//! # Scale convention
//!
//! Engine weights are fractions on the 0–1 scale, matching the default
//! weights carried by sport schemas. Weights entered as percentages (0–100)
//! must be converted exactly once with [`WeightMap::from_percentages`] at the
//! boundary where they enter the system.

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

use crate::drill::Drill;

/// Relative weight per drill key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightMap(BTreeMap<String, f64>);

impl WeightMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a weight map from each drill's `default_weight`.
    #[must_use]
    pub fn from_defaults(drills: &[Drill]) -> Self {
        drills
            .iter()
            .map(|d| (d.key.clone(), d.default_weight))
            .collect()
    }

    /// Converts percentage weights (0–100) into engine fractions (0–1).
    ///
    /// ```
    /// # use tryout_scoring::weights::WeightMap;
    /// let weights = WeightMap::from_percentages([("sprint", 40.0), ("jump", 60.0)]);
    /// assert_eq!(weights.get("sprint"), 0.4);
    /// assert_eq!(weights.get("jump"), 0.6);
    /// ```
    #[must_use]
    pub fn from_percentages<I, K>(percentages: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        percentages
            .into_iter()
            .map(|(k, pct)| (k.into(), pct / 100.0))
            .collect()
    }

    /// Returns the weight for `drill_key`; drills without an entry weigh zero.
    #[must_use]
    pub fn get(&self, drill_key: &str) -> f64 {
        self.0.get(drill_key).copied().unwrap_or(0.0)
    }

    /// Whether `drill_key` takes part in scoring.
    #[must_use]
    pub fn is_active(&self, drill_key: &str) -> bool {
        self.get(drill_key) > 0.0
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, f64> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy whose positive weights sum to 1.0 (L1 normalization).
    ///
    /// If the sum is zero the weights are returned unchanged. Composite scores
    /// do not depend on this; it is for presenting weights as shares.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let sum: f64 = self.0.values().copied().filter(|w| *w > 0.0).sum();
        if sum <= 0.0 {
            return self.clone();
        }
        self.0.iter().map(|(k, w)| (k.clone(), w / sum)).collect()
    }
}

impl<K> FromIterator<(K, f64)> for WeightMap
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, w)| (k.into(), w)).collect())
    }
}

impl<'a> IntoIterator for &'a WeightMap {
    type Item = (&'a String, &'a f64);
    type IntoIter = btree_map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
