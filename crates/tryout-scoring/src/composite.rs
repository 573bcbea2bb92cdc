//! Composite scores: one 0–100 number per player.
//!
//! ```text
//! active drills  = { d | weight(d) > 0 and d has a resolved range }
//! total          = Σ weight(d)                         over active drills
//! accumulator    = Σ normalize(raw(d)) · weight(d)      over active drills with a result
//! composite      = round₂(accumulator / total)          (0 when total = 0)
//! ```
//!
//! A missing result contributes nothing while its weight still counts, so a
//! partial record ranks below a complete record of equal ability. A drill
//! without a resolved range (no data anywhere in the cohort) is left out of
//! both sums.
//!
//! The returned value is already on the human-readable 0–100 scale. It must
//! not be multiplied or divided again by anything that consumes it.

use crate::{drill::Drill, normalize, player::Player, range::DrillRanges, weights::WeightMap};

/// Computes a player's composite score against pre-resolved ranges.
///
/// `ranges` must come from the player's own cohort (see
/// [`range::resolve_ranges`](crate::range::resolve_ranges)).
///
/// ```
/// use tryout_scoring::{
///     composite::composite_score, drill::Drill, player::Player, range, weights::WeightMap,
/// };
///
/// let drills = [
///     Drill::new("a", "A", "pts", "skills").with_range(0.0, 100.0),
///     Drill::new("b", "B", "pts", "skills").with_range(0.0, 100.0),
/// ];
/// let player = Player::new("p", "U12").with_score("a", 80.0).with_score("b", 60.0);
/// let weights: WeightMap = [("a", 1.0), ("b", 1.0)].into_iter().collect();
/// let ranges = range::resolve_ranges(std::slice::from_ref(&player), None, &drills);
///
/// assert_eq!(composite_score(&player, &weights, &drills, &ranges), 70.0);
/// ```
#[must_use]
pub fn composite_score(
    player: &Player,
    weights: &WeightMap,
    drills: &[Drill],
    ranges: &DrillRanges,
) -> f64 {
    let mut total_weight = 0.0;
    let mut accumulator = 0.0;

    for drill in drills {
        if !weights.is_active(&drill.key) {
            continue;
        }
        let weight = weights.get(&drill.key);
        let Some(range) = ranges.get(&drill.key) else {
            continue;
        };
        total_weight += weight;
        if let Some(raw) = player.score(&drill.key) {
            accumulator += normalize::normalize(raw, *range, drill.lower_is_better) * weight;
        }
    }

    if total_weight > 0.0 {
        round_half_up(accumulator / total_weight, 2)
    } else {
        0.0
    }
}

/// Rounds to `decimals` places, with halves rounding towards positive infinity.
///
/// Decimal halves such as `1.005` are not exactly representable in binary and
/// land a few ulps below the midpoint after scaling; they still round up.
#[must_use]
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    let scaled = value * scale;
    let tolerance = scaled.abs().max(1.0) * f64::EPSILON * 8.0;
    (scaled + 0.5 + tolerance).floor() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range;

    fn percent_drill(key: &str) -> Drill {
        Drill::new(key, key, "%", "skills").with_range(0.0, 100.0)
    }

    fn score_alone(player: &Player, weights: &WeightMap, drills: &[Drill]) -> f64 {
        let ranges = range::resolve_ranges(std::slice::from_ref(player), None, drills);
        composite_score(player, weights, drills, &ranges)
    }

    #[test]
    fn test_equal_weights_average() {
        let drills = [percent_drill("a"), percent_drill("b")];
        let player = Player::new("p", "U12").with_score("a", 80.0).with_score("b", 60.0);
        let weights: WeightMap = [("a", 0.5), ("b", 0.5)].into_iter().collect();
        assert_eq!(score_alone(&player, &weights, &drills), 70.0);
    }

    #[test]
    fn test_weight_scale_does_not_matter() {
        let drills = [percent_drill("a"), percent_drill("b")];
        let player = Player::new("p", "U12").with_score("a", 90.0).with_score("b", 30.0);
        let fractions: WeightMap = [("a", 0.25), ("b", 0.75)].into_iter().collect();
        let percents = WeightMap::from_percentages([("a", 25.0), ("b", 75.0)]);
        let raw: WeightMap = [("a", 1.0), ("b", 3.0)].into_iter().collect();
        let expected = 45.0;
        assert_eq!(score_alone(&player, &fractions, &drills), expected);
        assert_eq!(score_alone(&player, &percents, &drills), expected);
        assert_eq!(score_alone(&player, &raw, &drills), expected);
    }

    #[test]
    fn test_missing_score_contributes_zero_but_keeps_weight() {
        let drills = [percent_drill("a"), percent_drill("b")];
        let player = Player::new("p", "U12").with_score("a", 80.0);
        let weights: WeightMap = [("a", 1.0), ("b", 1.0)].into_iter().collect();
        assert_eq!(score_alone(&player, &weights, &drills), 40.0);
    }

    #[test]
    fn test_zero_total_weight_scores_zero() {
        let drills = [percent_drill("a")];
        let player = Player::new("p", "U12").with_score("a", 80.0);
        let weights: WeightMap = [("a", 0.0)].into_iter().collect();
        assert_eq!(score_alone(&player, &weights, &drills), 0.0);
        assert_eq!(score_alone(&player, &WeightMap::new(), &drills), 0.0);
    }

    #[test]
    fn test_unresolvable_drill_is_excluded() {
        let drills = [percent_drill("a"), Drill::new("dyn", "Dyn", "pts", "skills")];
        let player = Player::new("p", "U12").with_score("a", 60.0);
        let weights: WeightMap = [("a", 1.0), ("dyn", 3.0)].into_iter().collect();
        // nobody has "dyn", so it has no range and its weight drops out
        assert_eq!(score_alone(&player, &weights, &drills), 60.0);

        let only_dyn: WeightMap = [("dyn", 1.0)].into_iter().collect();
        assert_eq!(score_alone(&player, &only_dyn, &drills), 0.0);
    }

    #[test]
    fn test_golden_basketball_score() {
        let drills = [
            percent_drill("free_throws").with_default_weight(0.20),
            percent_drill("three_point").with_default_weight(0.20),
            Drill::new("vertical_jump", "VJ", "in", "power")
                .with_range(0.0, 50.0)
                .with_default_weight(0.20),
            Drill::new("lane_agility", "LA", "s", "agility")
                .lower_is_better()
                .with_range(8.0, 20.0)
                .with_default_weight(0.15),
        ];
        let player = Player::new("evan", "U14")
            .with_score("free_throws", 95.0)
            .with_score("three_point", 64.0)
            .with_score("vertical_jump", 40.0)
            .with_score("lane_agility", 12.26);
        let weights = WeightMap::from_defaults(&drills);
        assert_eq!(score_alone(&player, &weights, &drills), 76.63);
    }

    #[test]
    fn test_extrapolated_scores_are_not_clamped() {
        let drills = [percent_drill("a")];
        let player = Player::new("p", "U12").with_score("a", 110.0);
        let weights: WeightMap = [("a", 1.0)].into_iter().collect();
        assert_eq!(score_alone(&player, &weights, &drills), 110.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(76.633_333, 2), 76.63);
        assert_eq!(round_half_up(12.5, 0), 13.0);
        assert_eq!(round_half_up(-12.5, 0), -12.0);
        assert_eq!(round_half_up(0.125, 2), 0.13);
    }

    #[test]
    fn test_round_half_up_inexact_decimal_halves() {
        assert_eq!(round_half_up(1.005, 2), 1.01);
        assert_eq!(round_half_up(2.675, 2), 2.68);
        assert_eq!(round_half_up(1.004_999, 2), 1.0);
    }
}
