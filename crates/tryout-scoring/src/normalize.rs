//! Mapping raw drill values onto the shared 0–100 scale.
//!
//! | case                         | result                                  |
//! |------------------------------|-----------------------------------------|
//! | `max == min`                 | `50.0` (nobody can be differentiated)   |
//! | higher is better             | `(raw - min) / (max - min) * 100`       |
//! | lower is better              | `(max - raw) / (max - min) * 100`       |
//!
//! Results are **not clamped**. A raw value outside a static range
//! extrapolates past 0 or 100, which marks an exceptional result.

use crate::range::DrillRange;

/// Score given to every player when a range is degenerate.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Normalizes `raw` against `range`.
///
/// ```
/// use tryout_scoring::{normalize::normalize, range::DrillRange};
///
/// let range = DrillRange { min: 8.0, max: 20.0 };
/// assert_eq!(normalize(8.0, range, true), 100.0);
/// assert_eq!(normalize(20.0, range, true), 0.0);
/// assert_eq!(normalize(14.0, range, false), 50.0);
/// ```
#[must_use]
pub fn normalize(raw: f64, range: DrillRange, lower_is_better: bool) -> f64 {
    if range.is_degenerate() {
        return NEUTRAL_SCORE;
    }
    let span = range.max - range.min;
    if lower_is_better {
        (range.max - raw) / span * 100.0
    } else {
        (raw - range.min) / span * 100.0
    }
}
