//! Statistical helpers shared by the tryout scoring crates.
//!
//! The scoring engine needs a handful of summary measures over drill results:
//! observed minimum/maximum for dynamic ranges, the median used to impute
//! missing values during team formation, and means for per-category balance
//! targets. This crate keeps them in one place so every consumer agrees on
//! the same definitions (in particular, the median of an even-sized sample is
//! the mean of the two middle values).
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//!
//! # Examples
//!
//! ```
//! use tryout_stats::descriptive::{self, DescriptiveStats};
//!
//! let values = [4.0, 1.0, 3.0, 2.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.min, 1.0);
//! assert_eq!(stats.max, 4.0);
//! assert_eq!(stats.median, 2.5);
//!
//! assert_eq!(descriptive::median(values), Some(2.5));
//! assert_eq!(descriptive::mean([]), None);
//! ```

pub mod descriptive;
