//! Scoring engine for sports tryouts.
//!
//! Turns heterogeneous raw drill results (times, distances, percentages,
//! counts) into comparable 0–100 scores and one composite ranking per player.
//!
//! # Pipeline
//!
//! ```text
//! players + drills ──► range::resolve_ranges       (per cohort)
//!                          │
//!                          ▼
//!                      normalize::normalize         (raw → 0–100)
//!                          │
//!            ┌─────────────┴──────────────┐
//!            ▼                            ▼
//!   composite::composite_score     tryout-teams (category profiles)
//!            │
//!            ▼
//!   ranking::rank
//! ```
//!
//! Every step is a pure function of its inputs. Nothing is cached or
//! persisted between calls, and inputs are never mutated.
//!
//! # Modules
//!
//! - [`drill`], [`player`], [`weights`]: input data model
//! - [`validation`]: rejects malformed inputs before scoring
//! - [`range`]: static and cohort-derived comparison ranges
//! - [`normalize`]: raw value → 0–100 score
//! - [`composite`]: weighted, renormalized composite score
//! - [`ranking`]: cohort partitioning, stable sort, rank assignment
//! - [`schema`], [`registry`]: sport schemas and built-in presets
//! - [`drill_stats`]: per-drill summary statistics
//!
//! # Example
//!
//! ```
//! use tryout_scoring::{player::Player, ranking::{self, RankingScope}, registry};
//!
//! let schema = registry::lookup("basketball").unwrap();
//! let players = [
//!     Player::new("evan", "U14")
//!         .with_score("free_throws", 95.0)
//!         .with_score("three_point", 64.0)
//!         .with_score("vertical_jump", 40.0)
//!         .with_score("lane_agility", 12.26),
//!     Player::new("sam", "U14").with_score("free_throws", 70.0),
//! ];
//! let weights = schema.preset("shooter").unwrap().weights.clone();
//!
//! let ranked = ranking::rank(&players, &weights, &schema.drills, RankingScope::AgeGroup).unwrap();
//! assert_eq!(ranked[0].player.id, "evan");
//! assert!(ranked.iter().all(|r| (0.0..=100.0).contains(&r.composite_score)));
//! ```

pub mod composite;
pub mod drill;
pub mod drill_stats;
pub mod normalize;
pub mod player;
pub mod range;
pub mod ranking;
pub mod registry;
pub mod schema;
pub mod validation;
pub mod weights;
