//! Skill-balanced team formation for tryout pools.
//!
//! Splits a pool of players into N teams whose per-category averages are as
//! close as possible to the pool-wide averages, so no team ends up stacked
//! with all the fast players or all the shooters.
//!
//! # How Formation Works
//!
//! 1. **Profile** - Each player becomes one 0–100 score per drill category,
//!    normalized within their age group, with missing results imputed (see
//!    [`profile`])
//! 2. **Seed** - The N most extreme players (furthest from an average
//!    player) each start a different team
//! 3. **Greedy** - Remaining players join the team whose balance suffers
//!    least, with a quadratic penalty on team size
//! 4. **Local search** - Random cross-team swaps are committed only when
//!    they strictly improve balance
//!
//! See the [`optimizer`] module for the cost function and its limitations.
//!
//! # Randomness
//!
//! Only local search draws random numbers, from a caller-supplied [`rand::Rng`].
//! Pass a seeded generator (for example `rand_pcg::Pcg32`) to get the same
//! teams for the same input.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg32;
//! use tryout_scoring::registry;
//! use tryout_scoring::player::Player;
//! use tryout_teams::optimizer::{self, FormationParams};
//!
//! let schema = registry::lookup("basketball").unwrap();
//! let players = (0..8_i32)
//!     .map(|i| Player::new(format!("p{i}"), "U14").with_score("free_throws", f64::from(i) * 10.0))
//!     .collect::<Vec<_>>();
//!
//! let params = FormationParams::new(2).with_iterations(200);
//! let mut rng = Pcg32::seed_from_u64(1);
//! let formation = optimizer::form_teams(&players, &schema.drills, params, &mut rng).unwrap();
//! assert_eq!(formation.teams.len(), 2);
//! ```

pub mod optimizer;
pub mod profile;
mod team;
