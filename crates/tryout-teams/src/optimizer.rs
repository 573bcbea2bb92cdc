//! Team formation: seeded greedy assignment followed by swap-based local search.
//!
//! # Algorithm Overview
//!
//! 1. **Preprocess** - Build category profiles (see [`crate::profile`]) and the
//!    pool-wide mean of each category.
//! 2. **Seed** - Order players by impact score (distance from an average
//!    player), highest first, and give each team one of the first N players.
//!    No team starts empty.
//! 3. **Greedy** - Assign each remaining player, in the same order, to the
//!    team with the lowest cost after accepting them:
//!
//!    ```text
//!    cost(team + p) = Σ_c (avg_c(team + p) − mean_c)² + size(team + p)² · size_penalty_weight
//!    ```
//!
//!    Ties go to the lowest team index.
//! 4. **Local search** - For a fixed number of iterations, pick two distinct
//!    random teams and one random member of each, and swap them only if the
//!    pair's combined balance cost strictly drops. Swaps keep team sizes, so
//!    the size penalty plays no part here.
//!
//! # Current Limitations
//!
//! - **Local optimum only**: local search is greedy hill climbing. No
//!   worse-cost move is ever accepted, so the result can get stuck in a local
//!   optimum; there is no annealing or restart.
//! - **Fixed effort**: the iteration count does not scale with the pool size.
//!   Large pools should run this off latency-sensitive threads.
//! - **Single swaps**: moves are one-for-one swaps; a better partition that
//!   needs a three-way rotation is only reachable through improving swaps.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use tryout_scoring::{
    drill::Drill,
    player::Player,
    validation::{self, ValidationError},
};

use crate::{
    profile::{PoolProfiles, ProfiledPlayer},
    team::TeamAccumulator,
};

/// Local search iterations when the caller does not choose.
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Weight of the quadratic team-size penalty used during greedy assignment.
pub const DEFAULT_SIZE_PENALTY_WEIGHT: f64 = 5.0;

/// A swap must lower the pair cost by more than this to be committed.
const MIN_IMPROVEMENT: f64 = 1e-9;

/// Tunables for one team formation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormationParams {
    /// Number of teams requested.
    pub num_teams: usize,
    /// Number of local search iterations.
    pub iterations: usize,
    /// Weight of the `size²` penalty during greedy assignment.
    pub size_penalty_weight: f64,
}

impl Default for FormationParams {
    fn default() -> Self {
        Self::new(2)
    }
}

impl FormationParams {
    #[must_use]
    pub fn new(num_teams: usize) -> Self {
        Self {
            num_teams,
            iterations: DEFAULT_ITERATIONS,
            size_penalty_weight: DEFAULT_SIZE_PENALTY_WEIGHT,
        }
    }

    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_size_penalty_weight(mut self, weight: f64) -> Self {
        self.size_penalty_weight = weight;
        self
    }
}

/// Result of a team formation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamFormation {
    pub teams: Vec<FormedTeam>,
    pub stats: FormationStats,
}

/// One finished team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormedTeam {
    pub players: Vec<ProfiledPlayer>,
    pub category_sums: BTreeMap<String, f64>,
    pub category_counts: BTreeMap<String, usize>,
    pub category_averages: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormationStats {
    /// Categories teams were balanced on.
    pub categories: Vec<String>,
    /// Pool-wide mean per category; the target every team average is pulled toward.
    pub global_means: BTreeMap<String, f64>,
    /// Total balance cost right after greedy assignment.
    pub greedy_cost: f64,
    /// Total balance cost after local search (never above `greedy_cost`).
    pub final_cost: f64,
    pub iterations: usize,
    pub swaps_accepted: usize,
}

/// Partitions `players` into skill-balanced teams.
///
/// Fails on a non-finite or negative size penalty weight. Returns an empty
/// result when fewer than two teams are requested or there are no players.
/// When there are fewer players than requested teams, the team count is
/// reduced to the number of players so that no team is empty.
/// Every input player appears in exactly one returned team.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg32;
/// use tryout_scoring::{drill::Drill, player::Player};
/// use tryout_teams::optimizer::{self, FormationParams};
///
/// let drills = [Drill::new("score", "Score", "pts", "skill").with_range(0.0, 100.0)];
/// let players = [80.0, 60.0, 40.0, 20.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &s)| Player::new(format!("p{i}"), "U12").with_score("score", s))
///     .collect::<Vec<_>>();
///
/// let mut rng = Pcg32::seed_from_u64(7);
/// let params = FormationParams::new(2);
/// let formation = optimizer::form_teams(&players, &drills, params, &mut rng).unwrap();
/// assert_eq!(formation.teams.len(), 2);
/// assert_eq!(formation.teams.iter().map(|t| t.players.len()).sum::<usize>(), 4);
/// assert!(formation.stats.final_cost <= formation.stats.greedy_cost);
/// ```
pub fn form_teams<R>(
    players: &[Player],
    drills: &[Drill],
    params: FormationParams,
    rng: &mut R,
) -> Result<TeamFormation, ValidationError>
where
    R: Rng + ?Sized,
{
    validation::validate_drills(drills)?;
    validation::validate_players(players)?;
    if !params.size_penalty_weight.is_finite() || params.size_penalty_weight < 0.0 {
        return Err(ValidationError::InvalidSizePenalty {
            weight: params.size_penalty_weight,
        });
    }

    if params.num_teams < 2 || players.is_empty() {
        debug!(
            num_teams = params.num_teams,
            players = players.len(),
            "nothing to balance"
        );
        return Ok(TeamFormation::default());
    }
    let num_teams = params.num_teams.min(players.len());

    let profiles = PoolProfiles::build(players, drills);
    debug!(
        players = players.len(),
        categories = profiles.categories.len(),
        num_teams,
        "built category profiles"
    );

    let order = impact_order(&profiles);
    let mut teams = seed(&profiles, &order, num_teams);
    greedy_assign(&profiles, &order[num_teams..], &mut teams, params.size_penalty_weight);
    let greedy_cost = total_cost(&teams, &profiles.global_means);
    debug!(greedy_cost, "greedy assignment done");

    let swaps_accepted = local_search(&profiles, &mut teams, params.iterations, rng);
    let final_cost = total_cost(&teams, &profiles.global_means);
    debug!(
        final_cost,
        swaps_accepted,
        iterations = params.iterations,
        "local search done"
    );

    let teams = teams
        .iter()
        .map(|team| finish_team(&profiles, players, team))
        .collect();
    let global_means = profiles.category_map(&profiles.global_means);
    Ok(TeamFormation {
        teams,
        stats: FormationStats {
            categories: profiles.categories,
            global_means,
            greedy_cost,
            final_cost,
            iterations: params.iterations,
            swaps_accepted,
        },
    })
}

/// Player indices sorted by impact score, highest first; ties keep input order.
fn impact_order(profiles: &PoolProfiles) -> Vec<usize> {
    let mut order = (0..profiles.scores.len())
        .map(|i| (i, profiles.impact_score(i)))
        .collect::<Vec<_>>();
    order.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    order.into_iter().map(|(i, _)| i).collect()
}

fn seed(profiles: &PoolProfiles, order: &[usize], num_teams: usize) -> Vec<TeamAccumulator> {
    order[..num_teams]
        .iter()
        .map(|&player| {
            let mut team = TeamAccumulator::new(profiles.categories.len());
            team.add(player, &profiles.scores[player]);
            team
        })
        .collect()
}

#[expect(clippy::cast_precision_loss)]
fn greedy_assign(
    profiles: &PoolProfiles,
    remaining: &[usize],
    teams: &mut [TeamAccumulator],
    size_penalty_weight: f64,
) {
    for &player in remaining {
        let scores = &profiles.scores[player];
        let best = teams
            .iter()
            .map(|team| {
                let new_size = (team.len() + 1) as f64;
                team.balance_cost_with(scores, &profiles.global_means)
                    + new_size * new_size * size_penalty_weight
            })
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, cost)| match best {
                Some((_, best_cost)) if best_cost <= cost => best,
                _ => Some((i, cost)),
            });
        if let Some((i, _)) = best {
            teams[i].add(player, scores);
        }
    }
}

fn local_search<R>(
    profiles: &PoolProfiles,
    teams: &mut [TeamAccumulator],
    iterations: usize,
    rng: &mut R,
) -> usize
where
    R: Rng + ?Sized,
{
    if teams.len() < 2 {
        return 0;
    }
    let means = &profiles.global_means;
    let mut accepted = 0;
    for iteration in 0..iterations {
        let a = rng.random_range(0..teams.len());
        let mut b = rng.random_range(0..teams.len() - 1);
        if b >= a {
            b += 1;
        }
        let slot_a = rng.random_range(0..teams[a].len());
        let slot_b = rng.random_range(0..teams[b].len());
        let player_a = teams[a].members()[slot_a];
        let player_b = teams[b].members()[slot_b];
        let scores_a = &profiles.scores[player_a];
        let scores_b = &profiles.scores[player_b];

        let before = teams[a].balance_cost(means) + teams[b].balance_cost(means);
        let after = teams[a].balance_cost_swapped(scores_a, scores_b, means)
            + teams[b].balance_cost_swapped(scores_b, scores_a, means);

        if after + MIN_IMPROVEMENT < before {
            teams[a].replace(slot_a, scores_a, player_b, scores_b);
            teams[b].replace(slot_b, scores_b, player_a, scores_a);
            accepted += 1;
            trace!(iteration, a, b, before, after, "swap accepted");
        }
    }
    accepted
}

fn total_cost(teams: &[TeamAccumulator], global_means: &[f64]) -> f64 {
    teams.iter().map(|t| t.balance_cost(global_means)).sum()
}

fn finish_team(profiles: &PoolProfiles, players: &[Player], team: &TeamAccumulator) -> FormedTeam {
    let averages = team.averages().map(|avg| avg.unwrap_or(0.0)).collect::<Vec<_>>();
    FormedTeam {
        players: team
            .members()
            .iter()
            .map(|&i| profiles.profiled_player(players, i))
            .collect(),
        category_sums: profiles.category_map(team.sums()),
        category_counts: profiles
            .categories
            .iter()
            .cloned()
            .zip(team.counts().iter().copied())
            .collect(),
        category_averages: profiles.category_map(&averages),
    }
}
