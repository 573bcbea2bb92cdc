use std::path::PathBuf;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use rand::SeedableRng as _;
use rand_pcg::Pcg32;
use serde::Serialize;
use tracing::info;
use tryout_teams::optimizer::{
    self, DEFAULT_ITERATIONS, DEFAULT_SIZE_PENALTY_WEIGHT, FormationParams, TeamFormation,
};

use crate::util::{self, Output, SchemaArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct FormTeamsArg {
    /// Players JSON file
    #[arg(long)]
    players: PathBuf,
    #[clap(flatten)]
    schema: SchemaArg,
    /// Number of teams to form
    #[arg(long)]
    teams: usize,
    /// Local search iterations
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,
    /// Weight of the team size penalty during greedy assignment
    #[arg(long, default_value_t = DEFAULT_SIZE_PENALTY_WEIGHT)]
    size_penalty: f64,
    /// Random seed for reproducible teams
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

impl FormTeamsArg {
    pub(crate) fn params(&self) -> FormationParams {
        FormationParams::new(self.teams)
            .with_iterations(self.iterations)
            .with_size_penalty_weight(self.size_penalty)
    }
}

#[derive(Debug, Serialize)]
struct FormationReport {
    generated_at: DateTime<Utc>,
    schema: String,
    params: FormationParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(flatten)]
    formation: TeamFormation,
}

pub(crate) fn run(arg: &FormTeamsArg) -> anyhow::Result<()> {
    let schema = arg.schema.load()?;
    let players = util::read_players_file(&arg.players)?;
    let params = arg.params();
    info!(
        schema = %schema.id,
        players = players.len(),
        teams = params.num_teams,
        iterations = params.iterations,
        "Forming teams"
    );

    let formation = match arg.seed {
        Some(seed) => optimizer::form_teams(
            &players,
            &schema.drills,
            params,
            &mut Pcg32::seed_from_u64(seed),
        ),
        None => optimizer::form_teams(&players, &schema.drills, params, &mut rand::rng()),
    }
    .context("Failed to form teams")?;

    info!(
        teams = formation.teams.len(),
        greedy_cost = formation.stats.greedy_cost,
        final_cost = formation.stats.final_cost,
        swaps_accepted = formation.stats.swaps_accepted,
        "Team formation completed"
    );
    for (i, team) in formation.teams.iter().enumerate() {
        info!(team = i + 1, players = team.players.len(), averages = ?team.category_averages);
    }

    let report = FormationReport {
        generated_at: Utc::now(),
        schema: schema.id,
        params,
        seed: arg.seed,
        formation,
    };
    Output::save_json(&report, arg.output.clone())?;
    if let Some(path) = &arg.output {
        info!(path = %path.display(), "Teams saved");
    }
    Ok(())
}
