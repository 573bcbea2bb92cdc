use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use tryout_scoring::{
    ranking::{self, RankedPlayer, RankingScope},
    schema::SportSchema,
    weights::WeightMap,
};

use crate::util::{self, Output, SchemaArg};

/// Age group filter value meaning "every age group".
const ALL_AGE_GROUPS: &str = "ALL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ScopeArg {
    AgeGroup,
    Pool,
}

impl From<ScopeArg> for RankingScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::AgeGroup => RankingScope::AgeGroup,
            ScopeArg::Pool => RankingScope::Pool,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RankArg {
    /// Players JSON file
    #[arg(long)]
    players: PathBuf,
    #[clap(flatten)]
    schema: SchemaArg,
    /// Weight preset of the schema (defaults to the drills' default weights)
    #[arg(long, conflicts_with = "weights")]
    preset: Option<String>,
    /// Weights JSON file mapping drill keys to weights
    #[arg(long)]
    weights: Option<PathBuf>,
    /// Treat weights file values as percentages (0-100)
    #[arg(long, requires = "weights")]
    percent: bool,
    /// Comparison group for ranges and ranks
    #[arg(long, value_enum, default_value = "age-group")]
    scope: ScopeArg,
    /// Only rank players of this age group (`ALL` for every age group)
    #[arg(long, default_value = ALL_AGE_GROUPS)]
    age_group: String,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RankingReport {
    generated_at: DateTime<Utc>,
    schema: String,
    scope: RankingScope,
    weights: WeightMap,
    /// Active weights as shares of their total.
    weight_shares: WeightMap,
    players: Vec<RankedPlayer>,
}

pub(crate) fn run(arg: &RankArg) -> anyhow::Result<()> {
    let schema = arg.schema.load()?;
    let mut players = util::read_players_file(&arg.players)?;
    if !arg.age_group.eq_ignore_ascii_case(ALL_AGE_GROUPS) {
        players.retain(|p| p.age_group == arg.age_group);
    }
    info!(
        schema = %schema.id,
        players = players.len(),
        age_group = %arg.age_group,
        "Loaded players"
    );

    let weights = resolve_weights(
        &schema,
        arg.preset.as_deref(),
        arg.weights.as_deref(),
        arg.percent,
    )?;
    let scope = RankingScope::from(arg.scope);
    let ranked = ranking::rank(&players, &weights, &schema.drills, scope)
        .context("Failed to rank players")?;
    info!(ranked = ranked.len(), ?scope, "Ranking completed");

    let report = RankingReport {
        generated_at: Utc::now(),
        schema: schema.id,
        scope,
        weight_shares: weights.normalized(),
        weights,
        players: ranked,
    };
    Output::save_json(&report, arg.output.clone())?;
    if let Some(path) = &arg.output {
        info!(path = %path.display(), "Ranking saved");
    }
    Ok(())
}

fn resolve_weights(
    schema: &SportSchema,
    preset: Option<&str>,
    weights_path: Option<&Path>,
    percent: bool,
) -> anyhow::Result<WeightMap> {
    if let Some(path) = weights_path {
        return util::read_weights_file(path, percent);
    }
    let Some(preset) = preset else {
        return Ok(schema.default_weights());
    };
    let weights = schema.preset_weights(preset).with_context(|| {
        let available = schema
            .presets
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>();
        format!(
            "Unknown preset {preset} for {} (available: {})",
            schema.id,
            available.join(", ")
        )
    })?;
    Ok(weights.clone())
}
