use std::path::PathBuf;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use tryout_scoring::drill_stats::{self, DEFAULT_TOP_PERFORMERS, DrillSummary};

use crate::util::{self, Output, SchemaArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DrillStatsArg {
    /// Players JSON file
    #[arg(long)]
    players: PathBuf,
    #[clap(flatten)]
    schema: SchemaArg,
    /// Number of top performers listed per drill
    #[arg(long, default_value_t = DEFAULT_TOP_PERFORMERS)]
    top: usize,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct DrillStatsReport {
    generated_at: DateTime<Utc>,
    schema: String,
    players: usize,
    drills: Vec<DrillSummary>,
}

pub(crate) fn run(arg: &DrillStatsArg) -> anyhow::Result<()> {
    let schema = arg.schema.load()?;
    let players = util::read_players_file(&arg.players)?;
    info!(schema = %schema.id, players = players.len(), "Summarizing drills");

    let drills = drill_stats::drill_statistics(&players, &schema.drills, arg.top)
        .context("Failed to summarize drills")?;
    for summary in &drills {
        info!(
            drill = %summary.key,
            count = summary.count,
            missing = summary.missing,
            mean = ?summary.mean
        );
    }

    let report = DrillStatsReport {
        generated_at: Utc::now(),
        schema: schema.id,
        players: players.len(),
        drills,
    };
    Output::save_json(&report, arg.output.clone())?;
    Ok(())
}
