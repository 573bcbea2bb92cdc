use clap::{Parser, Subcommand};

use self::{
    drill_stats::DrillStatsArg, form_teams::FormTeamsArg, rank::RankArg, schemas::SchemasArg,
};

mod drill_stats;
mod form_teams;
mod rank;
mod schemas;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Rank players by weighted composite score
    Rank(#[clap(flatten)] RankArg),
    /// Split players into skill-balanced teams
    FormTeams(#[clap(flatten)] FormTeamsArg),
    /// Summarize raw results per drill
    DrillStats(#[clap(flatten)] DrillStatsArg),
    /// List built-in sport schemas, or print one
    Schemas(#[clap(flatten)] SchemasArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Rank(arg) => rank::run(&arg)?,
        Mode::FormTeams(arg) => form_teams::run(&arg)?,
        Mode::DrillStats(arg) => drill_stats::run(&arg)?,
        Mode::Schemas(arg) => schemas::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_sport_and_schema_are_exclusive() {
        let err = CommandArgs::try_parse_from([
            "tryout", "rank", "--players", "p.json", "--sport", "soccer", "--schema", "s.json",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        let err = CommandArgs::try_parse_from(["tryout", "rank", "--players", "p.json"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_form_teams_defaults() {
        let args = CommandArgs::try_parse_from([
            "tryout", "form-teams", "--players", "p.json", "--sport", "soccer", "--teams", "3",
        ])
        .unwrap();
        let Mode::FormTeams(arg) = args.mode else {
            panic!("expected form-teams");
        };
        let params = arg.params();
        assert_eq!(params.num_teams, 3);
        assert_eq!(params.iterations, tryout_teams::optimizer::DEFAULT_ITERATIONS);
    }
}
