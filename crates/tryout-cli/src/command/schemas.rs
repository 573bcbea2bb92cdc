use anyhow::Context as _;
use serde::Serialize;
use tryout_scoring::registry;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SchemasArg {
    /// Print the full schema for this sport instead of the list
    #[arg(long)]
    sport: Option<String>,
}

#[derive(Debug, Serialize)]
struct SchemaListing {
    id: String,
    sport: String,
    name: String,
    drills: usize,
    categories: Vec<String>,
    presets: Vec<String>,
}

pub(crate) fn run(arg: &SchemasArg) -> anyhow::Result<()> {
    if let Some(sport) = &arg.sport {
        let schema = registry::lookup(sport).with_context(|| {
            format!(
                "Unknown sport: {sport} (available: {})",
                registry::BUILTIN_IDS.join(", ")
            )
        })?;
        return Output::save_json(&schema, None);
    }

    let listing = registry::builtin_schemas()
        .iter()
        .map(|schema| SchemaListing {
            id: schema.id.clone(),
            sport: schema.sport.clone(),
            name: schema.name.clone(),
            drills: schema.drills.len(),
            categories: schema.categories().into_iter().map(str::to_owned).collect(),
            presets: schema.presets.iter().map(|p| p.id.clone()).collect(),
        })
        .collect::<Vec<_>>();
    Output::save_json(&listing, None)
}
