use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use tryout_scoring::{player::Player, registry, schema::SportSchema, weights::WeightMap};

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read a JSON array of players
pub fn read_players_file<P>(path: P) -> anyhow::Result<Vec<Player>>
where
    P: AsRef<Path>,
{
    read_json_file("players", path)
}

/// Read a JSON object mapping drill keys to weights
///
/// With `percent`, values are percentages (0–100) and are converted to
/// fractions.
pub fn read_weights_file<P>(path: P, percent: bool) -> anyhow::Result<WeightMap>
where
    P: AsRef<Path>,
{
    let weights: WeightMap = read_json_file("weights", path)?;
    if percent {
        Ok(WeightMap::from_percentages(
            weights.iter().map(|(k, w)| (k.clone(), *w)),
        ))
    } else {
        Ok(weights)
    }
}

/// Where the drill set comes from: a built-in sport or a schema JSON file.
#[derive(Debug, Clone, clap::Args)]
#[group(required = true, multiple = false)]
pub(crate) struct SchemaArg {
    /// Built-in sport schema id or sport name (see `tryout schemas`)
    #[arg(long)]
    sport: Option<String>,
    /// Custom sport schema JSON file
    #[arg(long)]
    schema: Option<PathBuf>,
}

impl SchemaArg {
    pub(crate) fn load(&self) -> anyhow::Result<SportSchema> {
        match (&self.sport, &self.schema) {
            (Some(sport), _) => registry::lookup(sport).with_context(|| {
                format!(
                    "Unknown sport: {sport} (available: {})",
                    registry::BUILTIN_IDS.join(", ")
                )
            }),
            (None, Some(path)) => read_json_file("schema", path),
            (None, None) => anyhow::bail!("Either --sport or --schema is required"),
        }
    }
}
