//! Command-line arguments.
//!
//! Flags override the matching values from the YAML configuration; the
//! configuration file in turn overrides the built-in defaults.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use workforce_core::{OutputFormat, SimulationConfig};

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "workforce-config.yaml";

/// Synthetic multi-year employee history generator.
#[derive(Parser, Debug)]
#[command(name = "workforce-engine")]
#[command(about = "Generate a synthetic multi-year employee history dataset")]
pub struct Args {
    /// Path to the YAML configuration file (defaults apply if it is missing)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Output file (overrides output.path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (overrides output.format)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Random seed (overrides seed and WORKFORCE_SEED)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// First simulated year (overrides years.start)
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Last simulated year (overrides years.end)
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Verify the finished history and fail on any integrity violation
    #[arg(long)]
    pub verify: bool,
}

/// Output formats selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    /// Comma-separated values with a header row.
    Csv,
    /// One JSON object per line.
    Jsonl,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => Self::Csv,
            FormatArg::Jsonl => Self::Jsonl,
        }
    }
}

impl Args {
    /// Apply every flag that was given to `config`.
    pub fn apply(&self, config: &mut SimulationConfig) {
        if let Some(path) = &self.output {
            config.output.path.clone_from(path);
        }
        if let Some(format) = self.format {
            config.output.format = format.into();
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(start) = self.start_year {
            config.years.start = start;
        }
        if let Some(end) = self.end_year {
            config.years.end = end;
        }
    }
}
