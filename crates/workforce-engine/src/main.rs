//! Command-line generator for the synthetic workforce history dataset.
//!
//! This is the main entry point that wires together configuration, the
//! year-by-year lifecycle simulation, optional integrity verification,
//! and dataset export.
//!
//! # Startup Sequence
//!
//! 1. Parse command-line arguments
//! 2. Load configuration from `workforce-config.yaml` (or the `--config` path)
//! 3. Apply command-line overrides
//! 4. Initialize structured logging (tracing)
//! 5. Validate the configuration and build the simulator
//! 6. Run every simulated year
//! 7. Verify the history (with `--verify`)
//! 8. Export the dataset and log the run summary

mod cli;
mod error;
mod export;
mod progress;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use workforce_core::{LifecycleSimulator, LoggingConfig, SimulationConfig};
use workforce_ledger::{HistoryStore, VerificationResult};

use crate::cli::Args;
use crate::error::EngineError;
use crate::progress::ProgressCallback;

/// Application entry point for the generator.
///
/// # Errors
///
/// Returns an error if configuration, simulation, verification, or
/// export fails. Nothing is written unless the run succeeds.
fn main() -> anyhow::Result<()> {
    // 1. Parse arguments.
    let args = Args::parse();

    // 2. Load configuration.
    let config_found = args.config.exists();
    let mut config = load_config(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config.display()))?;

    // 3. Apply command-line overrides.
    args.apply(&mut config);

    // 4. Initialize structured logging.
    init_tracing(&config.logging);
    info!("workforce-engine starting");
    if config_found {
        info!(path = %args.config.display(), "Configuration loaded");
    } else {
        info!(path = %args.config.display(), "Config file not found, using defaults");
    }
    info!(
        seed = config.seed,
        first_year = config.years.start,
        last_year = config.years.end,
        countries = config.countries.len(),
        output = %config.output.path.display(),
        format = %config.output.format,
        "Configuration resolved"
    );

    let output = config.output.clone();

    // 5. Build the simulator; this validates the configuration.
    let simulator = LifecycleSimulator::new(config)
        .map_err(EngineError::from)
        .context("invalid simulation configuration")?;

    // 6. Run the simulation.
    let mut progress = ProgressCallback::new();
    let outcome = simulator
        .run(&mut progress)
        .map_err(EngineError::from)
        .context("simulation failed")?;
    info!(years = progress.years_done(), "Simulation loop finished");

    // 7. Verify the history.
    if args.verify {
        verify_history(&outcome.history).context("history failed verification")?;
    }

    // 8. Export and summarize.
    let written = export::export_to_path(&output.path, output.format, outcome.history.rows())
        .with_context(|| format!("writing dataset to {}", output.path.display()))?;
    info!(
        rows = written,
        path = %output.path.display(),
        format = %output.format,
        "Dataset written"
    );

    outcome.report.log();
    info!(run_id = %outcome.report.run_id, "workforce-engine shutdown complete");

    Ok(())
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Load the simulation configuration from `path`.
///
/// A missing file is not an error: the defaults are used, with
/// environment overrides still applied.
fn load_config(path: &Path) -> Result<SimulationConfig, EngineError> {
    if path.exists() {
        Ok(SimulationConfig::from_file(path)?)
    } else {
        let mut config = SimulationConfig::default();
        config.apply_env_overrides()?;
        Ok(config)
    }
}

/// Re-check the finished history and log every violation found.
fn verify_history(history: &HistoryStore) -> Result<(), EngineError> {
    match history.verify() {
        VerificationResult::Clean => {
            info!(rows = history.len(), "History verified");
            Ok(())
        }
        VerificationResult::Violations(violations) => {
            for violation in &violations {
                error!(%violation, "History integrity violation");
            }
            Err(EngineError::Verification {
                violations: violations.len(),
            })
        }
    }
}
