//! Configuration, year loop, and run summaries for the workforce history
//! synthesizer.
//!
//! This crate wires the policies from `workforce-policies` into a
//! sequential year-by-year simulation whose only persistent state is the
//! `workforce-ledger` history.
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration loading and validation ([`SimulationConfig`])
//! - [`context`] -- Seeded random stream and id sequence ([`SimulationContext`])
//! - [`simulator`] -- The year loop ([`LifecycleSimulator`])
//! - [`summary`] -- Run-level report ([`SimulationReport`])

pub mod config;
pub mod context;
pub mod simulator;
pub mod summary;

// Re-export primary types at crate root for convenience.
pub use config::{ConfigError, LoggingConfig, OutputConfig, OutputFormat, SimulationConfig, YearRange};
pub use context::SimulationContext;
pub use simulator::{LifecycleSimulator, NoOpCallback, SimulationError, SimulationOutcome, YearCallback};
pub use summary::SimulationReport;
