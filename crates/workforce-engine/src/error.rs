//! Error types for the generator binary.
//!
//! [`EngineError`] wraps every failure mode between reading the
//! configuration and flushing the last exported row.

use workforce_core::{ConfigError, SimulationError};

/// Top-level error for the generator binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can attach context to.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The simulation rejected its configuration or failed mid-run.
    #[error("simulation error: {source}")]
    Simulation {
        /// The underlying simulation error.
        #[from]
        source: SimulationError,
    },

    /// Writing the dataset failed.
    #[error("export error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// A snapshot could not be encoded as JSON.
    #[error("JSON encoding error: {source}")]
    Json {
        /// The underlying serializer error.
        #[from]
        source: serde_json::Error,
    },

    /// The finished history failed integrity verification.
    #[error("history verification found {violations} violation(s)")]
    Verification {
        /// Number of broken invariants.
        violations: usize,
    },
}
