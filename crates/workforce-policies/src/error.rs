//! Error types for the workforce-policies crate.
//!
//! Policies never fail under a validated configuration. These errors cover
//! configuration that slipped past validation, calendar arithmetic that
//! leaves chrono's supported range, money overflow and identifier
//! exhaustion.

/// Errors raised while building a sampling table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SamplerError {
    /// The table has no entries.
    #[error("weighted table is empty")]
    Empty,

    /// A weight is negative, NaN, or infinite.
    #[error("invalid weight {weight} at position {index}")]
    InvalidWeight {
        /// Position of the offending entry.
        index: usize,
        /// The offending weight.
        weight: f64,
    },

    /// Every weight is zero.
    #[error("weights sum to zero")]
    ZeroTotal,
}

/// Errors that can occur while applying a lifecycle policy.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolicyError {
    /// A configuration section failed validation.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong.
        reason: String,
    },

    /// A sampling table could not be built.
    #[error("sampler error in {context}: {source}")]
    Sampler {
        /// Which table was being built.
        context: &'static str,
        /// The underlying sampler error.
        source: SamplerError,
    },

    /// A date fell outside the supported calendar.
    #[error("calendar error: {context}")]
    Calendar {
        /// Description of the failed computation.
        context: String,
    },

    /// Money arithmetic left the representable range.
    #[error("arithmetic overflow computing {0}")]
    Overflow(&'static str),

    /// The employee id sequence cannot advance further.
    #[error("employee id sequence exhausted")]
    SequenceExhausted,

    /// A draw was requested from an empty pool.
    #[error("nothing to choose from: {0}")]
    EmptyPool(&'static str),
}

impl PolicyError {
    /// Shorthand for [`PolicyError::InvalidConfig`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
