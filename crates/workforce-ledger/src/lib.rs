//! Append-only employee history for the workforce history synthesizer.
//!
//! Every yearly snapshot the simulation produces is appended to the
//! [`HistoryStore`]. Snapshots are never modified or deleted; the store is
//! the engine's only persistent state and the source of every exported row.
//!
//! # Architecture
//!
//! - [`history`] -- The [`HistoryStore`]: per-employee ordered timelines
//!   plus a year index, with validation on every append.
//! - [`verify`] -- Whole-history integrity verification, independent of
//!   append-time checks.
//!
//! # Invariants enforced on append
//!
//! For every employee E:
//!
//! ```text
//! years(E) is contiguous, starting at E's first recorded year
//! no snapshot follows a Retired or VoluntaryAttrition snapshot
//! termination_date present  <=>  status != Active
//! exit_reason present       <=>  status == VoluntaryAttrition
//! ```
//!
//! A violation is returned as a [`HistoryError`]; the store never panics
//! and a rejected snapshot leaves the store unchanged.

pub mod history;
pub mod verify;

// Re-export primary types at crate root.
pub use history::HistoryStore;
pub use verify::{HistoryViolation, VerificationResult, verify_snapshots};

use workforce_types::EmployeeId;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when appending to the history.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    /// A snapshot for this employee and year already exists.
    #[error("duplicate snapshot for employee {employee_id} in {year}")]
    DuplicateSnapshot {
        /// The employee.
        employee_id: EmployeeId,
        /// The year that was already recorded.
        year: i32,
    },

    /// The snapshot's year does not directly follow the last recorded year.
    #[error("non-contiguous snapshot for employee {employee_id}: expected {expected}, got {actual}")]
    NonContiguousYear {
        /// The employee.
        employee_id: EmployeeId,
        /// The only year that may be appended next.
        expected: i32,
        /// The year that was offered.
        actual: i32,
    },

    /// The employee already reached a terminal status.
    #[error("employee {employee_id} exited in {exit_year}; cannot append {year}")]
    AppendAfterExit {
        /// The employee.
        employee_id: EmployeeId,
        /// Year of the terminal snapshot.
        exit_year: i32,
        /// The year that was offered.
        year: i32,
    },

    /// `termination_date` / `exit_reason` disagree with the status.
    #[error("termination fields inconsistent with status for employee {employee_id} in {year}")]
    InconsistentTermination {
        /// The employee.
        employee_id: EmployeeId,
        /// The offending year.
        year: i32,
    },
}
