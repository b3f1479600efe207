//! Whole-history integrity verification.
//!
//! The [`HistoryStore`](crate::HistoryStore) already rejects bad appends.
//! This module re-checks a finished history from scratch over any sequence
//! of snapshots ordered by `(employee_id, year)`, so exported or reloaded
//! data can be audited without trusting how it was built.
//!
//! Checks, per employee:
//!
//! - years are contiguous from the first recorded year
//! - nothing is recorded after a terminal status
//! - termination fields agree with the status
//! - no snapshot predates the hire year
//! - `age == year - birth_year`

use chrono::Datelike;
use workforce_types::{EmployeeId, EmployeeSnapshot};

/// One broken invariant found by [`verify_snapshots`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryViolation {
    /// Rows for one employee are out of order, duplicated, or skip a year.
    GapInYears {
        /// The employee.
        employee_id: EmployeeId,
        /// The previous recorded year.
        previous_year: i32,
        /// The year that followed it.
        year: i32,
    },
    /// A snapshot follows a Retired or VoluntaryAttrition snapshot.
    SnapshotAfterExit {
        /// The employee.
        employee_id: EmployeeId,
        /// Year of the terminal snapshot.
        exit_year: i32,
        /// The offending year.
        year: i32,
    },
    /// Termination date or exit reason disagree with the status.
    TerminationMismatch {
        /// The employee.
        employee_id: EmployeeId,
        /// The offending year.
        year: i32,
    },
    /// A snapshot exists for a year before the hire year.
    BeforeHire {
        /// The employee.
        employee_id: EmployeeId,
        /// The offending year.
        year: i32,
    },
    /// Recorded age is not `year - birth_year`.
    AgeMismatch {
        /// The employee.
        employee_id: EmployeeId,
        /// The offending year.
        year: i32,
        /// Age found in the snapshot.
        recorded: u32,
    },
}

impl core::fmt::Display for HistoryViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GapInYears {
                employee_id,
                previous_year,
                year,
            } => write!(f, "employee {employee_id}: {previous_year} followed by {year}"),
            Self::SnapshotAfterExit {
                employee_id,
                exit_year,
                year,
            } => write!(f, "employee {employee_id}: record for {year} after exit in {exit_year}"),
            Self::TerminationMismatch { employee_id, year } => {
                write!(f, "employee {employee_id}: termination fields disagree with status in {year}")
            }
            Self::BeforeHire { employee_id, year } => {
                write!(f, "employee {employee_id}: record for {year} precedes hire")
            }
            Self::AgeMismatch {
                employee_id,
                year,
                recorded,
            } => write!(f, "employee {employee_id}: age {recorded} is wrong for {year}"),
        }
    }
}

/// Outcome of a verification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    /// Every invariant holds.
    Clean,
    /// One or more invariants are broken.
    Violations(Vec<HistoryViolation>),
}

impl VerificationResult {
    /// Whether no violation was found.
    pub const fn is_clean(&self) -> bool {
        matches!(self, Self::Clean)
    }
}

/// Verify snapshots ordered by `(employee_id, year)`.
pub fn verify_snapshots<'a, I>(rows: I) -> VerificationResult
where
    I: IntoIterator<Item = &'a EmployeeSnapshot>,
{
    let mut violations = Vec::new();
    let mut previous: Option<&EmployeeSnapshot> = None;

    for row in rows {
        let employee_id = row.employee_id;
        let year = row.year;

        if let Some(prev) = previous.filter(|p| p.employee_id == employee_id) {
            if prev.status.is_terminal() {
                violations.push(HistoryViolation::SnapshotAfterExit {
                    employee_id,
                    exit_year: prev.year,
                    year,
                });
            } else if prev.year.checked_add(1) != Some(year) {
                violations.push(HistoryViolation::GapInYears {
                    employee_id,
                    previous_year: prev.year,
                    year,
                });
            }
        }

        if !row.termination_fields_consistent() {
            violations.push(HistoryViolation::TerminationMismatch { employee_id, year });
        }

        if year < row.hire_date.year() {
            violations.push(HistoryViolation::BeforeHire { employee_id, year });
        }

        let expected_age = year
            .checked_sub(row.birth_date.year())
            .and_then(|a| u32::try_from(a).ok());
        if expected_age != Some(row.age) {
            violations.push(HistoryViolation::AgeMismatch {
                employee_id,
                year,
                recorded: row.age,
            });
        }

        previous = Some(row);
    }

    if violations.is_empty() {
        VerificationResult::Clean
    } else {
        VerificationResult::Violations(violations)
    }
}
