//! Enumeration types for the workforce history synthesizer.
//!
//! Display strings are the exact labels written to the output dataset.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Employment status
// ---------------------------------------------------------------------------

/// An employee's employment state in one simulated year.
///
/// `Retired` and `VoluntaryAttrition` are absorbing: once an employee
/// reaches either, no further yearly snapshots are produced for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmploymentStatus {
    /// Currently employed.
    Active,
    /// Left on reaching the retirement age.
    Retired,
    /// Left voluntarily (or was let go) before retirement.
    #[serde(rename = "Voluntary Attrition")]
    VoluntaryAttrition,
}

impl EmploymentStatus {
    /// Whether this status ends the employee's record.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Retired | Self::VoluntaryAttrition)
    }
}

impl core::fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Retired => write!(f, "Retired"),
            Self::VoluntaryAttrition => write!(f, "Voluntary Attrition"),
        }
    }
}

// ---------------------------------------------------------------------------
// Demographics
// ---------------------------------------------------------------------------

/// Gender as recorded in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Recorded as `M`.
    #[serde(rename = "M")]
    Male,
    /// Recorded as `F`.
    #[serde(rename = "F")]
    Female,
}

impl core::fmt::Display for Gender {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Male => write!(f, "M"),
            Self::Female => write!(f, "F"),
        }
    }
}

/// Marital status, drawn uniformly at hire time and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaritalStatus {
    /// Never married.
    Single,
    /// Currently married.
    Married,
    /// Divorced.
    Divorced,
    /// Widowed.
    Widowed,
}

impl MaritalStatus {
    /// Every variant, in draw order.
    pub const ALL: [Self; 4] = [Self::Single, Self::Married, Self::Divorced, Self::Widowed];
}

impl core::fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Single => write!(f, "Single"),
            Self::Married => write!(f, "Married"),
            Self::Divorced => write!(f, "Divorced"),
            Self::Widowed => write!(f, "Widowed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Salary tiers
// ---------------------------------------------------------------------------

/// Salary band classification driving job-title assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SalaryTier {
    /// Entry-level band.
    Junior,
    /// Middle band.
    Mid,
    /// Top band.
    Senior,
}

impl SalaryTier {
    /// Every tier, lowest band first.
    pub const ALL: [Self; 3] = [Self::Junior, Self::Mid, Self::Senior];
}

impl core::fmt::Display for SalaryTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Junior => write!(f, "Junior"),
            Self::Mid => write!(f, "Mid"),
            Self::Senior => write!(f, "Senior"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exits_are_terminal() {
        assert!(!EmploymentStatus::Active.is_terminal());
        assert!(EmploymentStatus::Retired.is_terminal());
        assert!(EmploymentStatus::VoluntaryAttrition.is_terminal());
    }

    #[test]
    fn status_labels_match_dataset() {
        assert_eq!(EmploymentStatus::VoluntaryAttrition.to_string(), "Voluntary Attrition");
        let json = serde_json::to_string(&EmploymentStatus::VoluntaryAttrition).ok();
        assert_eq!(json.as_deref(), Some("\"Voluntary Attrition\""));
    }

    #[test]
    fn gender_serializes_as_letter() {
        assert_eq!(Gender::Female.to_string(), "F");
        let json = serde_json::to_string(&Gender::Male).ok();
        assert_eq!(json.as_deref(), Some("\"M\""));
    }

    #[test]
    fn tiers_are_ordered_low_to_high() {
        assert!(SalaryTier::Junior < SalaryTier::Mid);
        assert!(SalaryTier::Mid < SalaryTier::Senior);
    }
}
