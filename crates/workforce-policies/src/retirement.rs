//! Retirement rule.
//!
//! Deterministic: a cohort member whose age in year `Y`, counted as
//! `Y - birth_year`, has reached the retirement age retires on January 1
//! of `Y`. No random draw is consumed, and a retiree is never considered
//! for voluntary attrition in the same year.

use chrono::Datelike;
use workforce_types::EmployeeSnapshot;

use crate::config::RetirementConfig;
use crate::error::PolicyError;
use crate::exit::Departure;

/// Flags cohort members who have reached retirement age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetirementPolicy {
    age: u32,
}

impl RetirementPolicy {
    /// Build the policy from its configuration section.
    pub const fn new(config: &RetirementConfig) -> Self {
        Self { age: config.age }
    }

    /// Retirement age.
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Whether `employee` retires in `year`.
    pub fn is_due(&self, employee: &EmployeeSnapshot, year: i32) -> bool {
        year.checked_sub(employee.birth_date.year())
            .and_then(|age| u32::try_from(age).ok())
            .is_some_and(|age| age >= self.age)
    }

    /// The retirement departure for `employee` in `year`, if due.
    pub fn evaluate(
        &self,
        employee: &EmployeeSnapshot,
        year: i32,
    ) -> Result<Option<Departure>, PolicyError> {
        if self.is_due(employee, year) {
            Departure::retirement(year).map(Some)
        } else {
            Ok(None)
        }
    }
}
