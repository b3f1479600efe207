//! Exit records for retirees and voluntary leavers.
//!
//! An exit snapshot copies the previous year's record and changes only
//! what the exit itself determines: status, termination date, exit reason,
//! age, and tenure (counted to the termination date). No compensation
//! update happens in the exit year, so rating and bonus are absent.

use chrono::NaiveDate;
use workforce_types::{EmployeeSnapshot, EmploymentStatus};

use crate::calendar;
use crate::error::PolicyError;

/// How and when an employee leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Terminal status.
    pub status: EmploymentStatus,
    /// Last day of employment.
    pub termination_date: NaiveDate,
    /// Reason, recorded for voluntary leavers only.
    pub exit_reason: Option<String>,
}

impl Departure {
    /// Retirement effective January 1 of `year`.
    pub fn retirement(year: i32) -> Result<Self, PolicyError> {
        Ok(Self {
            status: EmploymentStatus::Retired,
            termination_date: calendar::year_start(year)?,
            exit_reason: None,
        })
    }

    /// Voluntary attrition on `termination_date` for `reason`.
    pub const fn voluntary(termination_date: NaiveDate, reason: String) -> Self {
        Self {
            status: EmploymentStatus::VoluntaryAttrition,
            termination_date,
            exit_reason: Some(reason),
        }
    }

    /// Build the terminal snapshot for `year` from the previous record.
    pub fn apply(
        &self,
        previous: &EmployeeSnapshot,
        year: i32,
    ) -> Result<EmployeeSnapshot, PolicyError> {
        let mut exit = previous.clone();
        exit.year = year;
        exit.age = calendar::age_in(year, previous.birth_date)?;
        exit.status = self.status;
        exit.termination_date = Some(self.termination_date);
        exit.exit_reason.clone_from(&self.exit_reason);
        exit.tenure_days = calendar::days_between(previous.hire_date, self.termination_date);
        exit.bonus = None;
        exit.performance_rating = None;
        Ok(exit)
    }
}
