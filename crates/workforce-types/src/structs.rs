//! Core record types: the yearly employee snapshot and generated names.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{EmploymentStatus, Gender, MaritalStatus};
use crate::ids::EmployeeId;

/// A generated personal name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonName {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// One employee's full recorded state for one simulated year.
///
/// Snapshots are immutable once appended to the history. A new year's
/// snapshot is produced by cloning the previous one and applying exactly
/// one policy outcome (retire, leave, or continue with a compensation
/// update).
///
/// Field order matches the column order of the exported dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSnapshot {
    /// Simulated year this snapshot describes.
    pub year: i32,
    /// Stable identifier, assigned once at hire.
    pub employee_id: EmployeeId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Recorded gender.
    pub gender: Gender,
    /// Marital status at hire.
    pub marital_status: MaritalStatus,
    /// Country of citizenship (usually the employing country).
    pub citizenship_country: String,
    /// Channel the employee was recruited through.
    pub recruitment_source: String,
    /// Employing country.
    pub country: String,
    /// Office city within the employing country.
    pub city: String,
    /// Department name.
    pub department: String,
    /// Title derived from department and current salary.
    pub job_title: String,
    /// Date of hire.
    pub hire_date: NaiveDate,
    /// Date of birth, fixed at creation.
    pub birth_date: NaiveDate,
    /// `year - birth_year`.
    pub age: u32,
    /// Employment state for this year.
    pub status: EmploymentStatus,
    /// Set iff `status` is not `Active`.
    pub termination_date: Option<NaiveDate>,
    /// Set iff `status` is `VoluntaryAttrition`.
    pub exit_reason: Option<String>,
    /// Days from hire to year end, or to termination for exit records.
    pub tenure_days: i64,
    /// Annual salary, two decimal places.
    pub salary: Decimal,
    /// Annual bonus; absent in the hire year and on exit records.
    pub bonus: Option<Decimal>,
    /// Performance rating; absent in the hire year and on exit records.
    pub performance_rating: Option<u8>,
    /// Engagement score on a 1--5 scale.
    pub employee_engagement: u8,
    /// Satisfaction score on a 1--5 scale.
    pub employee_satisfaction: u8,
    /// Days absent this year.
    pub absence_count: u32,
}

impl EmployeeSnapshot {
    /// Whether the employee is still employed in this snapshot's year.
    pub fn is_active(&self) -> bool {
        self.status == EmploymentStatus::Active
    }

    /// Calendar year of birth.
    pub fn birth_year(&self) -> i32 {
        self.birth_date.year()
    }

    /// Whether the termination fields agree with the status.
    ///
    /// `termination_date` must be present iff the status is terminal, and
    /// `exit_reason` must be present iff the status is `VoluntaryAttrition`.
    pub fn termination_fields_consistent(&self) -> bool {
        let terminal = self.status.is_terminal();
        let left = self.status == EmploymentStatus::VoluntaryAttrition;
        self.termination_date.is_some() == terminal && self.exit_reason.is_some() == left
    }
}

/// Population movement for one country in one simulated year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryYearSummary {
    /// Simulated year.
    pub year: i32,
    /// Employing country.
    pub country: String,
    /// Active employees at the end of the year, new hires included.
    pub active: u32,
    /// Employees who retired this year.
    pub retired: u32,
    /// Employees who left voluntarily this year.
    pub voluntary_attrition: u32,
    /// Employees hired this year.
    pub new_hires: u32,
}

impl CountryYearSummary {
    /// Empty summary for `country` in `year`.
    pub fn new(year: i32, country: &str) -> Self {
        Self {
            year,
            country: country.to_owned(),
            ..Self::default()
        }
    }

    /// Retirements plus voluntary leavers.
    pub const fn departures(&self) -> u32 {
        self.retired.saturating_add(self.voluntary_attrition)
    }
}
