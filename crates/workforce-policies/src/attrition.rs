//! Voluntary attrition rule.
//!
//! Independent per employee per year. Draw order for each evaluated
//! employee:
//!
//! 1. the employee's leaving probability, uniform in the configured range
//! 2. a uniform value in `[0, 1)`; no trigger below the probability ends here
//! 3. if triggered and the tenure at January 1 lies in the eligibility
//!    window: a termination day within the year, then a weighted reason
//!
//! A trigger outside the tenure window leaves the employee in place and
//! consumes no further draws.

use rand::Rng;
use workforce_types::EmployeeSnapshot;

use crate::calendar::{self, MAX_DAY_OFFSET};
use crate::config::{AttritionConfig, label_table};
use crate::error::PolicyError;
use crate::exit::Departure;
use crate::sampler::{IntRange, RateRange, WeightedTable};

/// Decides which cohort members leave voluntarily.
#[derive(Debug, Clone)]
pub struct AttritionPolicy {
    probability: RateRange,
    tenure_window_days: IntRange<i64>,
    reasons: WeightedTable<String>,
}

impl AttritionPolicy {
    /// Build the policy from its configuration section.
    pub fn new(config: &AttritionConfig) -> Result<Self, PolicyError> {
        Ok(Self {
            probability: config.probability,
            tenure_window_days: config.tenure_window_days,
            reasons: label_table(&config.exit_reasons, "exit reasons")?,
        })
    }

    /// Whether a tenure of `days` at January 1 is eligible for attrition.
    pub fn eligible(&self, days: i64) -> bool {
        self.tenure_window_days.contains(days)
    }

    /// Evaluate one employee for `year`.
    pub fn evaluate<R: Rng + ?Sized>(
        &self,
        employee: &EmployeeSnapshot,
        year: i32,
        rng: &mut R,
    ) -> Result<Option<Departure>, PolicyError> {
        let probability = self.probability.sample(rng);
        if rng.random::<f64>() >= probability {
            return Ok(None);
        }

        let tenure = calendar::days_between(employee.hire_date, calendar::year_start(year)?);
        if !self.eligible(tenure) {
            return Ok(None);
        }

        let termination_date = calendar::day_in_year(year, rng.random_range(0..=MAX_DAY_OFFSET))?;
        let reason = self.reasons.sample(rng)?.clone();
        Ok(Some(Departure::voluntary(termination_date, reason)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Datelike, NaiveDate};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rust_decimal_macros::dec;
    use workforce_types::{EmployeeId, EmploymentStatus, Gender, MaritalStatus};

    use super::*;
    use crate::config::WeightedLabel;

    fn hired(hire_date: NaiveDate) -> EmployeeSnapshot {
        EmployeeSnapshot {
            year: 2021,
            employee_id: EmployeeId::new(44),
            first_name: "Priya".to_owned(),
            last_name: "Iyer".to_owned(),
            gender: Gender::Female,
            marital_status: MaritalStatus::Single,
            citizenship_country: "India".to_owned(),
            recruitment_source: "University Partner".to_owned(),
            country: "India".to_owned(),
            city: "Mumbai".to_owned(),
            department: "Marketing".to_owned(),
            job_title: "Brand Strategist".to_owned(),
            hire_date,
            birth_date: NaiveDate::from_ymd_opt(1995, 8, 1).unwrap(),
            age: 26,
            status: EmploymentStatus::Active,
            termination_date: None,
            exit_reason: None,
            tenure_days: 300,
            salary: dec!(90000),
            bonus: None,
            performance_rating: None,
            employee_engagement: 5,
            employee_satisfaction: 4,
            absence_count: 1,
        }
    }

    fn certain() -> AttritionPolicy {
        AttritionPolicy::new(&AttritionConfig {
            probability: RateRange::new(1.0, 1.0),
            ..AttritionConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn certain_attrition_leaves_within_the_year() {
        let policy = certain();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let employee = hired(NaiveDate::from_ymd_opt(2019, 5, 1).unwrap());
        for _ in 0..100 {
            let departure = policy.evaluate(&employee, 2022, &mut rng).unwrap().unwrap();
            assert_eq!(departure.status, EmploymentStatus::VoluntaryAttrition);
            assert_eq!(departure.termination_date.year(), 2022);
            assert!(departure.exit_reason.is_some());
        }
    }

    #[test]
    fn zero_probability_never_triggers() {
        let policy = AttritionPolicy::new(&AttritionConfig {
            probability: RateRange::new(0.0, 0.0),
            ..AttritionConfig::default()
        })
        .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let employee = hired(NaiveDate::from_ymd_opt(2019, 5, 1).unwrap());
        for _ in 0..500 {
            assert_eq!(policy.evaluate(&employee, 2022, &mut rng).unwrap(), None);
        }
    }

    #[test]
    fn tenure_window_bounds() {
        let policy = certain();
        assert!(!policy.eligible(14));
        assert!(policy.eligible(15));
        assert!(policy.eligible(9125));
        assert!(!policy.eligible(9126));
    }

    #[test]
    fn short_tenure_is_not_eligible() {
        let policy = certain();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        // Hired December 25, evaluated for the next year: 7 days of tenure.
        let employee = hired(NaiveDate::from_ymd_opt(2021, 12, 25).unwrap());
        assert_eq!(policy.evaluate(&employee, 2022, &mut rng).unwrap(), None);
    }

    #[test]
    fn single_reason_is_always_recorded() {
        let policy = AttritionPolicy::new(&AttritionConfig {
            probability: RateRange::new(1.0, 1.0),
            exit_reasons: vec![WeightedLabel::new("Relocation/Migration", 1.0)],
            ..AttritionConfig::default()
        })
        .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let employee = hired(NaiveDate::from_ymd_opt(2018, 1, 10).unwrap());
        let departure = policy.evaluate(&employee, 2020, &mut rng).unwrap().unwrap();
        assert_eq!(departure.exit_reason.as_deref(), Some("Relocation/Migration"));
    }
}
