//! Yearly compensation and engagement refresh for surviving employees.
//!
//! For each survivor, in draw order:
//!
//! 1. performance rating from the weighted rating table
//! 2. salary growth, linear in the rating, compounded and rounded to cents
//! 3. job title, re-resolved against the new salary
//! 4. engagement, satisfaction and absence count, redrawn (never carried)
//! 5. bonus, a step function of the rating in months of the new salary
//!
//! Age and tenure are recomputed for the year and termination fields are
//! cleared unconditionally.

use std::collections::BTreeMap;

use rand::Rng;
use rust_decimal::Decimal;
use workforce_types::{EmployeeSnapshot, EmploymentStatus};

use crate::calendar;
use crate::config::CompensationConfig;
use crate::error::PolicyError;
use crate::sampler::{IntRange, WeightedTable};
use crate::titles::JobTitleResolver;

const MONTHS_PER_YEAR: u32 = 12;

/// Computes rating, salary, bonus and engagement updates.
#[derive(Debug, Clone)]
pub struct CompensationEngine {
    ratings: WeightedTable<u8>,
    min_rating: u8,
    base_growth: Decimal,
    growth_per_rating: Decimal,
    bonus_months: BTreeMap<u8, u32>,
    engagement: IntRange<u8>,
    satisfaction: IntRange<u8>,
    absence_count: IntRange<u32>,
}

impl CompensationEngine {
    /// Build the engine from its configuration section.
    pub fn new(config: &CompensationConfig) -> Result<Self, PolicyError> {
        let ratings = WeightedTable::new(config.ratings.iter().map(|r| (r.rating, r.weight)))
            .map_err(|source| PolicyError::Sampler {
                context: "performance ratings",
                source,
            })?;
        let min_rating = config
            .min_rating()
            .ok_or(PolicyError::EmptyPool("performance ratings"))?;
        Ok(Self {
            ratings,
            min_rating,
            base_growth: config.base_growth,
            growth_per_rating: config.growth_per_rating,
            bonus_months: config.bonus_months.clone(),
            engagement: config.engagement,
            satisfaction: config.satisfaction,
            absence_count: config.absence_count,
        })
    }

    /// Draw a performance rating.
    pub fn draw_rating<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<u8, PolicyError> {
        self.ratings.sample(rng).copied()
    }

    /// Salary growth fraction for `rating`.
    ///
    /// `base_growth + (rating - min_rating) * growth_per_rating`; ratings
    /// below the scale earn the base growth.
    pub fn salary_growth(&self, rating: u8) -> Result<Decimal, PolicyError> {
        let steps = Decimal::from(rating.saturating_sub(self.min_rating));
        steps
            .checked_mul(self.growth_per_rating)
            .and_then(|extra| extra.checked_add(self.base_growth))
            .ok_or(PolicyError::Overflow("salary growth"))
    }

    /// Salary after one year of growth at `rating`, rounded to cents.
    pub fn grow_salary(&self, salary: Decimal, rating: u8) -> Result<Decimal, PolicyError> {
        let factor = self
            .salary_growth(rating)?
            .checked_add(Decimal::ONE)
            .ok_or(PolicyError::Overflow("salary growth"))?;
        salary
            .checked_mul(factor)
            .map(|s| s.round_dp(2))
            .ok_or(PolicyError::Overflow("salary"))
    }

    /// Months of salary paid as bonus at `rating`. Unmapped ratings earn
    /// nothing.
    pub fn bonus_months(&self, rating: u8) -> u32 {
        self.bonus_months.get(&rating).copied().unwrap_or(0)
    }

    /// Bonus for `salary` at `rating`, rounded to cents.
    pub fn bonus(&self, salary: Decimal, rating: u8) -> Result<Decimal, PolicyError> {
        salary
            .checked_div(Decimal::from(MONTHS_PER_YEAR))
            .and_then(|monthly| monthly.checked_mul(Decimal::from(self.bonus_months(rating))))
            .map(|b| b.round_dp(2))
            .ok_or(PolicyError::Overflow("bonus"))
    }

    /// Produce the year-`year` snapshot of a surviving employee from their
    /// previous snapshot.
    pub fn update_survivor<R: Rng + ?Sized>(
        &self,
        previous: &EmployeeSnapshot,
        year: i32,
        titles: &JobTitleResolver,
        rng: &mut R,
    ) -> Result<EmployeeSnapshot, PolicyError> {
        let rating = self.draw_rating(rng)?;
        let salary = self.grow_salary(previous.salary, rating)?;

        let mut next = previous.clone();
        next.year = year;
        next.age = calendar::age_in(year, previous.birth_date)?;
        next.tenure_days = calendar::days_between(previous.hire_date, calendar::year_end(year)?);
        next.status = EmploymentStatus::Active;
        next.termination_date = None;
        next.exit_reason = None;
        next.salary = salary;
        next.performance_rating = Some(rating);
        next.job_title = titles.resolve(&next.department, salary, rng).title;
        next.employee_engagement = self.engagement.sample(rng);
        next.employee_satisfaction = self.satisfaction.sample(rng);
        next.absence_count = self.absence_count.sample(rng);
        next.bonus = Some(self.bonus(salary, rating)?);
        Ok(next)
    }
}
