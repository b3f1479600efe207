//! Backfill-plus-growth hiring.
//!
//! Every departure is replaced one for one, and on top of that the
//! surviving headcount grows by a yearly rate:
//!
//! ```text
//! hires = floor(survivors * growth_rate) + departures
//! ```
//!
//! The growth rate is drawn uniformly each year, except in the configured
//! shock year, which uses a fixed rate and consumes no draw.

use rand::Rng;
use tracing::debug;
use workforce_types::EmployeeSnapshot;

use crate::calendar::{self, MAX_DAY_OFFSET};
use crate::config::{CountryConfig, GrowthShock, HiringConfig};
use crate::error::PolicyError;
use crate::factory::{EmployeeFactory, Placement};
use crate::sampler::RateRange;
use crate::sequence::EmployeeIdSequence;

/// Sizes and creates each year's new hires for a country.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HiringPolicy {
    growth_rate: RateRange,
    shock: Option<GrowthShock>,
}

impl HiringPolicy {
    /// Build the policy from its configuration section.
    pub const fn new(config: &HiringConfig) -> Self {
        Self {
            growth_rate: config.growth_rate,
            shock: config.shock,
        }
    }

    /// Growth rate for `year`.
    pub fn growth_rate<R: Rng + ?Sized>(&self, year: i32, rng: &mut R) -> f64 {
        match self.shock {
            Some(shock) if shock.year == year => shock.rate,
            _ => self.growth_rate.sample(rng),
        }
    }

    /// `floor(survivors * rate) + departures`.
    pub fn hire_count(survivors: u32, rate: f64, departures: u32) -> u32 {
        let growth = (f64::from(survivors) * rate).floor().max(0.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let growth = growth.min(f64::from(u32::MAX)) as u32;
        growth.saturating_add(departures)
    }

    /// Draw the growth rate for `year` and size the hiring round.
    pub fn plan<R: Rng + ?Sized>(
        &self,
        year: i32,
        survivors: u32,
        departures: u32,
        rng: &mut R,
    ) -> u32 {
        let rate = self.growth_rate(year, rng);
        let count = Self::hire_count(survivors, rate, departures);
        debug!(year, survivors, departures, rate, count, "Hiring round sized");
        count
    }

    /// Create `count` employees hired within `year`.
    pub fn hire<R: Rng>(
        &self,
        factory: &EmployeeFactory,
        country: &CountryConfig,
        year: i32,
        count: u32,
        sequence: &mut EmployeeIdSequence,
        rng: &mut R,
    ) -> Result<Vec<EmployeeSnapshot>, PolicyError> {
        let mut hires = Vec::with_capacity(usize::try_from(count).unwrap_or(0));
        for _ in 0..count {
            let employee_id = sequence.next_id()?;
            let hire_date = calendar::day_in_year(year, rng.random_range(0..=MAX_DAY_OFFSET))?;
            let placement = Placement {
                country,
                hire_date,
                year,
            };
            hires.push(factory.create(employee_id, placement, rng)?);
        }
        Ok(hires)
    }
}
