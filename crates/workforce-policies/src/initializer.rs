//! The initial cohort.
//!
//! Each country starts with its configured headcount of employees hired in
//! a backdated window of years. Per employee the hire year is drawn first,
//! then the day within that year, then the remaining attributes through the
//! [`EmployeeFactory`].

use rand::Rng;
use tracing::debug;
use workforce_types::EmployeeSnapshot;

use crate::calendar::{self, MAX_DAY_OFFSET};
use crate::config::{CountryConfig, WorkforceConfig};
use crate::error::PolicyError;
use crate::factory::{EmployeeFactory, Placement};
use crate::sampler::IntRange;
use crate::sequence::EmployeeIdSequence;

/// Builds the first simulated year's cohort for a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulationInitializer {
    hire_years: IntRange<i32>,
}

impl PopulationInitializer {
    /// Build the initializer from the workforce section.
    pub const fn new(config: &WorkforceConfig) -> Self {
        Self {
            hire_years: config.initial_hire_years,
        }
    }

    /// Create `country.starting_headcount` active employees for `year`.
    pub fn populate<R: Rng>(
        &self,
        factory: &EmployeeFactory,
        country: &CountryConfig,
        year: i32,
        sequence: &mut EmployeeIdSequence,
        rng: &mut R,
    ) -> Result<Vec<EmployeeSnapshot>, PolicyError> {
        let headcount = usize::try_from(country.starting_headcount).unwrap_or(usize::MAX);
        let mut cohort = Vec::with_capacity(headcount);

        for _ in 0..country.starting_headcount {
            let employee_id = sequence.next_id()?;
            let hire_year = self.hire_years.sample(rng);
            let hire_date = calendar::day_in_year(hire_year, rng.random_range(0..=MAX_DAY_OFFSET))?;
            let placement = Placement {
                country,
                hire_date,
                year,
            };
            cohort.push(factory.create(employee_id, placement, rng)?);
        }

        debug!(
            country = %country.name,
            year,
            headcount = cohort.len(),
            "Initial cohort created"
        );
        Ok(cohort)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Datelike;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::config::default_countries;
    use crate::factory::tests::factory;

    #[test]
    fn cohort_matches_headcount_with_backdated_hires() {
        let f = factory();
        let mut country = default_countries().remove(2);
        country.starting_headcount = 150;
        let init = PopulationInitializer::new(&WorkforceConfig::default());
        let mut seq = EmployeeIdSequence::new();
        let mut rng = ChaCha8Rng::seed_from_u64(2018);

        let cohort = init.populate(&f, &country, 2018, &mut seq, &mut rng).unwrap();
        assert_eq!(cohort.len(), 150);
        assert_eq!(seq.issued(), 150);
        for e in &cohort {
            assert_eq!(e.year, 2018);
            assert_eq!(e.country, "Australia");
            assert!((2007..=2017).contains(&e.hire_date.year()));
            assert!(e.tenure_days >= 365);
            assert!(e.is_active());
        }
    }

    #[test]
    fn ids_are_sequential_across_countries() {
        let f = factory();
        let init = PopulationInitializer::new(&WorkforceConfig::default());
        let mut seq = EmployeeIdSequence::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut countries = default_countries();
        for c in &mut countries {
            c.starting_headcount = 3;
        }

        let mut ids = Vec::new();
        for c in &countries {
            let cohort = init.populate(&f, c, 2018, &mut seq, &mut rng).unwrap();
            ids.extend(cohort.iter().map(|e| e.employee_id.into_inner()));
        }
        assert_eq!(ids, (1..=9).collect::<Vec<u64>>());
    }
}
