//! The year loop.
//!
//! [`LifecycleSimulator`] drives the simulation one year at a time. The
//! first year seeds every country with its initial cohort. Each later year
//! runs, per country and in configuration order:
//!
//! 1. **Cohort** -- last year's `Active` snapshots in the country
//! 2. **Retirement** -- deterministic, evaluated first
//! 3. **Attrition** -- stochastic, only for those not retiring
//! 4. **Exits** -- terminal snapshots for retirees and leavers
//! 5. **Hiring** -- backfill plus growth, with fresh ids
//! 6. **Compensation** -- yearly update for every remaining survivor
//!
//! Everything produced in steps 4-6 is appended to the [`HistoryStore`]
//! tagged with the year. All draws come from one seeded stream in this
//! fixed order, so a seed and a configuration determine the whole history.

use tracing::{debug, info, info_span, warn};
use workforce_ledger::{HistoryError, HistoryStore};
use workforce_policies::{
    AttritionPolicy, CompensationEngine, CountryConfig, EmployeeFactory, HiringPolicy,
    IdentityProvider, LocaleNameBank, PolicyError, PopulationInitializer, RetirementPolicy,
};
use workforce_types::{CountryYearSummary, EmployeeSnapshot, EmploymentStatus};

use crate::config::{ConfigError, SimulationConfig};
use crate::context::SimulationContext;
use crate::summary::SimulationReport;

/// Errors that can occur during a simulation run.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// The configuration failed validation.
    #[error("configuration error: {source}")]
    Config {
        /// The underlying configuration error.
        #[from]
        source: ConfigError,
    },

    /// A policy could not be applied.
    #[error("policy error: {source}")]
    Policy {
        /// The underlying policy error.
        #[from]
        source: PolicyError,
    },

    /// The history rejected a snapshot.
    #[error("history error: {source}")]
    History {
        /// The underlying history error.
        #[from]
        source: HistoryError,
    },

    /// A year was stepped out of order.
    #[error("year {year} cannot follow {previous:?}")]
    OutOfOrder {
        /// The year requested.
        year: i32,
        /// The last completed year, if any.
        previous: Option<i32>,
    },
}

/// Callback invoked after each simulated year completes.
pub trait YearCallback {
    /// Called with the year's per-country summaries and the history so far.
    fn on_year(&mut self, year: i32, summaries: &[CountryYearSummary], history: &HistoryStore);
}

/// A no-op year callback.
pub struct NoOpCallback;

impl YearCallback for NoOpCallback {
    fn on_year(&mut self, _year: i32, _summaries: &[CountryYearSummary], _history: &HistoryStore) {}
}

/// History and report of a finished run.
#[derive(Debug)]
pub struct SimulationOutcome {
    /// Every snapshot produced.
    pub history: HistoryStore,
    /// Per-year summaries and totals.
    pub report: SimulationReport,
}

/// Drives the year-by-year lifecycle simulation.
#[derive(Debug)]
pub struct LifecycleSimulator {
    config: SimulationConfig,
    factory: EmployeeFactory,
    initializer: PopulationInitializer,
    retirement: RetirementPolicy,
    attrition: AttritionPolicy,
    hiring: HiringPolicy,
    compensation: CompensationEngine,
    context: SimulationContext,
    history: HistoryStore,
    summaries: Vec<CountryYearSummary>,
    last_year: Option<i32>,
}

impl LifecycleSimulator {
    /// Build a simulator using the built-in name bank.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Config`] if the configuration is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        Self::with_identity(config, Box::new(LocaleNameBank::new()))
    }

    /// Build a simulator with a custom identity provider.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Config`] if the configuration is invalid.
    pub fn with_identity(
        config: SimulationConfig,
        identity: Box<dyn IdentityProvider>,
    ) -> Result<Self, SimulationError> {
        let context = SimulationContext::new(config.seed);
        Self::with_context(config, identity, context)
    }

    /// Build a simulator around an existing context.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Config`] if the configuration is invalid.
    pub fn with_context(
        config: SimulationConfig,
        identity: Box<dyn IdentityProvider>,
        context: SimulationContext,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        let factory = EmployeeFactory::new(
            &config.countries,
            &config.departments,
            &config.salary,
            &config.workforce,
            &config.compensation,
            identity,
        )?;
        Ok(Self {
            initializer: PopulationInitializer::new(&config.workforce),
            retirement: RetirementPolicy::new(&config.retirement),
            attrition: AttritionPolicy::new(&config.attrition)?,
            hiring: HiringPolicy::new(&config.hiring),
            compensation: CompensationEngine::new(&config.compensation)?,
            factory,
            context,
            history: HistoryStore::new(),
            summaries: Vec::new(),
            last_year: None,
            config,
        })
    }

    /// The history so far.
    pub const fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// The configuration in use.
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run every configured year and return the history with its report.
    ///
    /// # Errors
    ///
    /// Returns the first [`SimulationError`]; no partial history is
    /// returned.
    pub fn run(
        mut self,
        callback: &mut dyn YearCallback,
    ) -> Result<SimulationOutcome, SimulationError> {
        let span = info_span!(
            "simulation",
            run_id = %self.context.run_id(),
            seed = self.context.seed()
        );
        let _guard = span.enter();

        let years = self.config.years;
        info!(
            first_year = years.start,
            last_year = years.end,
            countries = self.config.countries.len(),
            "Simulation starting"
        );

        for year in years.iter() {
            let summaries = self.step_year(year)?;
            callback.on_year(year, &summaries, &self.history);
        }

        let report = SimulationReport {
            run_id: self.context.run_id(),
            seed: self.context.seed(),
            first_year: years.start,
            last_year: years.end,
            total_rows: self.history.len(),
            distinct_employees: self.history.employee_count(),
            years: self.summaries,
        };
        Ok(SimulationOutcome {
            history: self.history,
            report,
        })
    }

    /// Simulate one year for every country.
    ///
    /// The first call must be for the configured start year; each later
    /// call must be for the following year.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::OutOfOrder`] for a year out of sequence,
    /// or the first policy or history error.
    pub fn step_year(&mut self, year: i32) -> Result<Vec<CountryYearSummary>, SimulationError> {
        let expected = match self.last_year {
            None => Some(self.config.years.start),
            Some(previous) => previous.checked_add(1),
        };
        if expected != Some(year) {
            return Err(SimulationError::OutOfOrder {
                year,
                previous: self.last_year,
            });
        }

        let countries = self.config.countries.clone();
        let mut summaries = Vec::with_capacity(countries.len());
        for country in &countries {
            let summary = if self.last_year.is_none() {
                self.initialize_country(country, year)?
            } else {
                self.advance_country(country, year)?
            };
            info!(
                year,
                country = %summary.country,
                active = summary.active,
                retired = summary.retired,
                voluntary_attrition = summary.voluntary_attrition,
                new_hires = summary.new_hires,
                "Year complete"
            );
            summaries.push(summary);
        }

        self.last_year = Some(year);
        self.summaries.extend(summaries.iter().cloned());
        Ok(summaries)
    }

    /// Record the initial cohort for `country`.
    fn initialize_country(
        &mut self,
        country: &CountryConfig,
        year: i32,
    ) -> Result<CountryYearSummary, SimulationError> {
        let (rng, sequence) = self.context.split_mut();
        let cohort = self
            .initializer
            .populate(&self.factory, country, year, sequence, rng)?;

        let mut summary = CountryYearSummary::new(year, &country.name);
        summary.active = count(cohort.len());
        self.history.extend(cohort)?;
        Ok(summary)
    }

    /// Apply retirement, attrition, hiring and compensation to last year's
    /// cohort for `country`.
    fn advance_country(
        &mut self,
        country: &CountryConfig,
        year: i32,
    ) -> Result<CountryYearSummary, SimulationError> {
        let previous_year = year.checked_sub(1).ok_or(SimulationError::OutOfOrder {
            year,
            previous: self.last_year,
        })?;
        let cohort: Vec<EmployeeSnapshot> = self
            .history
            .active_in(previous_year, &country.name)
            .into_iter()
            .cloned()
            .collect();
        if cohort.is_empty() {
            warn!(year, country = %country.name, "Cohort is empty; only backfill is possible");
        }

        let (rng, sequence) = self.context.split_mut();
        let mut summary = CountryYearSummary::new(year, &country.name);
        let mut exits = Vec::new();
        let mut survivors = Vec::with_capacity(cohort.len());

        for employee in cohort {
            let departure = match self.retirement.evaluate(&employee, year)? {
                Some(retirement) => Some(retirement),
                None => self.attrition.evaluate(&employee, year, rng)?,
            };
            match departure {
                Some(departure) => {
                    if departure.status == EmploymentStatus::Retired {
                        summary.retired = summary.retired.saturating_add(1);
                    } else {
                        summary.voluntary_attrition = summary.voluntary_attrition.saturating_add(1);
                    }
                    exits.push(departure.apply(&employee, year)?);
                }
                None => survivors.push(employee),
            }
        }
        debug!(
            year,
            country = %country.name,
            retired = summary.retired,
            voluntary_attrition = summary.voluntary_attrition,
            survivors = survivors.len(),
            "Exits decided"
        );

        let hire_count = self
            .hiring
            .plan(year, count(survivors.len()), count(exits.len()), rng);
        let hires = self
            .hiring
            .hire(&self.factory, country, year, hire_count, sequence, rng)?;

        let mut updated = Vec::with_capacity(survivors.len());
        for employee in &survivors {
            updated.push(self.compensation.update_survivor(
                employee,
                year,
                self.factory.titles(),
                rng,
            )?);
        }

        summary.new_hires = count(hires.len());
        summary.active = count(updated.len()).saturating_add(summary.new_hires);

        self.history.extend(exits)?;
        self.history.extend(hires)?;
        self.history.extend(updated)?;
        Ok(summary)
    }
}

/// Clamp a collection length into a summary counter.
fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn small_config() -> SimulationConfig {
        let mut config = SimulationConfig::default();
        config.years.end = 2020;
        for country in &mut config.countries {
            country.starting_headcount = 40;
        }
        config
    }

    #[test]
    fn first_year_records_initial_cohorts() {
        let mut sim = LifecycleSimulator::new(small_config()).unwrap();
        let summaries = sim.step_year(2018).unwrap();
        assert_eq!(summaries.len(), 3);
        assert!(summaries.iter().all(|s| s.active == 40 && s.new_hires == 0));
        assert_eq!(sim.history().len(), 120);
    }

    #[test]
    fn years_must_be_stepped_in_order() {
        let mut sim = LifecycleSimulator::new(small_config()).unwrap();
        assert!(matches!(
            sim.step_year(2019),
            Err(SimulationError::OutOfOrder {
                year: 2019,
                previous: None
            })
        ));
        sim.step_year(2018).unwrap();
        assert!(matches!(
            sim.step_year(2018),
            Err(SimulationError::OutOfOrder { .. })
        ));
        assert!(sim.step_year(2019).is_ok());
    }

    #[test]
    fn invalid_config_is_rejected_before_simulation() {
        let mut config = small_config();
        config.attrition.probability.max = 2.0;
        assert!(matches!(
            LifecycleSimulator::new(config),
            Err(SimulationError::Config { .. })
        ));
    }

    #[test]
    fn summaries_balance_with_history() {
        let sim = LifecycleSimulator::new(small_config()).unwrap();
        let outcome = sim.run(&mut NoOpCallback).unwrap();
        for s in &outcome.report.years {
            let active = outcome
                .history
                .active_in(s.year, &s.country)
                .len();
            assert_eq!(usize::try_from(s.active).unwrap(), active);
        }
        assert_eq!(outcome.report.total_rows, outcome.history.len());
    }

    struct Recorder(Vec<i32>);

    impl YearCallback for Recorder {
        fn on_year(&mut self, year: i32, summaries: &[CountryYearSummary], _: &HistoryStore) {
            assert_eq!(summaries.len(), 3);
            self.0.push(year);
        }
    }

    #[test]
    fn callback_sees_every_year() {
        let sim = LifecycleSimulator::new(small_config()).unwrap();
        let mut recorder = Recorder(Vec::new());
        sim.run(&mut recorder).unwrap();
        assert_eq!(recorder.0, vec![2018, 2019, 2020]);
    }
}
