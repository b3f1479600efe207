//! Run summaries.
//!
//! Every simulated year produces one [`CountryYearSummary`] per country.
//! The [`SimulationReport`] collects them with run-level totals and is
//! what the binary logs at the end of a run.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;
use workforce_types::CountryYearSummary;

/// Outcome of a complete simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// Identifier of the run.
    pub run_id: Uuid,
    /// Seed of the random stream.
    pub seed: u64,
    /// First simulated year.
    pub first_year: i32,
    /// Last simulated year.
    pub last_year: i32,
    /// Per-country movement for every simulated year, in year order.
    pub years: Vec<CountryYearSummary>,
    /// Snapshots in the history.
    pub total_rows: usize,
    /// Distinct employees in the history.
    pub distinct_employees: usize,
}

impl SimulationReport {
    /// Summaries recorded for `year`.
    pub fn for_year(&self, year: i32) -> impl Iterator<Item = &CountryYearSummary> {
        self.years.iter().filter(move |s| s.year == year)
    }

    /// Active headcount across all countries at the end of `year`.
    pub fn headcount(&self, year: i32) -> u64 {
        self.for_year(year)
            .map(|s| u64::from(s.active))
            .fold(0, u64::saturating_add)
    }

    /// Retirements and voluntary exits over the whole run.
    pub fn total_departures(&self) -> u64 {
        self.years
            .iter()
            .map(|s| u64::from(s.departures()))
            .fold(0, u64::saturating_add)
    }

    /// Log the run-level totals.
    pub fn log(&self) {
        info!(
            run_id = %self.run_id,
            seed = self.seed,
            first_year = self.first_year,
            last_year = self.last_year,
            total_rows = self.total_rows,
            distinct_employees = self.distinct_employees,
            final_headcount = self.headcount(self.last_year),
            departures = self.total_departures(),
            "Simulation complete"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(year: i32, country: &str, active: u32, retired: u32, left: u32) -> CountryYearSummary {
        CountryYearSummary {
            active,
            retired,
            voluntary_attrition: left,
            ..CountryYearSummary::new(year, country)
        }
    }

    #[test]
    fn totals_aggregate_countries() {
        let report = SimulationReport {
            run_id: Uuid::nil(),
            seed: 1,
            first_year: 2018,
            last_year: 2019,
            years: vec![
                summary(2018, "India", 100, 0, 0),
                summary(2018, "USA", 50, 0, 0),
                summary(2019, "India", 104, 2, 13),
                summary(2019, "USA", 52, 1, 7),
            ],
            total_rows: 329,
            distinct_employees: 179,
        };
        assert_eq!(report.headcount(2018), 150);
        assert_eq!(report.headcount(2019), 156);
        assert_eq!(report.total_departures(), 23);
        assert_eq!(report.for_year(2019).count(), 2);
    }
}
