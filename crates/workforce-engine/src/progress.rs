//! Year callback that reports run progress.
//!
//! The simulator already logs each country-year. This callback adds one
//! line per simulated year with workforce totals and the history size.

use tracing::info;
use workforce_core::YearCallback;
use workforce_ledger::HistoryStore;
use workforce_types::CountryYearSummary;

/// Callback that logs cumulative progress after every simulated year.
#[derive(Debug, Default)]
pub struct ProgressCallback {
    years_done: u32,
}

impl ProgressCallback {
    /// Create a callback that has seen no years.
    pub const fn new() -> Self {
        Self { years_done: 0 }
    }

    /// Simulated years reported so far.
    pub const fn years_done(&self) -> u32 {
        self.years_done
    }
}

impl YearCallback for ProgressCallback {
    fn on_year(&mut self, year: i32, summaries: &[CountryYearSummary], history: &HistoryStore) {
        self.years_done = self.years_done.saturating_add(1);
        let total = |field: fn(&CountryYearSummary) -> u32| {
            summaries
                .iter()
                .map(|s| u64::from(field(s)))
                .fold(0_u64, u64::saturating_add)
        };
        info!(
            year,
            active = total(|s| s.active),
            departures = total(CountryYearSummary::departures),
            new_hires = total(|s| s.new_hires),
            rows = history.len(),
            employees = history.employee_count(),
            "Year simulated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_reported_years() {
        let mut callback = ProgressCallback::new();
        let history = HistoryStore::new();
        let summaries = [CountryYearSummary::new(2018, "India")];
        callback.on_year(2018, &summaries, &history);
        callback.on_year(2019, &summaries, &history);
        assert_eq!(callback.years_done(), 2);
    }
}
