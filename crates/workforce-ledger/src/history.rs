//! The history store: an append-only, indexed log of yearly snapshots.
//!
//! # Design
//!
//! - **Append-only**: snapshots are never modified or deleted.
//! - **Per-employee timelines**: each employee's snapshots are held in year
//!   order, so "last year's snapshot for E" is a direct index, not a scan.
//! - **Year index**: the set of employees recorded in each year, so "every
//!   snapshot in year Y" touches only that year's employees.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;
use workforce_types::{EmployeeId, EmployeeSnapshot};

use crate::HistoryError;
use crate::verify::{self, VerificationResult};

/// The append-only ledger of every employee's yearly snapshots.
#[derive(Debug, Default, Clone)]
pub struct HistoryStore {
    /// Employee id to that employee's snapshots, in year order.
    timelines: BTreeMap<EmployeeId, Vec<EmployeeSnapshot>>,
    /// Year to the employees recorded in that year.
    years: BTreeMap<i32, BTreeSet<EmployeeId>>,
    /// Total number of snapshots.
    len: usize,
}

impl HistoryStore {
    /// Create a new empty store.
    pub const fn new() -> Self {
        Self {
            timelines: BTreeMap::new(),
            years: BTreeMap::new(),
            len: 0,
        }
    }

    /// Number of snapshots recorded.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no snapshot has been recorded.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct employees ever recorded.
    pub fn employee_count(&self) -> usize {
        self.timelines.len()
    }

    /// Append one snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the snapshot would break contiguity,
    /// follow a terminal snapshot, duplicate an existing year, or carry
    /// termination fields that disagree with its status. The store is left
    /// unchanged on error.
    pub fn append(&mut self, snapshot: EmployeeSnapshot) -> Result<(), HistoryError> {
        let employee_id = snapshot.employee_id;
        let year = snapshot.year;

        if !snapshot.termination_fields_consistent() {
            return Err(HistoryError::InconsistentTermination { employee_id, year });
        }

        if let Some(last) = self.timelines.get(&employee_id).and_then(|t| t.last()) {
            if last.status.is_terminal() {
                return Err(HistoryError::AppendAfterExit {
                    employee_id,
                    exit_year: last.year,
                    year,
                });
            }
            if year <= last.year {
                return Err(HistoryError::DuplicateSnapshot {
                    employee_id,
                    year: last.year,
                });
            }
            let expected = last.year.saturating_add(1);
            if year != expected {
                return Err(HistoryError::NonContiguousYear {
                    employee_id,
                    expected,
                    actual: year,
                });
            }
        }

        self.timelines.entry(employee_id).or_default().push(snapshot);
        self.years.entry(year).or_default().insert(employee_id);
        self.len = self.len.saturating_add(1);
        Ok(())
    }

    /// Append a batch of snapshots, stopping at the first rejected one.
    ///
    /// # Errors
    ///
    /// Returns the first [`HistoryError`] encountered. Snapshots before the
    /// rejected one remain appended.
    pub fn extend<I>(&mut self, snapshots: I) -> Result<usize, HistoryError>
    where
        I: IntoIterator<Item = EmployeeSnapshot>,
    {
        let mut appended: usize = 0;
        for snapshot in snapshots {
            self.append(snapshot)?;
            appended = appended.saturating_add(1);
        }
        debug!(appended, total = self.len, "snapshots appended");
        Ok(appended)
    }

    /// Look up one employee's snapshot for one year.
    pub fn snapshot(&self, year: i32, employee_id: EmployeeId) -> Option<&EmployeeSnapshot> {
        let timeline = self.timelines.get(&employee_id)?;
        let first = timeline.first()?;
        let offset = usize::try_from(year.checked_sub(first.year)?).ok()?;
        timeline.get(offset)
    }

    /// Every snapshot recorded for one employee, in year order.
    pub fn timeline(&self, employee_id: EmployeeId) -> &[EmployeeSnapshot] {
        self.timelines
            .get(&employee_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Every snapshot recorded for one year, in employee id order.
    pub fn in_year(&self, year: i32) -> impl Iterator<Item = &EmployeeSnapshot> {
        self.years
            .get(&year)
            .into_iter()
            .flatten()
            .filter_map(move |id| self.snapshot(year, *id))
    }

    /// The cohort: snapshots with `Active` status in `country` for `year`.
    pub fn active_in(&self, year: i32, country: &str) -> Vec<&EmployeeSnapshot> {
        self.in_year(year)
            .filter(|s| s.is_active() && s.country == country)
            .collect()
    }

    /// Years that have at least one snapshot, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    /// Every snapshot, ordered by `(employee_id, year)` ascending.
    pub fn rows(&self) -> impl Iterator<Item = &EmployeeSnapshot> {
        self.timelines.values().flatten()
    }

    /// Re-check every history invariant over the full store.
    pub fn verify(&self) -> VerificationResult {
        verify::verify_snapshots(self.rows())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use workforce_types::{EmploymentStatus, Gender, MaritalStatus};

    use super::*;

    fn snap(id: u64, year: i32, country: &str) -> EmployeeSnapshot {
        EmployeeSnapshot {
            year,
            employee_id: EmployeeId::new(id),
            first_name: "Kiran".to_owned(),
            last_name: "Rao".to_owned(),
            gender: Gender::Male,
            marital_status: MaritalStatus::Married,
            citizenship_country: country.to_owned(),
            recruitment_source: "LinkedIn".to_owned(),
            country: country.to_owned(),
            city: "Pune".to_owned(),
            department: "Finance".to_owned(),
            job_title: "Accountant".to_owned(),
            hire_date: NaiveDate::from_ymd_opt(2012, 6, 1).unwrap(),
            birth_date: NaiveDate::from_ymd_opt(1985, 6, 1).unwrap(),
            age: u32::try_from(year - 1985).unwrap(),
            status: EmploymentStatus::Active,
            termination_date: None,
            exit_reason: None,
            tenure_days: 2000,
            salary: dec!(64000),
            bonus: None,
            performance_rating: None,
            employee_engagement: 3,
            employee_satisfaction: 3,
            absence_count: 4,
        }
    }

    fn retired(id: u64, year: i32) -> EmployeeSnapshot {
        let mut s = snap(id, year, "India");
        s.status = EmploymentStatus::Retired;
        s.termination_date = NaiveDate::from_ymd_opt(year, 1, 1);
        s
    }

    #[test]
    fn new_store_is_empty() {
        let store = HistoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.employee_count(), 0);
    }

    #[test]
    fn contiguous_years_append() {
        let mut store = HistoryStore::new();
        assert!(store.append(snap(1, 2018, "India")).is_ok());
        assert!(store.append(snap(1, 2019, "India")).is_ok());
        assert!(store.append(snap(1, 2020, "India")).is_ok());
        assert_eq!(store.len(), 3);
        assert_eq!(store.employee_count(), 1);
        assert_eq!(store.timeline(EmployeeId::new(1)).len(), 3);
    }

    #[test]
    fn gap_year_rejected() {
        let mut store = HistoryStore::new();
        store.append(snap(1, 2018, "India")).unwrap();
        let err = store.append(snap(1, 2020, "India"));
        assert_eq!(
            err,
            Err(HistoryError::NonContiguousYear {
                employee_id: EmployeeId::new(1),
                expected: 2019,
                actual: 2020,
            })
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_year_rejected() {
        let mut store = HistoryStore::new();
        store.append(snap(1, 2018, "India")).unwrap();
        assert!(matches!(
            store.append(snap(1, 2018, "India")),
            Err(HistoryError::DuplicateSnapshot { year: 2018, .. })
        ));
    }

    #[test]
    fn nothing_follows_an_exit() {
        let mut store = HistoryStore::new();
        store.append(snap(1, 2018, "India")).unwrap();
        store.append(retired(1, 2019)).unwrap();
        assert!(matches!(
            store.append(snap(1, 2020, "India")),
            Err(HistoryError::AppendAfterExit { exit_year: 2019, .. })
        ));
    }

    #[test]
    fn active_with_termination_date_rejected() {
        let mut store = HistoryStore::new();
        let mut s = snap(1, 2018, "India");
        s.termination_date = NaiveDate::from_ymd_opt(2018, 3, 3);
        assert!(matches!(
            store.append(s),
            Err(HistoryError::InconsistentTermination { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn direct_lookup_by_year_and_id() {
        let mut store = HistoryStore::new();
        store.append(snap(1, 2018, "India")).unwrap();
        store.append(snap(1, 2019, "India")).unwrap();
        store.append(snap(2, 2019, "USA")).unwrap();

        assert_eq!(store.snapshot(2019, EmployeeId::new(1)).map(|s| s.year), Some(2019));
        assert_eq!(store.snapshot(2019, EmployeeId::new(2)).map(|s| s.year), Some(2019));
        assert!(store.snapshot(2018, EmployeeId::new(2)).is_none());
        assert!(store.snapshot(2017, EmployeeId::new(1)).is_none());
        assert!(store.snapshot(2020, EmployeeId::new(1)).is_none());
    }

    #[test]
    fn active_in_filters_status_and_country() {
        let mut store = HistoryStore::new();
        store.append(snap(1, 2019, "India")).unwrap();
        store.append(snap(2, 2019, "USA")).unwrap();
        store.append(retired(3, 2019)).unwrap();

        let india: Vec<u64> = store
            .active_in(2019, "India")
            .iter()
            .map(|s| s.employee_id.into_inner())
            .collect();
        assert_eq!(india, vec![1]);
        assert_eq!(store.active_in(2019, "USA").len(), 1);
        assert!(store.active_in(2018, "India").is_empty());
    }

    #[test]
    fn rows_sorted_by_employee_then_year() {
        let mut store = HistoryStore::new();
        store.append(snap(2, 2018, "USA")).unwrap();
        store.append(snap(1, 2018, "India")).unwrap();
        store.append(snap(2, 2019, "USA")).unwrap();
        store.append(snap(1, 2019, "India")).unwrap();

        let keys: Vec<(u64, i32)> = store
            .rows()
            .map(|s| (s.employee_id.into_inner(), s.year))
            .collect();
        assert_eq!(keys, vec![(1, 2018), (1, 2019), (2, 2018), (2, 2019)]);
        assert_eq!(store.years().collect::<Vec<_>>(), vec![2018, 2019]);
    }

    #[test]
    fn extend_stops_at_first_error() {
        let mut store = HistoryStore::new();
        let result = store.extend(vec![
            snap(1, 2018, "India"),
            snap(1, 2019, "India"),
            snap(1, 2021, "India"),
            snap(2, 2018, "India"),
        ]);
        assert!(result.is_err());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn appended_history_verifies_clean() {
        let mut store = HistoryStore::new();
        store.append(snap(1, 2018, "India")).unwrap();
        store.append(retired(1, 2019)).unwrap();
        store.append(snap(2, 2019, "India")).unwrap();
        assert_eq!(store.verify(), VerificationResult::Clean);
    }
}
