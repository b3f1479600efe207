//! Calendar arithmetic for simulated years.
//!
//! Every date the simulation produces goes through these helpers so the
//! edge cases (leap days, out-of-range years) are handled in one place.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::PolicyError;

/// Largest day offset drawn within a year (January 1 + 0..=364 days).
pub const MAX_DAY_OFFSET: u64 = 364;

/// January 1 of `year`.
pub fn year_start(year: i32) -> Result<NaiveDate, PolicyError> {
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| PolicyError::Calendar {
        context: format!("year {year} is out of range"),
    })
}

/// December 31 of `year`.
pub fn year_end(year: i32) -> Result<NaiveDate, PolicyError> {
    NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(|| PolicyError::Calendar {
        context: format!("year {year} is out of range"),
    })
}

/// January 1 of `year` plus `offset` days.
pub fn day_in_year(year: i32, offset: u64) -> Result<NaiveDate, PolicyError> {
    year_start(year)?
        .checked_add_days(Days::new(offset))
        .ok_or_else(|| PolicyError::Calendar {
            context: format!("day offset {offset} overflows year {year}"),
        })
}

/// Signed whole days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Birth date for someone hired on `hire_date` at `age_at_hire`.
///
/// Same month and day as the hire date, `age_at_hire` years earlier. A
/// February 29 hire date whose birth year is not a leap year clamps to
/// February 28.
pub fn birth_date_for(hire_date: NaiveDate, age_at_hire: u32) -> Result<NaiveDate, PolicyError> {
    let years_back = i32::try_from(age_at_hire).map_err(|_err| PolicyError::Calendar {
        context: format!("age at hire {age_at_hire} is out of range"),
    })?;
    let birth_year = hire_date
        .year()
        .checked_sub(years_back)
        .ok_or_else(|| PolicyError::Calendar {
            context: format!("birth year underflow for age {age_at_hire}"),
        })?;

    NaiveDate::from_ymd_opt(birth_year, hire_date.month(), hire_date.day())
        .or_else(|| NaiveDate::from_ymd_opt(birth_year, hire_date.month(), 28))
        .ok_or_else(|| PolicyError::Calendar {
            context: format!("no valid birth date in {birth_year}"),
        })
}

/// Age in `year`, counted as `year - birth_year`.
pub fn age_in(year: i32, birth_date: NaiveDate) -> Result<u32, PolicyError> {
    year.checked_sub(birth_date.year())
        .and_then(|a| u32::try_from(a).ok())
        .ok_or_else(|| PolicyError::Calendar {
            context: format!("birth date {birth_date} is after {year}"),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn year_bounds() {
        assert_eq!(year_start(2020).unwrap(), date(2020, 1, 1));
        assert_eq!(year_end(2020).unwrap(), date(2020, 12, 31));
    }

    #[test]
    fn max_offset_lands_on_last_or_penultimate_day() {
        assert_eq!(day_in_year(2019, MAX_DAY_OFFSET).unwrap(), date(2019, 12, 31));
        assert_eq!(day_in_year(2020, MAX_DAY_OFFSET).unwrap(), date(2020, 12, 30));
    }

    #[test]
    fn days_between_is_signed() {
        assert_eq!(days_between(date(2019, 12, 31), date(2020, 1, 1)), 1);
        assert_eq!(days_between(date(2020, 1, 1), date(2019, 12, 31)), -1);
        assert_eq!(days_between(date(2015, 1, 1), date(2015, 12, 31)), 364);
    }

    #[test]
    fn birth_date_keeps_month_and_day() {
        assert_eq!(birth_date_for(date(2015, 6, 17), 55).unwrap(), date(1960, 6, 17));
    }

    #[test]
    fn leap_day_hire_clamps_to_28th() {
        // 2016-02-29 minus 25 years is 1991, not a leap year.
        assert_eq!(birth_date_for(date(2016, 2, 29), 25).unwrap(), date(1991, 2, 28));
        // 2016-02-29 minus 24 years is 1992, a leap year.
        assert_eq!(birth_date_for(date(2016, 2, 29), 24).unwrap(), date(1992, 2, 29));
    }

    #[test]
    fn age_counts_calendar_years() {
        let born = date(1960, 12, 31);
        assert_eq!(age_in(2019, born).unwrap(), 59);
        assert_eq!(age_in(2020, born).unwrap(), 60);
        assert!(age_in(1959, born).is_err());
    }
}
