//! Retirement projection and deletion eligibility
//!
//! Derived, never-persisted values computed from a record's age, joining
//! date and status.
//!
//! The date arithmetic here is deliberately literal: the remaining-years
//! count is fed to the date constructor as a raw year, and month numbers are
//! added rather than advanced on a calendar. The list-view string and the
//! details breakdown are independent derivations and need not agree.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};

use super::employee::STATUS_EMPLOYED;
use super::error::DomainError;

/// Age at which an employee is considered retired.
pub const RETIREMENT_AGE: i32 = 65;

/// Time-to-retirement breakdown shown on the details view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetirementProjection {
    /// `65 - age`
    pub remaining_years: i32,
    /// `joining month - current month`, signed
    pub months: i32,
    /// `max(0, joining day + 1 - current day)`
    pub days: i32,
    /// Date built from the raw constructor arguments
    pub target: NaiveDate,
}

impl fmt::Display for RetirementProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Year(s), {} Month(s) & {} Day(s)",
            self.remaining_years, self.months, self.days
        )
    }
}

/// Project the time left before retirement.
///
/// Returns `None` once the employee has reached [`RETIREMENT_AGE`].
pub fn project_retirement(
    age: i32,
    date_of_joining: NaiveDate,
    today: NaiveDate,
) -> Option<RetirementProjection> {
    if age >= RETIREMENT_AGE {
        return None;
    }

    let remaining_years = RETIREMENT_AGE.checked_sub(age)?;
    let joining_month = date_of_joining.month() as i32;
    let joining_day = date_of_joining.day() as i32 + 1;
    let current_month = today.month() as i32;
    let current_day = today.day() as i32;

    let target = constructor_date(
        i64::from(remaining_years),
        i64::from(current_month + joining_month),
        i64::from(joining_day),
    )?;

    Some(RetirementProjection {
        remaining_years,
        months: joining_month - current_month,
        days: (joining_day - current_day).max(0),
        target,
    })
}

/// List-view retirement date, `"{year}-{month}-{day}"` without zero padding.
///
/// The year is the joining year plus the remaining years and the day is the
/// joining day plus one, so the string may name a day past the month's end.
/// `today` plays no part in the result. Ages whose year would overflow yield
/// `None`.
pub fn project_retirement_date(
    age: i32,
    date_of_joining: NaiveDate,
    _today: NaiveDate,
) -> Option<String> {
    if age >= RETIREMENT_AGE {
        return None;
    }

    let remaining_years = RETIREMENT_AGE.checked_sub(age)?;
    let year = date_of_joining.year().checked_add(remaining_years)?;
    Some(format!(
        "{}-{}-{}",
        year,
        date_of_joining.month(),
        date_of_joining.day() + 1
    ))
}

/// Whether a projected retirement date falls in the "upcoming" window.
///
/// True iff the year is 0 and the zero-based month is at most 6. No joining
/// year plus remaining years sums to 0 in practice, so this rarely matches.
pub fn is_upcoming_retirement(projected: &str) -> bool {
    match parse_projected_date(projected) {
        Some((year, month, _day)) => year == 0 && month - 1 <= 6,
        None => false,
    }
}

/// Deletion is refused while the employee is still employed.
pub fn is_deletable(current_status: i32) -> bool {
    current_status != STATUS_EMPLOYED
}

/// [`is_deletable`] as a gate for callers about to issue a delete.
pub fn ensure_deletable(current_status: i32) -> Result<(), DomainError> {
    if is_deletable(current_status) {
        Ok(())
    } else {
        Err(DomainError::DeletionRefused)
    }
}

/// Split `"Y-M-D"` into its components. Out-of-range parts yield `None`.
fn parse_projected_date(value: &str) -> Option<(i64, i64, i64)> {
    let mut parts = value.trim().split('-');
    let year = parts.next()?.parse::<i64>().ok()?;
    let month = parts.next()?.parse::<i64>().ok()?;
    let day = parts.next()?.parse::<i64>().ok()?;
    if parts.next().is_some() || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

/// Build a date the way a `(year, monthIndex, day)` constructor does.
///
/// Years 0 through 99 are read as 1900 + year. The zero-based month index and
/// the day overflow into the following years and months.
fn constructor_date(year: i64, month_index: i64, day: i64) -> Option<NaiveDate> {
    let year = if (0..=99).contains(&year) {
        year + 1900
    } else {
        year
    };

    let total_months = year.checked_mul(12)?.checked_add(month_index)?;
    let year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let month = u32::try_from(total_months.rem_euclid(12) + 1).ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    let offset = day - 1;
    if offset >= 0 {
        first.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}
