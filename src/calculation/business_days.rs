//! Business day counting.
//!
//! This module counts the working days of a month under the Greek bank
//! calendar. The count drives the derived monthly pass count.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::GreekBankCalendar;

/// Returns the number of calendar days in `month` of `year`.
///
/// # Errors
///
/// Returns `InvalidMonth` for a month outside 1-12 and `InvalidYear` if
/// the month cannot be represented.
///
/// # Example
///
/// ```
/// use opass::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2, 2020).unwrap(), 29);
/// assert_eq!(days_in_month(2, 2018).unwrap(), 28);
/// ```
pub fn days_in_month(month: u32, year: i32) -> EngineResult<u32> {
    let first = first_of_month(month, year)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.saturating_add(1), 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(EngineError::InvalidYear { year })?;

    Ok((next - first).num_days() as u32)
}

/// Counts the business days in `month` of `year`.
///
/// A day counts when it falls Monday to Friday and is not a bank holiday
/// of `year` (see [`GreekBankCalendar`]).
///
/// # Errors
///
/// Returns `InvalidMonth` for a month outside 1-12 and `InvalidYear` if
/// the year cannot be represented.
///
/// # Example
///
/// ```
/// use opass::calculation::business_days_in_month;
///
/// // January 2020: 23 weekdays minus New Year's Day and Epiphany
/// assert_eq!(business_days_in_month(1, 2020).unwrap(), 21);
/// ```
pub fn business_days_in_month(month: u32, year: i32) -> EngineResult<u32> {
    let first = first_of_month(month, year)?;
    let calendar = GreekBankCalendar::for_year(year)?;
    let days = days_in_month(month, year)?;

    let count = first
        .iter_days()
        .take(days as usize)
        .filter(|date| calendar.is_business_day(*date))
        .count() as u32;

    debug!(month, year, days, business_days = count, "Counted business days");
    Ok(count)
}

fn first_of_month(month: u32, year: i32) -> EngineResult<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidMonth { month });
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidYear { year })
}
