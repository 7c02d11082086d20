//! Orthodox Easter computation.
//!
//! The movable Greek bank holidays are all offsets from Orthodox Easter
//! Sunday, which is derived here with a numeric congruence on the year.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Computes the date of Orthodox Easter Sunday for `year`.
///
/// The congruence yields the Julian calendar date shifted by the 13 day
/// Julian/Gregorian offset, so results are exact for 1900 through 2099.
///
/// # Errors
///
/// Returns `InvalidYear` if the resulting date cannot be represented.
///
/// # Example
///
/// ```
/// use opass::calculation::orthodox_easter;
/// use chrono::NaiveDate;
///
/// assert_eq!(orthodox_easter(2018).unwrap(), NaiveDate::from_ymd_opt(2018, 4, 8).unwrap());
/// assert_eq!(orthodox_easter(2019).unwrap(), NaiveDate::from_ymd_opt(2019, 4, 28).unwrap());
/// ```
pub fn orthodox_easter(year: i32) -> EngineResult<NaiveDate> {
    let a = year.rem_euclid(4);
    let b = year.rem_euclid(7);
    let c = year.rem_euclid(19);
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b + 6 * d + 6) % 7;
    let days = d + e + 13;

    let (month, day) = if days > 39 {
        (5, days - 39)
    } else if days > 9 {
        (4, days - 9)
    } else {
        (3, days + 22)
    };

    NaiveDate::from_ymd_opt(year, month, day as u32).ok_or(EngineError::InvalidYear { year })
}
