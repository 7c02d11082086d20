//! Greek bank holiday calendar.
//!
//! Eight holidays fall on fixed calendar dates and four move with Orthodox
//! Easter. The full set is recomputed for every year queried.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::orthodox_easter;

/// A bank holiday on a specific date.
///
/// # Example
///
/// ```
/// use opass::calculation::BankHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = BankHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 3, 25).unwrap(),
///     name: "Independence Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankHoliday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Clean Monday").
    pub name: String,
}

/// Holidays on the same date every year: (month, day, name).
const FIXED_HOLIDAYS: [(u32, u32, &str); 8] = [
    (1, 1, "New Year's Day"),
    (1, 6, "Epiphany"),
    (3, 25, "Independence Day"),
    (5, 1, "Labour Day"),
    (8, 15, "Assumption of Mary"),
    (10, 28, "Ochi Day"),
    (12, 25, "Christmas Day"),
    (12, 26, "Glorifying of the Mother of God"),
];

/// Holidays relative to Orthodox Easter Sunday: (offset in days, name).
const MOVABLE_HOLIDAYS: [(i64, &str); 4] = [
    (-48, "Clean Monday"),
    (-2, "Good Friday"),
    (1, "Easter Monday"),
    (50, "Whit Monday"),
];

/// Returns the 12 Greek bank holidays of `year`, sorted by date.
///
/// # Errors
///
/// Returns `InvalidYear` if a holiday date cannot be represented.
///
/// # Example
///
/// ```
/// use opass::calculation::bank_holidays;
/// use chrono::NaiveDate;
///
/// let holidays = bank_holidays(2018).unwrap();
/// assert_eq!(holidays.len(), 12);
/// assert_eq!(holidays[2].name, "Clean Monday");
/// assert_eq!(holidays[2].date, NaiveDate::from_ymd_opt(2018, 2, 19).unwrap());
/// ```
pub fn bank_holidays(year: i32) -> EngineResult<Vec<BankHoliday>> {
    let easter = orthodox_easter(year)?;

    let mut holidays = Vec::with_capacity(FIXED_HOLIDAYS.len() + MOVABLE_HOLIDAYS.len());
    for (month, day, name) in FIXED_HOLIDAYS {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(EngineError::InvalidYear { year })?;
        holidays.push(BankHoliday {
            date,
            name: name.to_string(),
        });
    }
    for (offset, name) in MOVABLE_HOLIDAYS {
        let date = easter
            .checked_add_signed(Duration::days(offset))
            .ok_or(EngineError::InvalidYear { year })?;
        holidays.push(BankHoliday {
            date,
            name: name.to_string(),
        });
    }

    holidays.sort_by_key(|h| h.date);
    Ok(holidays)
}

/// The Greek bank calendar for a single year.
///
/// A date is a business day when it falls Monday to Friday and is not one
/// of the year's bank holidays.
///
/// # Example
///
/// ```
/// use opass::calculation::GreekBankCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = GreekBankCalendar::for_year(2018).unwrap();
/// // Good Friday
/// assert!(!calendar.is_business_day(NaiveDate::from_ymd_opt(2018, 4, 6).unwrap()));
/// // An ordinary Thursday
/// assert!(calendar.is_business_day(NaiveDate::from_ymd_opt(2018, 4, 5).unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct GreekBankCalendar {
    year: i32,
    holidays: Vec<BankHoliday>,
}

impl GreekBankCalendar {
    /// Builds the calendar for `year`.
    pub fn for_year(year: i32) -> EngineResult<Self> {
        Ok(Self {
            year,
            holidays: bank_holidays(year)?,
        })
    }

    /// Returns the year this calendar covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the bank holidays of the year, sorted by date.
    pub fn holidays(&self) -> &[BankHoliday] {
        &self.holidays
    }

    /// Returns the holiday falling on `date`, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&BankHoliday> {
        self.holidays.iter().find(|h| h.date == date)
    }

    /// Returns true if `date` is a bank holiday.
    pub fn is_bank_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_on(date).is_some()
    }

    /// Returns true if `date` falls on a Saturday or Sunday.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns true if `date` is neither a weekend day nor a bank holiday.
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_bank_holiday(date)
    }
}
