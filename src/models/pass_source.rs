//! Monthly pass count model.
//!
//! The number of monthly passes is either typed in directly or derived
//! from the business days of a month, assuming one round trip per day.

use serde::{Deserialize, Serialize};

use crate::calculation::business_days_in_month;
use crate::error::EngineResult;

/// Passes per business day when the count is derived from a month.
pub const PASSES_PER_WORKING_DAY: u32 = 2;

/// Where the monthly pass count comes from.
///
/// # Example
///
/// ```
/// use opass::models::PassSource;
///
/// assert_eq!(PassSource::Manual(22).resolve().unwrap(), 22);
///
/// // May 2018 has 21 business days once Labour Day and Whit Monday are removed.
/// let derived = PassSource::WorkingDays { month: 5, year: 2018 };
/// assert_eq!(derived.resolve().unwrap(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassSource {
    /// A pass count supplied directly by the user.
    Manual(u32),
    /// Two passes for every business day of `month` in `year`.
    WorkingDays {
        /// The month, 1 to 12.
        month: u32,
        /// The calendar year the holidays are computed for.
        year: i32,
    },
}

impl PassSource {
    /// Resolves this source to a single pass count.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` or `InvalidYear` when a derived count is
    /// requested for a month that does not exist.
    pub fn resolve(&self) -> EngineResult<u32> {
        match *self {
            PassSource::Manual(passes) => Ok(passes),
            PassSource::WorkingDays { month, year } => {
                Ok(business_days_in_month(month, year)? * PASSES_PER_WORKING_DAY)
            }
        }
    }
}
