//! Tiered pass pricing.
//!
//! The operator discounts each pass of a month according to how many passes
//! came before it. Passes are numbered from 1 and every pass index maps to
//! exactly one [`PriceBand`]; the band's discount applies to the day cost.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// A contiguous range of pass indices sharing one discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBand {
    /// The first pass index of the band.
    pub lo: u32,
    /// The last pass index of the band, or `None` if the band is open-ended.
    pub hi: Option<u32>,
    /// The discount applied to the day cost, in percent.
    pub discount_percent: u32,
}

impl PriceBand {
    /// Returns true if pass `index` belongs to this band.
    pub fn contains(&self, index: u32) -> bool {
        index >= self.lo && self.hi.is_none_or(|hi| index <= hi)
    }

    /// Returns the cost of one pass in this band.
    pub fn unit_cost(&self, day_cost: Decimal) -> Decimal {
        day_cost * Decimal::from(100 - self.discount_percent) / Decimal::ONE_HUNDRED
    }
}

/// The discounted bands, in order of increasing pass index.
pub const PRICE_BANDS: [PriceBand; 6] = [
    PriceBand { lo: 1, hi: Some(5), discount_percent: 0 },
    PriceBand { lo: 6, hi: Some(10), discount_percent: 15 },
    PriceBand { lo: 11, hi: Some(20), discount_percent: 30 },
    PriceBand { lo: 21, hi: Some(30), discount_percent: 40 },
    PriceBand { lo: 31, hi: Some(40), discount_percent: 50 },
    PriceBand { lo: 41, hi: Some(60), discount_percent: 60 },
];

/// Passes beyond the last discounted band are charged the full day cost.
pub const OVERFLOW_BAND: PriceBand = PriceBand {
    lo: 61,
    hi: None,
    discount_percent: 0,
};

/// Returns the band pass `index` falls in, or `None` for index 0.
///
/// # Example
///
/// ```
/// use opass::calculation::band_for_pass;
///
/// assert_eq!(band_for_pass(6).unwrap().discount_percent, 15);
/// assert_eq!(band_for_pass(61).unwrap().hi, None);
/// assert!(band_for_pass(0).is_none());
/// ```
pub fn band_for_pass(index: u32) -> Option<&'static PriceBand> {
    PRICE_BANDS
        .iter()
        .chain(std::iter::once(&OVERFLOW_BAND))
        .find(|band| band.contains(index))
}

/// Returns the cost of pass number `index` for the given day cost.
///
/// Index 0 is not a pass and costs nothing.
///
/// # Example
///
/// ```
/// use opass::calculation::per_pass_cost;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let day_cost = Decimal::from_str("2.80").unwrap();
/// assert_eq!(per_pass_cost(5, day_cost), Decimal::from_str("2.80").unwrap());
/// assert_eq!(per_pass_cost(6, day_cost), Decimal::from_str("2.38").unwrap());
/// ```
pub fn per_pass_cost(index: u32, day_cost: Decimal) -> Decimal {
    band_for_pass(index).map_or(Decimal::ZERO, |band| band.unit_cost(day_cost))
}

/// One line of the monthly breakdown: the passes consumed within a band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandLine {
    /// The first pass index of the line.
    pub lo: u32,
    /// The last pass index of the line, or `None` for the open-ended band.
    pub hi: Option<u32>,
    /// The cost of each pass on this line.
    pub unit_cost: Decimal,
    /// The number of passes on this line.
    pub passes: u32,
    /// `unit_cost * passes`.
    pub subtotal: Decimal,
}

/// The priced month: breakdown by band and the grand total.
///
/// Amounts are kept at full precision; rounding is left to rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCost {
    /// The cost of one trip through the selected stations.
    pub day_cost: Decimal,
    /// The number of passes priced.
    pub pass_count: u32,
    /// One line per band entered, in band order.
    pub lines: Vec<BandLine>,
    /// The sum of the cost of every pass.
    pub total: Decimal,
}

/// Prices `pass_count` passes of a trip costing `day_cost`.
///
/// Each pass `i` in `1..=pass_count` is charged [`per_pass_cost`]. The
/// breakdown has one line per band entered; a line ends at the band's
/// upper bound or at `pass_count`, whichever comes first. Passes from 61
/// onwards are reported on a single open-ended line.
///
/// # Errors
///
/// Returns `InvalidInput` if `day_cost` is negative.
///
/// # Example
///
/// ```
/// use opass::calculation::compute_monthly_cost;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let cost = compute_monthly_cost(Decimal::from_str("2.80").unwrap(), 22).unwrap();
/// assert_eq!(cost.lines.len(), 4);
/// assert_eq!(cost.lines[3].lo, 21);
/// assert_eq!(cost.lines[3].hi, Some(22));
/// // 5 x 2.80 + 5 x 2.38 + 10 x 1.96 + 2 x 1.68
/// assert_eq!(cost.total, Decimal::from_str("48.86").unwrap());
/// ```
pub fn compute_monthly_cost(day_cost: Decimal, pass_count: u32) -> EngineResult<MonthlyCost> {
    if day_cost.is_sign_negative() && !day_cost.is_zero() {
        return Err(EngineError::InvalidInput {
            field: "day_cost".to_string(),
            message: format!("must not be negative, got {}", day_cost),
        });
    }

    let mut lines: Vec<BandLine> = Vec::new();
    let mut total = Decimal::ZERO;

    for index in 1..=pass_count {
        let band = band_for_pass(index).ok_or_else(|| EngineError::CalculationError {
            message: format!("no price band for pass {}", index),
        })?;
        let cost = band.unit_cost(day_cost);
        total += cost;

        match lines.last_mut() {
            Some(line) if line.lo == band.lo => {
                line.passes += 1;
                line.subtotal += cost;
                if line.hi.is_some() {
                    line.hi = Some(index);
                }
            }
            _ => lines.push(BandLine {
                lo: band.lo,
                hi: band.hi.map(|_| index),
                unit_cost: cost,
                passes: 1,
                subtotal: cost,
            }),
        }
    }

    debug!(
        day_cost = %day_cost,
        pass_count,
        bands = lines.len(),
        total = %total,
        "Priced monthly passes"
    );

    Ok(MonthlyCost {
        day_cost,
        pass_count,
        lines,
        total,
    })
}
