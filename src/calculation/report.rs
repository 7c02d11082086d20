//! Text rendering of a priced month.
//!
//! Each breakdown line and the grand total are rendered with two decimal
//! places and the euro sign, e.g. `Passes 06 - 10: 2.38 €`.

use rust_decimal::{Decimal, RoundingStrategy};

use super::MonthlyCost;

/// The currency symbol appended to every amount.
pub const CURRENCY_SYMBOL: &str = "€";

/// A rendered line of the monthly report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    /// The unit cost of a band of passes.
    Band {
        /// First pass of the line.
        lo: u32,
        /// Last pass of the line, `None` for the open-ended band.
        hi: Option<u32>,
        /// Cost of each pass on the line.
        unit_cost: Decimal,
    },
    /// The grand total of the month.
    Total(Decimal),
}

impl ReportLine {
    /// Returns true for the grand total line.
    pub fn is_total(&self) -> bool {
        matches!(self, ReportLine::Total(_))
    }
}

impl std::fmt::Display for ReportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportLine::Band {
                lo,
                hi: Some(hi),
                unit_cost,
            } => write!(
                f,
                "Passes {:02} - {:02}: {:.2} {}",
                lo,
                hi,
                round_cents(*unit_cost),
                CURRENCY_SYMBOL
            ),
            ReportLine::Band {
                lo,
                hi: None,
                unit_cost,
            } => write!(
                f,
                "Passes {:02}+: {:.2} {}",
                lo,
                round_cents(*unit_cost),
                CURRENCY_SYMBOL
            ),
            ReportLine::Total(total) => write!(
                f,
                "Total cost: {:.2} {}",
                round_cents(*total),
                CURRENCY_SYMBOL
            ),
        }
    }
}

/// Renders the breakdown lines followed by the total.
///
/// # Example
///
/// ```
/// use opass::calculation::{compute_monthly_cost, render_report};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let cost = compute_monthly_cost(Decimal::from_str("2.80").unwrap(), 7).unwrap();
/// let lines: Vec<String> = render_report(&cost).iter().map(|l| l.to_string()).collect();
/// assert_eq!(lines, vec![
///     "Passes 01 - 05: 2.80 €",
///     "Passes 06 - 07: 2.38 €",
///     "Total cost: 18.76 €",
/// ]);
/// ```
pub fn render_report(cost: &MonthlyCost) -> Vec<ReportLine> {
    cost.lines
        .iter()
        .map(|line| ReportLine::Band {
            lo: line.lo,
            hi: line.hi,
            unit_cost: line.unit_cost,
        })
        .chain(std::iter::once(ReportLine::Total(cost.total)))
        .collect()
}

fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
