//! Calculation logic for the toll pass calculator.
//!
//! This module contains the tiered pass pricing engine, the Orthodox Easter
//! computation, the Greek bank holiday calendar, the business day counter
//! and the rendering of a priced month as text.

mod business_days;
mod easter;
mod holidays;
mod pricing;
mod report;

pub use business_days::{business_days_in_month, days_in_month};
pub use easter::orthodox_easter;
pub use holidays::{BankHoliday, GreekBankCalendar, bank_holidays};
pub use pricing::{
    BandLine, MonthlyCost, OVERFLOW_BAND, PRICE_BANDS, PriceBand, band_for_pass,
    compute_monthly_cost, per_pass_cost,
};
pub use report::{CURRENCY_SYMBOL, ReportLine, render_report};
