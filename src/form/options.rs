//! Choices offered by the form.
//!
//! The stations, vehicle types and months are exposed as plain lists so the
//! form can number them and parse the user's picks back.

use crate::config::TollTable;
use crate::models::{StationCategory, VehicleType};

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the name of `month` (1-12).
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// Resolves a month typed as a number (`4`), a name (`April`) or a
/// three-letter abbreviation (`apr`).
///
/// # Example
///
/// ```
/// use opass::form::parse_month;
///
/// assert_eq!(parse_month("4"), Some(4));
/// assert_eq!(parse_month("april"), Some(4));
/// assert_eq!(parse_month("Dec"), Some(12));
/// assert_eq!(parse_month("13"), None);
/// ```
pub fn parse_month(input: &str) -> Option<u32> {
    let input = input.trim();
    if let Ok(month) = input.parse::<u32>() {
        return (1..=12).contains(&month).then_some(month);
    }
    if input.chars().count() < 3 {
        return None;
    }
    let lowered = input.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| name.to_lowercase().starts_with(&lowered))
        .map(|index| index as u32 + 1)
}

/// A numbered station choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationOption {
    /// The number the user types to pick the station, starting at 1.
    pub number: usize,
    /// The station name.
    pub name: String,
    /// The group the station is listed under.
    pub category: StationCategory,
}

/// Numbers every station of `table`, frontal stations first.
pub fn station_options(table: &TollTable) -> Vec<StationOption> {
    table
        .stations()
        .iter()
        .enumerate()
        .map(|(index, station)| StationOption {
            number: index + 1,
            name: station.name.clone(),
            category: station.category,
        })
        .collect()
}

/// Numbers the vehicle types, starting at 1.
pub fn vehicle_options() -> impl Iterator<Item = (usize, VehicleType)> {
    VehicleType::ALL
        .into_iter()
        .enumerate()
        .map(|(index, vehicle)| (index + 1, vehicle))
}
