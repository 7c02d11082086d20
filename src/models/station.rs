//! Toll station model.
//!
//! This module defines the [`TollStation`] struct and the
//! [`StationCategory`] enum used to group stations in the toll table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::VehicleType;

/// The category a toll station belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StationCategory {
    /// Main-line stations across the motorway.
    Frontal,
    /// Stations on entry and exit ramps.
    Ramp,
}

impl std::fmt::Display for StationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StationCategory::Frontal => write!(f, "Frontal"),
            StationCategory::Ramp => write!(f, "Ramp"),
        }
    }
}

/// A toll station and its price per vehicle type.
///
/// Stations are created once when the toll table is loaded and never
/// mutated afterwards.
///
/// # Example
///
/// ```
/// use opass::models::{StationCategory, TollStation, VehicleType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let station = TollStation {
///     name: "Elefsina".to_string(),
///     category: StationCategory::Frontal,
///     prices: [
///         Decimal::from_str("1.40").unwrap(),
///         Decimal::from_str("2.80").unwrap(),
///         Decimal::from_str("7.00").unwrap(),
///         Decimal::from_str("9.90").unwrap(),
///     ],
/// };
/// assert_eq!(station.price_for(VehicleType::Vehicle), Decimal::from_str("2.80").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TollStation {
    /// The station name, unique across the whole table.
    pub name: String,
    /// Whether this is a frontal or a ramp station.
    pub category: StationCategory,
    /// One price per vehicle type, indexed by [`VehicleType::index`].
    pub prices: [Decimal; 4],
}

impl TollStation {
    /// Returns the price of a single pass for the given vehicle type.
    pub fn price_for(&self, vehicle: VehicleType) -> Decimal {
        self.prices[vehicle.index()]
    }
}
