//! Station selection model.
//!
//! A [`Selection`] captures the stations a commuter passes through on one
//! trip together with the vehicle type. It is an immutable value: every
//! change in the form produces a new selection and the day cost is
//! recomputed from it.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TollTable;
use crate::error::EngineResult;

use super::VehicleType;

/// The chosen toll stations and vehicle type.
///
/// # Example
///
/// ```
/// use opass::config::TollTableLoader;
/// use opass::models::{Selection, VehicleType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = TollTableLoader::bundled().unwrap();
/// let selection = Selection::new(VehicleType::Vehicle)
///     .with_station("Elefsina")
///     .with_station("Megara");
///
/// // 2.80 + 1.00
/// let day_cost = selection.day_cost(loader.table()).unwrap();
/// assert_eq!(day_cost, Decimal::from_str("3.80").unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Names of the selected stations.
    pub stations: BTreeSet<String>,
    /// The vehicle type used to pick each station's price.
    pub vehicle: VehicleType,
}

impl Selection {
    /// Creates an empty selection for the given vehicle type.
    pub fn new(vehicle: VehicleType) -> Self {
        Self {
            stations: BTreeSet::new(),
            vehicle,
        }
    }

    /// Returns a copy of this selection with `name` added.
    pub fn with_station(mut self, name: impl Into<String>) -> Self {
        self.stations.insert(name.into());
        self
    }

    /// Returns a copy of this selection using a different vehicle type.
    pub fn with_vehicle(mut self, vehicle: VehicleType) -> Self {
        self.vehicle = vehicle;
        self
    }

    /// Returns true if no station is selected.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Computes the cost of one trip through every selected station.
    ///
    /// # Errors
    ///
    /// Returns `StationNotFound` if a selected name is not in `table`.
    pub fn day_cost(&self, table: &TollTable) -> EngineResult<Decimal> {
        self.stations.iter().try_fold(Decimal::ZERO, |sum, name| {
            let station = table.station(name)?;
            Ok(sum + station.price_for(self.vehicle))
        })
    }
}
