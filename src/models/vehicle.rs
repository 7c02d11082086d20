//! Vehicle type model.
//!
//! Every toll station publishes one price per vehicle type. The
//! [`VehicleType`] enum doubles as the index into a station's price list.

use serde::{Deserialize, Serialize};

/// The vehicle classes priced by the toll operator.
///
/// The discriminant order matches the order of the prices in the toll
/// table, so [`VehicleType::index`] can be used to look up a price.
///
/// # Example
///
/// ```
/// use opass::models::VehicleType;
///
/// assert_eq!(VehicleType::Vehicle.index(), 1);
/// assert_eq!(VehicleType::from_index(3), Some(VehicleType::HeavyAxle4Plus));
/// assert_eq!(VehicleType::default(), VehicleType::Vehicle);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    /// Motorcycles.
    Motorcycle,
    /// Passenger vehicles.
    #[default]
    Vehicle,
    /// Heavy vehicles with 2 or 3 axles.
    HeavyAxle2to3,
    /// Heavy vehicles with 4 or more axles.
    HeavyAxle4Plus,
}

impl VehicleType {
    /// All vehicle types, in price-list order.
    pub const ALL: [VehicleType; 4] = [
        VehicleType::Motorcycle,
        VehicleType::Vehicle,
        VehicleType::HeavyAxle2to3,
        VehicleType::HeavyAxle4Plus,
    ];

    /// Returns the position of this vehicle type in a station's price list.
    pub fn index(self) -> usize {
        match self {
            VehicleType::Motorcycle => 0,
            VehicleType::Vehicle => 1,
            VehicleType::HeavyAxle2to3 => 2,
            VehicleType::HeavyAxle4Plus => 3,
        }
    }

    /// Returns the vehicle type stored at `index` of a price list, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            VehicleType::Motorcycle => "Motorcycle",
            VehicleType::Vehicle => "Vehicles",
            VehicleType::HeavyAxle2to3 => "Vehicles with 2-3 axes",
            VehicleType::HeavyAxle4Plus => "Vehicles with 4 or more axes",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
