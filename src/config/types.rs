//! Configuration types for the toll table.
//!
//! This module contains the raw structure deserialized from the toll table
//! file and the validated [`TollTable`] built from it.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{StationCategory, TollStation};

/// Toll table file structure.
///
/// Each category maps a station name to its price list. The lists are
/// checked for length when the [`TollTable`] is built.
#[derive(Debug, Clone, Deserialize)]
pub struct TollTableFile {
    /// Main-line stations.
    #[serde(rename = "Frontal")]
    pub frontal: BTreeMap<String, Vec<Decimal>>,
    /// Ramp stations.
    #[serde(rename = "Ramp")]
    pub ramp: BTreeMap<String, Vec<Decimal>>,
}

/// The complete, validated toll table.
///
/// Stations are kept grouped by category (frontal first) and sorted by
/// name within each group. Station names are unique across categories.
#[derive(Debug, Clone, Default)]
pub struct TollTable {
    stations: Vec<TollStation>,
}

impl TollTable {
    /// Creates a table from already validated stations.
    pub fn new(stations: Vec<TollStation>) -> Self {
        let mut sorted = stations;
        sorted.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
        Self { stations: sorted }
    }

    /// Builds a table from a deserialized file, validating every entry.
    ///
    /// `source` names the file (or bundled table) in error messages.
    pub fn from_file(file: TollTableFile, source: &str) -> EngineResult<Self> {
        let mut stations = Vec::with_capacity(file.frontal.len() + file.ramp.len());

        let categories = [
            (StationCategory::Frontal, file.frontal),
            (StationCategory::Ramp, file.ramp),
        ];
        for (category, entries) in categories {
            for (name, prices) in entries {
                if stations.iter().any(|s: &TollStation| s.name == name) {
                    return Err(parse_error(
                        source,
                        format!("station '{}' appears in more than one category", name),
                    ));
                }
                let prices: [Decimal; 4] = prices.try_into().map_err(|p: Vec<Decimal>| {
                    parse_error(
                        source,
                        format!("station '{}' has {} prices, expected 4", name, p.len()),
                    )
                })?;
                if prices.iter().any(|p| p.is_sign_negative()) {
                    return Err(parse_error(
                        source,
                        format!("station '{}' has a negative price", name),
                    ));
                }
                stations.push(TollStation {
                    name,
                    category,
                    prices,
                });
            }
        }

        Ok(Self::new(stations))
    }

    /// Returns every station, frontal stations first.
    pub fn stations(&self) -> &[TollStation] {
        &self.stations
    }

    /// Returns the stations of one category.
    pub fn by_category(&self, category: StationCategory) -> impl Iterator<Item = &TollStation> {
        self.stations.iter().filter(move |s| s.category == category)
    }

    /// Looks up a station by name.
    pub fn get(&self, name: &str) -> Option<&TollStation> {
        self.stations.iter().find(|s| s.name == name)
    }

    /// Looks up a station by name, failing with `StationNotFound`.
    pub fn station(&self, name: &str) -> EngineResult<&TollStation> {
        self.get(name).ok_or_else(|| EngineError::StationNotFound {
            name: name.to_string(),
        })
    }

    /// Returns the total number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the table has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

fn parse_error(source: &str, message: String) -> EngineError {
    EngineError::ConfigParseError {
        path: source.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn prices(values: &[&str]) -> Vec<Decimal> {
        values.iter().map(|v| dec(v)).collect()
    }

    fn create_test_file() -> TollTableFile {
        let mut frontal = BTreeMap::new();
        frontal.insert("Rio".to_string(), prices(&["1.10", "2.20", "5.50", "7.70"]));
        frontal.insert("Elefsina".to_string(), prices(&["1.40", "2.80", "7.00", "9.90"]));
        let mut ramp = BTreeMap::new();
        ramp.insert("Megara".to_string(), prices(&["0.50", "1.00", "2.50", "3.50"]));
        TollTableFile { frontal, ramp }
    }

    #[test]
    fn test_from_file_orders_frontal_first_then_by_name() {
        let table = TollTable::from_file(create_test_file(), "test").unwrap();
        let names: Vec<&str> = table.stations().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Elefsina", "Rio", "Megara"]);
    }

    #[test]
    fn test_by_category_filters_stations() {
        let table = TollTable::from_file(create_test_file(), "test").unwrap();
        assert_eq!(table.by_category(StationCategory::Frontal).count(), 2);
        assert_eq!(table.by_category(StationCategory::Ramp).count(), 1);
    }

    #[test]
    fn test_station_lookup() {
        let table = TollTable::from_file(create_test_file(), "test").unwrap();
        let megara = table.station("Megara").unwrap();
        assert_eq!(megara.category, StationCategory::Ramp);
        assert!(table.get("Atlantis").is_none());
        assert!(matches!(
            table.station("Atlantis"),
            Err(EngineError::StationNotFound { .. })
        ));
    }

    #[test]
    fn test_wrong_price_count_is_rejected() {
        let mut file = create_test_file();
        file.ramp.insert("Kiato".to_string(), prices(&["0.55", "1.10"]));

        match TollTable::from_file(file, "tolls.yaml") {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert_eq!(path, "tolls.yaml");
                assert_eq!(message, "station 'Kiato' has 2 prices, expected 4");
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let mut file = create_test_file();
        file.ramp.insert("Kiato".to_string(), prices(&["0.55", "-1.10", "2.75", "3.85"]));
        assert!(matches!(
            TollTable::from_file(file, "test"),
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_duplicate_station_across_categories_is_rejected() {
        let mut file = create_test_file();
        file.ramp.insert("Rio".to_string(), prices(&["0.10", "0.20", "0.30", "0.40"]));
        match TollTable::from_file(file, "test") {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("'Rio'"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
