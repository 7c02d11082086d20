//! Form input types.
//!
//! [`FormInput`] holds the text typed into each field of the form.
//! Parsing it against the toll table produces a [`FormRequest`] ready for
//! the pricing engine, or the list of problems found.

use chrono::{Datelike, NaiveDate};

use crate::config::TollTable;
use crate::error::EngineError;
use crate::models::{PassSource, Selection, VehicleType};

use super::options::parse_month;

/// The raw text of every form field.
///
/// Empty fields fall back to defaults: the passenger vehicle type, the
/// current month and the current year. An empty pass count means the count
/// is derived from the month's business days.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    /// Station numbers or names, separated by commas.
    pub stations: String,
    /// Vehicle type number, 1 to 4.
    pub vehicle: String,
    /// Monthly number of passes.
    pub passes: String,
    /// Month whose business days give the pass count.
    pub month: String,
    /// Year used for the bank holidays.
    pub year: String,
}

/// A parsed form, ready to be priced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    /// The stations and vehicle type.
    pub selection: Selection,
    /// Where the pass count comes from.
    pub passes: PassSource,
}

impl FormInput {
    /// Parses every field, collecting all problems rather than stopping at
    /// the first one.
    ///
    /// `today` supplies the default month and year.
    ///
    /// # Example
    ///
    /// ```
    /// use opass::config::TollTableLoader;
    /// use opass::form::FormInput;
    /// use opass::models::{PassSource, VehicleType};
    /// use chrono::NaiveDate;
    ///
    /// let loader = TollTableLoader::bundled().unwrap();
    /// let input = FormInput {
    ///     stations: "Elefsina, megara".to_string(),
    ///     vehicle: "1".to_string(),
    ///     ..Default::default()
    /// };
    /// let today = NaiveDate::from_ymd_opt(2018, 4, 2).unwrap();
    ///
    /// let request = input.parse(loader.table(), today).unwrap();
    /// assert_eq!(request.selection.vehicle, VehicleType::Motorcycle);
    /// assert_eq!(request.passes, PassSource::WorkingDays { month: 4, year: 2018 });
    /// ```
    pub fn parse(&self, table: &TollTable, today: NaiveDate) -> Result<FormRequest, Vec<EngineError>> {
        let mut errors = Vec::new();

        let vehicle = parse_vehicle(&self.vehicle).unwrap_or_else(|e| {
            errors.push(e);
            VehicleType::default()
        });

        let mut selection = Selection::new(vehicle);
        for token in self.stations.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match resolve_station(token, table) {
                Ok(name) => selection = selection.with_station(name),
                Err(e) => errors.push(e),
            }
        }

        let passes = match parse_passes(&self.passes) {
            Ok(Some(count)) => Some(PassSource::Manual(count)),
            Ok(None) => {
                let month = if self.month.trim().is_empty() {
                    Some(today.month())
                } else {
                    parse_month(&self.month).or_else(|| {
                        errors.push(invalid("month", "expected a month number or name"));
                        None
                    })
                };
                let year = parse_year(&self.year, today.year()).unwrap_or_else(|e| {
                    errors.push(e);
                    today.year()
                });
                month.map(|month| PassSource::WorkingDays { month, year })
            }
            Err(e) => {
                errors.push(e);
                None
            }
        };

        match passes {
            Some(passes) if errors.is_empty() => Ok(FormRequest { selection, passes }),
            _ => Err(errors),
        }
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidInput {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn parse_vehicle(input: &str) -> Result<VehicleType, EngineError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(VehicleType::default());
    }
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| VehicleType::from_index(n.checked_sub(1)?))
        .ok_or_else(|| invalid("vehicle", "expected a number between 1 and 4"))
}

/// Resolves a station typed as its option number or its name.
fn resolve_station(token: &str, table: &TollTable) -> Result<String, EngineError> {
    if let Ok(number) = token.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| table.stations().get(index))
            .map(|station| station.name.clone())
            .ok_or_else(|| EngineError::StationNotFound {
                name: token.to_string(),
            });
    }
    table
        .stations()
        .iter()
        .find(|station| station.name.eq_ignore_ascii_case(token))
        .map(|station| station.name.clone())
        .ok_or_else(|| EngineError::StationNotFound {
            name: token.to_string(),
        })
}

/// Only digits are accepted, so negative counts are rejected here.
fn parse_passes(input: &str) -> Result<Option<u32>, EngineError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    if !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("passes", "expected a whole number of passes"));
    }
    input
        .parse::<u32>()
        .map(Some)
        .map_err(|_| invalid("passes", "number of passes is too large"))
}

fn parse_year(input: &str, default: i32) -> Result<i32, EngineError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    input
        .parse::<i32>()
        .ok()
        .filter(|year| NaiveDate::from_ymd_opt(*year, 1, 1).is_some())
        .ok_or_else(|| invalid("year", "expected a calendar year"))
}
