//! Form handlers.
//!
//! These functions run when the user presses calculate: they validate the
//! form, resolve the day cost and pass count, and price the month.

use std::time::Instant;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::calculation::compute_monthly_cost;
use crate::error::EngineError;

use super::request::{FormInput, FormRequest};
use super::response::FormResponse;
use super::state::FormState;

/// Parses the raw form fields and prices the month.
///
/// # Example
///
/// ```
/// use opass::config::TollTableLoader;
/// use opass::form::{FormInput, FormState, submit};
/// use chrono::NaiveDate;
///
/// let state = FormState::new(TollTableLoader::bundled().unwrap());
/// let input = FormInput {
///     stations: "Elefsina".to_string(),
///     passes: "22".to_string(),
///     ..Default::default()
/// };
/// let today = NaiveDate::from_ymd_opt(2018, 1, 15).unwrap();
///
/// let response = submit(&state, &input, today);
/// assert_eq!(response.messages.last().unwrap().text, "Total cost: 48.86 €");
/// ```
pub fn submit(state: &FormState, input: &FormInput, today: NaiveDate) -> FormResponse {
    match input.parse(state.table(), today) {
        Ok(request) => calculate(state, &request),
        Err(errors) => {
            warn!(problems = errors.len(), "Form input rejected");
            FormResponse::rejected(&errors)
        }
    }
}

/// Prices a parsed form.
///
/// An empty selection, or one whose day cost is zero, is rejected with the
/// "select tolls" message and nothing is priced.
pub fn calculate(state: &FormState, request: &FormRequest) -> FormResponse {
    let start_time = Instant::now();

    let day_cost = match request.selection.day_cost(state.table()) {
        Ok(cost) => cost,
        Err(err) => return reject(err),
    };
    if request.selection.is_empty() || day_cost.is_zero() {
        return reject(EngineError::InvalidInput {
            field: "tolls".to_string(),
            message: "no toll station selected".to_string(),
        });
    }

    let pass_count = match request.passes.resolve() {
        Ok(count) => count,
        Err(err) => return reject(err),
    };

    match compute_monthly_cost(day_cost, pass_count) {
        Ok(cost) => {
            info!(
                stations = request.selection.stations.len(),
                vehicle = %request.selection.vehicle,
                day_cost = %day_cost,
                pass_count,
                total = %cost.total,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            FormResponse::priced(cost)
        }
        Err(err) => reject(err),
    }
}

fn reject(err: EngineError) -> FormResponse {
    warn!(error = %err, "Calculation failed");
    FormResponse::rejected([&err])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TollTableLoader;
    use crate::form::response::{MessageStyle, NO_TOLLS_SELECTED};
    use crate::models::{PassSource, Selection, VehicleType};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn create_test_state() -> FormState {
        FormState::new(TollTableLoader::bundled().unwrap())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 1, 15).unwrap()
    }

    #[test]
    fn test_calculate_manual_passes() {
        let request = FormRequest {
            selection: Selection::new(VehicleType::Vehicle).with_station("Elefsina"),
            passes: PassSource::Manual(22),
        };
        let response = calculate(&create_test_state(), &request);

        let cost = response.cost.as_ref().unwrap();
        assert_eq!(cost.pass_count, 22);
        assert_eq!(cost.total, Decimal::from_str("48.86").unwrap());
        assert_eq!(response.messages.len(), 5);
    }

    #[test]
    fn test_calculate_working_days_passes() {
        // January 2018 has 22 business days: 44 passes
        let request = FormRequest {
            selection: Selection::new(VehicleType::Vehicle).with_station("Elefsina"),
            passes: PassSource::WorkingDays { month: 1, year: 2018 },
        };
        let response = calculate(&create_test_state(), &request);
        assert_eq!(response.cost.unwrap().pass_count, 44);
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let request = FormRequest {
            selection: Selection::new(VehicleType::Vehicle),
            passes: PassSource::Manual(10),
        };
        let response = calculate(&create_test_state(), &request);

        assert!(response.is_error());
        assert_eq!(response.messages.len(), 1);
        assert_eq!(response.messages[0].style, MessageStyle::Error);
        assert_eq!(response.messages[0].text, NO_TOLLS_SELECTED);
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        let request = FormRequest {
            selection: Selection::new(VehicleType::Vehicle).with_station("Rio"),
            passes: PassSource::WorkingDays { month: 0, year: 2018 },
        };
        assert!(calculate(&create_test_state(), &request).is_error());
    }

    #[test]
    fn test_submit_reports_parse_errors() {
        let input = FormInput {
            stations: "Atlantis".to_string(),
            passes: "ten".to_string(),
            ..Default::default()
        };
        let response = submit(&create_test_state(), &input, today());

        assert!(response.is_error());
        assert_eq!(response.messages.len(), 2);
    }

    #[test]
    fn test_submit_without_tolls_is_rejected() {
        let input = FormInput {
            passes: "10".to_string(),
            ..Default::default()
        };
        let response = submit(&create_test_state(), &input, today());
        assert_eq!(response.messages[0].text, NO_TOLLS_SELECTED);
    }
}
