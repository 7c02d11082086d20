//! Integration tests for the toll pass calculator.
//!
//! This test suite covers the full path from the toll table to the result
//! pane:
//! - Day cost from selected stations and vehicle types
//! - Manually entered pass counts
//! - Pass counts derived from business days
//! - The open-ended band beyond 60 passes
//! - Validation errors
//! - The interactive session

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use opass::calculation::{business_days_in_month, compute_monthly_cost, render_report};
use opass::config::{TableFormat, TollTableLoader};
use opass::form::{FormInput, FormState, MessageStyle, SessionOptions, run_session, submit};
use opass::models::{PassSource, Selection, VehicleType};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> FormState {
    let loader = TollTableLoader::load("./config/tolls.yaml").expect("Failed to load toll table");
    FormState::new(loader)
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 6, 11).unwrap()
}

fn form(stations: &str, vehicle: &str, passes: &str) -> FormInput {
    FormInput {
        stations: stations.to_string(),
        vehicle: vehicle.to_string(),
        passes: passes.to_string(),
        ..Default::default()
    }
}

fn result_lines(state: &FormState, input: &FormInput) -> Vec<String> {
    submit(state, input, today())
        .messages
        .into_iter()
        .map(|m| m.text)
        .collect()
}

// =============================================================================
// Day cost
// =============================================================================

#[test]
fn test_day_cost_for_frontal_and_ramp_stations() {
    let state = create_test_state();
    let selection = Selection::new(VehicleType::Vehicle)
        .with_station("Elefsina")
        .with_station("Megara")
        .with_station("Kiato");

    // 2.80 + 1.00 + 1.10
    assert_eq!(selection.day_cost(state.table()).unwrap(), decimal("4.90"));
}

#[test]
fn test_day_cost_changes_with_vehicle_type() {
    let state = create_test_state();
    let selection = Selection::new(VehicleType::Motorcycle).with_station("Elefsina");
    assert_eq!(selection.day_cost(state.table()).unwrap(), decimal("1.40"));

    let selection = selection.with_vehicle(VehicleType::HeavyAxle2to3);
    assert_eq!(selection.day_cost(state.table()).unwrap(), decimal("7.00"));
}

// =============================================================================
// Manual pass counts
// =============================================================================

#[test]
fn test_twenty_two_passes_through_elefsina() {
    let state = create_test_state();
    let lines = result_lines(&state, &form("Elefsina", "2", "22"));

    assert_eq!(
        lines,
        vec![
            "Passes 01 - 05: 2.80 €",
            "Passes 06 - 10: 2.38 €",
            "Passes 11 - 20: 1.96 €",
            "Passes 21 - 22: 1.68 €",
            "Total cost: 48.86 €",
        ]
    );
}

#[test]
fn test_zero_passes_reports_zero_total() {
    let state = create_test_state();
    let lines = result_lines(&state, &form("Elefsina", "", "0"));
    assert_eq!(lines, vec!["Total cost: 0.00 €"]);
}

#[test]
fn test_heavy_vehicle_with_several_stations() {
    let state = create_test_state();
    let response = submit(&state, &form("Elefsina, Pachi, Megara", "4", "12"), today());

    // 9.90 + 8.80 + 3.50 = 22.20
    let cost = response.cost.unwrap();
    assert_eq!(cost.day_cost, decimal("22.20"));
    // 5 * 22.20 + 5 * 18.87 + 2 * 15.54
    assert_eq!(cost.total, decimal("236.43"));
}

// =============================================================================
// Open-ended band
// =============================================================================

#[test]
fn test_passes_beyond_sixty_are_reported() {
    let state = create_test_state();
    let lines = result_lines(&state, &form("Rio", "", "65"));

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[5], "Passes 41 - 60: 0.88 €");
    assert_eq!(lines[6], "Passes 61+: 2.20 €");
    // 60 discounted passes at 2.20 = 77.55, plus 5 * 2.20
    assert_eq!(lines[7], "Total cost: 88.55 €");
}

// =============================================================================
// Business day derived pass counts
// =============================================================================

#[test]
fn test_pass_count_from_january_2018() {
    let state = create_test_state();
    let mut input = form("Elefsina", "", "");
    input.month = "1".to_string();
    input.year = "2018".to_string();

    let response = submit(&state, &input, today());
    let cost = response.cost.unwrap();
    assert_eq!(cost.pass_count, 2 * business_days_in_month(1, 2018).unwrap());
    assert_eq!(cost.pass_count, 44);
}

#[test]
fn test_pass_count_defaults_to_current_month() {
    let state = create_test_state();
    let response = submit(&state, &form("Elefsina", "", ""), today());

    // June 2018: 21 weekdays, no bank holidays (Whit Monday fell on May 28)
    assert_eq!(response.cost.unwrap().pass_count, 42);
}

#[test]
fn test_pass_source_resolution_matches_engine() {
    let passes = PassSource::WorkingDays { month: 4, year: 2018 }.resolve().unwrap();
    let cost = compute_monthly_cost(decimal("2.80"), passes).unwrap();
    let rendered: Vec<String> = render_report(&cost).iter().map(|l| l.to_string()).collect();

    assert_eq!(passes, 38);
    assert_eq!(rendered[4], "Passes 31 - 38: 1.40 €");
}

// =============================================================================
// Validation errors
// =============================================================================

#[test]
fn test_no_tolls_selected() {
    let state = create_test_state();
    let response = submit(&state, &form("", "", "20"), today());

    assert!(response.is_error());
    assert_eq!(response.messages.len(), 1);
    assert_eq!(response.messages[0].style, MessageStyle::Error);
    assert_eq!(response.messages[0].text, "Please select Tolls (Frontal and/or Ramp)");
}

#[test]
fn test_invalid_pass_count() {
    let state = create_test_state();
    let response = submit(&state, &form("Elefsina", "", "2x"), today());

    assert!(response.is_error());
    assert!(response.messages[0].text.starts_with("Please specify the monthly passes"));
}

#[test]
fn test_unknown_station() {
    let state = create_test_state();
    let lines = result_lines(&state, &form("Elefsina, Atlantis", "", "5"));
    assert_eq!(lines, vec!["Unknown toll station 'Atlantis'"]);
}

// =============================================================================
// Alternative table formats
// =============================================================================

#[test]
fn test_json_table_prices_the_same_as_yaml() {
    let json = r#"{
        "Frontal": { "Elefsina": [1.40, 2.80, 7.00, 9.90] },
        "Ramp": {}
    }"#;
    let loader = TollTableLoader::parse(json, TableFormat::Json, "tolls.json").unwrap();
    let state = FormState::new(loader);

    let lines = result_lines(&state, &form("Elefsina", "", "22"));
    assert_eq!(lines.last().unwrap(), "Total cost: 48.86 €");
}

// =============================================================================
// Interactive session
// =============================================================================

#[test]
fn test_session_end_to_end() {
    let state = create_test_state();
    let options = SessionOptions {
        today: today(),
        styled: false,
    };
    let input = "1\n2\n22\ny\nMegara\n1\n\n5\n2018\nn\n";
    let mut output = Vec::new();

    run_session(&state, input.as_bytes(), &mut output, options).unwrap();
    let text = String::from_utf8(output).unwrap();

    // Station 1 is Elaionas (frontal stations are listed alphabetically)
    assert!(text.contains("  1. Elaionas"));
    // 5 * 2.90 + 5 * 2.465 + 10 * 2.03 + 2 * 1.74 = 50.605
    assert!(text.contains("Total cost: 50.61 €"));
    // Megara by motorcycle, May 2018: 42 passes at 0.50 before discounts
    assert!(text.contains("Passes 41 - 42: 0.20 €"));
}

#[test]
fn test_styled_session_colours_result() {
    let state = create_test_state();
    let options = SessionOptions {
        today: today(),
        styled: true,
    };
    let mut output = Vec::new();

    run_session(&state, "Rio\n\n3\nn\n".as_bytes(), &mut output, options).unwrap();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\x1b[0;91;1mTotal cost: 6.60 €\x1b[0m"));
}
