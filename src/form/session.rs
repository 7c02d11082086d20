//! Interactive terminal form.
//!
//! The form lists the stations and vehicle types, prompts for each field,
//! and prints the result pane. It reads from any [`BufRead`] and writes to
//! any [`Write`], so it can be driven from tests as well as a terminal.

use std::io::{self, BufRead, Write};

use chrono::{Datelike, NaiveDate};

use crate::models::{StationCategory, VehicleType};

use super::handlers::submit;
use super::options::{month_name, station_options, vehicle_options};
use super::request::FormInput;
use super::state::FormState;

/// Title printed above the form.
pub const FORM_TITLE: &str = "Olympia Odos Pass";

/// Options controlling how the form is shown.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// The date used for the default month and year.
    pub today: NaiveDate,
    /// Whether to colour the result pane with ANSI codes.
    pub styled: bool,
}

/// Runs the form until the user declines another calculation or input ends.
///
/// # Example
///
/// ```
/// use opass::config::TollTableLoader;
/// use opass::form::{FormState, SessionOptions, run_session};
/// use chrono::NaiveDate;
///
/// let state = FormState::new(TollTableLoader::bundled().unwrap());
/// let options = SessionOptions {
///     today: NaiveDate::from_ymd_opt(2018, 1, 15).unwrap(),
///     styled: false,
/// };
/// let input = "Elefsina\n\n22\nn\n";
/// let mut output = Vec::new();
///
/// run_session(&state, input.as_bytes(), &mut output, options).unwrap();
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("Total cost: 48.86 €"));
/// ```
pub fn run_session<R: BufRead, W: Write>(
    state: &FormState,
    mut input: R,
    mut output: W,
    options: SessionOptions,
) -> io::Result<()> {
    print_choices(state, &mut output)?;

    loop {
        let Some(form) = read_form(&mut input, &mut output, options.today)? else {
            break;
        };

        let response = submit(state, &form, options.today);
        writeln!(output)?;
        writeln!(output, "{}", response.render(options.styled))?;
        writeln!(output)?;

        let again = prompt(&mut input, &mut output, "Calculate again? [y/N]: ")?;
        if !again.is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y")) {
            break;
        }
    }

    output.flush()
}

fn print_choices<W: Write>(state: &FormState, output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", FORM_TITLE)?;
    let options = station_options(state.table());

    for (category, heading) in [
        (StationCategory::Frontal, "Select Frontal Tolls"),
        (StationCategory::Ramp, "Select Ramp Tolls"),
    ] {
        writeln!(output)?;
        writeln!(output, "{}", heading)?;
        for option in options.iter().filter(|o| o.category == category) {
            writeln!(output, "  {:>2}. {}", option.number, option.name)?;
        }
    }

    writeln!(output)?;
    writeln!(output, "Select Vehicle Type")?;
    for (number, vehicle) in vehicle_options() {
        writeln!(output, "  {:>2}. {}", number, vehicle)?;
    }
    writeln!(output)
}

/// Prompts for every field; `None` means input ended.
fn read_form<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    today: NaiveDate,
) -> io::Result<Option<FormInput>> {
    let mut form = FormInput::default();

    let Some(stations) = prompt(input, output, "Tolls (numbers or names, comma separated): ")? else {
        return Ok(None);
    };
    form.stations = stations;

    let vehicle_prompt = format!(
        "Vehicle type [{}]: ",
        VehicleType::default().index() + 1
    );
    let Some(vehicle) = prompt(input, output, &vehicle_prompt)? else {
        return Ok(None);
    };
    form.vehicle = vehicle;

    let Some(passes) = prompt(
        input,
        output,
        "Monthly number of passes (empty to use the working days of a month): ",
    )?
    else {
        return Ok(None);
    };
    form.passes = passes;

    if form.passes.trim().is_empty() {
        let month_prompt = format!("Month [{}]: ", month_name(today.month()).unwrap_or_default());
        let Some(month) = prompt(input, output, &month_prompt)? else {
            return Ok(None);
        };
        form.month = month;

        let Some(year) = prompt(input, output, &format!("Year [{}]: ", today.year()))? else {
            return Ok(None);
        };
        form.year = year;
    }

    Ok(Some(form))
}

/// Writes `text` and reads one line, without its line ending.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
