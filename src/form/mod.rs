//! Interactive form for the toll pass calculator.
//!
//! This module is the presentation layer: it offers the station, vehicle
//! and month choices, parses what the user typed, runs the calculation and
//! renders the result pane.

mod handlers;
mod options;
mod request;
mod response;
mod session;
mod state;

pub use handlers::{calculate, submit};
pub use options::{
    MONTH_NAMES, StationOption, month_name, parse_month, station_options, vehicle_options,
};
pub use request::{FormInput, FormRequest};
pub use response::{FormMessage, FormResponse, MessageStyle, NO_TOLLS_SELECTED};
pub use session::{FORM_TITLE, SessionOptions, run_session};
pub use state::FormState;
