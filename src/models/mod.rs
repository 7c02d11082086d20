//! Core data models for the toll pass calculator.
//!
//! This module contains the domain models shared by the pricing engine,
//! the business day calculator and the interactive form.

mod pass_source;
mod selection;
mod station;
mod vehicle;

pub use pass_source::{PASSES_PER_WORKING_DAY, PassSource};
pub use selection::Selection;
pub use station::{StationCategory, TollStation};
pub use vehicle::VehicleType;
