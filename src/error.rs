//! Error types for the toll pass calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading the toll table,
//! pricing passes or counting business days.

use thiserror::Error;

/// The main error type for the toll pass calculator.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use opass::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tolls.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Toll table not found: /missing/tolls.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The toll table file was not found at the specified path.
    #[error("Toll table not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The toll table file could not be parsed or failed validation.
    #[error("Failed to parse toll table '{path}': {message}")]
    ConfigParseError {
        /// The path (or source label) of the table that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A selected station does not exist in the toll table.
    #[error("Toll station not found: {name}")]
    StationNotFound {
        /// The station name that was not found.
        name: String,
    },

    /// A month outside 1-12 was supplied.
    #[error("Invalid month {month}: expected a value between 1 and 12")]
    InvalidMonth {
        /// The rejected month number.
        month: u32,
    },

    /// A year that cannot be represented as a calendar date.
    #[error("Invalid year {year}")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },

    /// A user-supplied value failed validation.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
