//! Form output types.
//!
//! A [`FormResponse`] is the text shown in the result pane: either the
//! priced breakdown with its total, or the validation messages explaining
//! why nothing was priced.

use crate::calculation::{MonthlyCost, ReportLine, render_report};
use crate::error::EngineError;

use super::options::month_name;

const BLUE: &str = "\x1b[0;94m";
const RED: &str = "\x1b[0;91;1m";
const NONE: &str = "\x1b[0m";

/// Message shown when no toll station is selected.
pub const NO_TOLLS_SELECTED: &str = "Please select Tolls (Frontal and/or Ramp)";

/// How a message is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    /// A line of the cost breakdown.
    Breakdown,
    /// The grand total.
    Total,
    /// A validation message.
    Error,
}

/// A single line of the result pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    /// How the line is highlighted.
    pub style: MessageStyle,
    /// The text of the line.
    pub text: String,
}

impl FormMessage {
    /// Creates a validation message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            style: MessageStyle::Error,
            text: text.into(),
        }
    }

    /// Returns the text wrapped in ANSI colour codes.
    pub fn styled(&self) -> String {
        let colour = match self.style {
            MessageStyle::Breakdown => BLUE,
            MessageStyle::Total | MessageStyle::Error => RED,
        };
        format!("{}{}{}", colour, self.text, NONE)
    }
}

impl From<ReportLine> for FormMessage {
    fn from(line: ReportLine) -> Self {
        let style = if line.is_total() {
            MessageStyle::Total
        } else {
            MessageStyle::Breakdown
        };
        Self {
            style,
            text: line.to_string(),
        }
    }
}

impl From<&EngineError> for FormMessage {
    fn from(error: &EngineError) -> Self {
        let text = match error {
            EngineError::StationNotFound { name } => {
                format!("Unknown toll station '{}'", name)
            }
            EngineError::InvalidInput { field, message } => match field.as_str() {
                "tolls" => NO_TOLLS_SELECTED.to_string(),
                "passes" => format!("Please specify the monthly passes: {}", message),
                "vehicle" => format!("Please select Vehicle Type: {}", message),
                "month" => format!("Please select a month: {}", message),
                _ => format!("Invalid {}: {}", field, message),
            },
            EngineError::InvalidMonth { month } => match month_name(*month) {
                Some(name) => format!("Cannot count working days of {}", name),
                None => format!("Please select a month: {} is not a month", month),
            },
            other => other.to_string(),
        };
        FormMessage::error(text)
    }
}

/// The content of the result pane after pressing calculate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResponse {
    /// The lines to show, in order.
    pub messages: Vec<FormMessage>,
    /// The priced month, absent when validation failed.
    pub cost: Option<MonthlyCost>,
}

impl FormResponse {
    /// Builds the response for a successfully priced month.
    pub fn priced(cost: MonthlyCost) -> Self {
        let messages = render_report(&cost).into_iter().map(FormMessage::from).collect();
        Self {
            messages,
            cost: Some(cost),
        }
    }

    /// Builds the response for a form that failed validation.
    pub fn rejected<'a>(errors: impl IntoIterator<Item = &'a EngineError>) -> Self {
        Self {
            messages: errors.into_iter().map(FormMessage::from).collect(),
            cost: None,
        }
    }

    /// Returns true if nothing was priced.
    pub fn is_error(&self) -> bool {
        self.cost.is_none()
    }

    /// Renders every message on its own line, with colours if `styled`.
    pub fn render(&self, styled: bool) -> String {
        self.messages
            .iter()
            .map(|m| if styled { m.styled() } else { m.text.clone() })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_monthly_cost;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_priced_response_styles_total() {
        let cost = compute_monthly_cost(Decimal::from_str("2.80").unwrap(), 7).unwrap();
        let response = FormResponse::priced(cost);

        assert!(!response.is_error());
        assert_eq!(response.messages.len(), 3);
        assert_eq!(response.messages[0].style, MessageStyle::Breakdown);
        assert_eq!(response.messages[2].style, MessageStyle::Total);
        assert_eq!(
            response.render(false),
            "Passes 01 - 05: 2.80 €\nPasses 06 - 07: 2.38 €\nTotal cost: 18.76 €"
        );
    }

    #[test]
    fn test_styled_render_wraps_lines_in_colour() {
        let message = FormMessage::error(NO_TOLLS_SELECTED);
        assert_eq!(
            message.styled(),
            format!("{}{}{}", RED, NO_TOLLS_SELECTED, NONE)
        );
    }

    #[test]
    fn test_no_tolls_error_message() {
        let error = EngineError::InvalidInput {
            field: "tolls".to_string(),
            message: "no station selected".to_string(),
        };
        assert_eq!(FormMessage::from(&error).text, NO_TOLLS_SELECTED);
    }

    #[test]
    fn test_rejected_response_has_no_cost() {
        let errors = vec![
            EngineError::StationNotFound {
                name: "Atlantis".to_string(),
            },
            EngineError::InvalidMonth { month: 13 },
        ];
        let response = FormResponse::rejected(&errors);

        assert!(response.is_error());
        assert!(response.messages.iter().all(|m| m.style == MessageStyle::Error));
        assert_eq!(response.messages[0].text, "Unknown toll station 'Atlantis'");
        assert_eq!(
            response.messages[1].text,
            "Please select a month: 13 is not a month"
        );
    }
}
