//! Calculation error types.

use thiserror::Error;

/// Errors produced by calculator operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    #[error("Division by zero")]
    DivisionByZero,

    /// Input outside the function's real domain
    #[error("{0}")]
    Domain(String),

    /// Entry text that does not read as a number
    #[error("Invalid number: '{text}'")]
    Parse { text: String },

    #[error("Unknown operator '{0}'")]
    UnknownOperator(char),
}

impl CalcError {
    pub fn domain(reason: impl Into<String>) -> Self {
        Self::Domain(reason.into())
    }

    pub fn parse(text: impl Into<String>) -> Self {
        Self::Parse { text: text.into() }
    }

    /// Text shown on the display when a chained evaluation fails.
    pub fn display_message(&self) -> String {
        format!("Error: {self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(
            CalcError::domain("Square root of negative number").to_string(),
            "Square root of negative number"
        );
        assert_eq!(CalcError::parse("1.2.3").to_string(), "Invalid number: '1.2.3'");
    }

    #[test]
    fn display_message_is_prefixed() {
        assert_eq!(
            CalcError::DivisionByZero.display_message(),
            "Error: Division by zero"
        );
    }
}
