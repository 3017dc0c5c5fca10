//! Calculator state and the small value types it is built from.
//!
//! Everything here is plain data. State changes happen exclusively through
//! [`crate::engine::apply`], which consumes a state and returns the next one.

use super::error::CalcError;
use super::format::{format_with_precision, DEFAULT_PRECISION};
use super::history::{History, DEFAULT_HISTORY_CAPACITY};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interpretation of trigonometric inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Radians,
    Degrees,
}

impl AngleMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Radians => Self::Degrees,
            Self::Degrees => Self::Radians,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Radians => "Radians",
            Self::Degrees => "Degrees",
        }
    }
}

/// Binary operator awaiting its right operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Symbol used in history records.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
            Self::Power => '^',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    /// Parse the operator characters a console shell hands over.
    ///
    /// # Example
    ///
    /// ```rust
    /// use abacus::core::Operator;
    ///
    /// assert_eq!(Operator::try_from('*').unwrap(), Operator::Multiply);
    /// assert_eq!(Operator::try_from('÷').unwrap(), Operator::Divide);
    /// assert!(Operator::try_from('%').is_err());
    /// ```
    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' | '×' => Ok(Self::Multiply),
            '/' | '÷' => Ok(Self::Divide),
            '^' => Ok(Self::Power),
            other => Err(CalcError::UnknownOperator(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Single-argument scientific function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    Sqrt,
    Ln,
    Sin,
    Cos,
    Tan,
}

impl Function {
    pub fn name(&self) -> &str {
        match self {
            Self::Sqrt => "√",
            Self::Ln => "ln",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }

    /// Whether the input is measured in the current angle mode.
    pub fn is_trigonometric(&self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }
}

/// What the display is currently showing.
///
/// The distinction between `Result` and `Error` is display-only: both accept
/// a fresh first operand next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    EnteringFirstOperand,
    OperatorSelected,
    EnteringSecondOperand,
    Result,
    Error,
}

impl Phase {
    pub fn name(&self) -> &str {
        match self {
            Self::EnteringFirstOperand => "EnteringFirstOperand",
            Self::OperatorSelected => "OperatorSelected",
            Self::EnteringSecondOperand => "EnteringSecondOperand",
            Self::Result => "Result",
            Self::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Complete state of one calculator session.
#[derive(Clone, Debug)]
pub struct CalculatorState {
    pub(crate) current_value: f64,
    pub(crate) stored_value: f64,
    pub(crate) memory_value: f64,
    pub(crate) pending: Option<Operator>,
    pub(crate) entering_new_number: bool,
    pub(crate) display_text: String,
    pub(crate) angle_mode: AngleMode,
    pub(crate) phase: Phase,
    pub(crate) precision: usize,
    pub(crate) history: History,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY, DEFAULT_PRECISION, AngleMode::default())
    }
}

impl CalculatorState {
    /// Fresh session state: every register zero, display `"0"`.
    pub fn new(history_capacity: usize, precision: usize, angle_mode: AngleMode) -> Self {
        Self {
            current_value: 0.0,
            stored_value: 0.0,
            memory_value: 0.0,
            pending: None,
            entering_new_number: true,
            display_text: "0".to_string(),
            angle_mode,
            phase: Phase::EnteringFirstOperand,
            precision,
            history: History::with_capacity(history_capacity),
        }
    }

    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    pub fn stored_value(&self) -> f64 {
        self.stored_value
    }

    pub fn memory_value(&self) -> f64 {
        self.memory_value
    }

    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    pub fn is_entering_new_number(&self) -> bool {
        self.entering_new_number
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Format a number with this session's precision.
    pub fn format(&self, value: f64) -> String {
        format_with_precision(value, self.precision)
    }

    /// Show `value` on the display as the current value.
    pub(crate) fn show(&mut self, value: f64) {
        self.current_value = value;
        self.display_text = self.format(value);
    }

    pub(crate) fn record(&mut self, entry: String) {
        self.history.push(entry);
    }
}
