//! The calculator's state-transition function.
//!
//! [`apply`] consumes a [`CalculatorState`] and a [`Command`] and returns the
//! next state together with an [`Outcome`]. Every state change in the crate
//! goes through here. Commands that always produce a value or an error are
//! handled by helpers returning `Result`, which [`Calculator`] calls
//! directly.
//!
//! [`Calculator`]: crate::engine::Calculator

use crate::core::{
    binary, unary, AngleMode, CalcError, CalculatorState, Function, Operator, Phase,
};
use tracing::{debug, trace};

/// A single request made of the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Direct binary calculation, independent of the entry state
    Binary { op: Operator, lhs: f64, rhs: f64 },

    /// Direct scientific calculation, independent of the entry state
    Unary { function: Function, input: f64 },

    MemoryStore,
    MemoryRecall,
    MemoryClear,
    MemoryAdd,
    MemorySubtract,

    /// Append one character to the number being entered
    AppendDigit(char),

    /// Select the next binary operator, evaluating any pending one first
    SetOperation(Operator),

    /// The `=` key
    Evaluate,

    Clear,
    ClearHistory,
    ToggleAngleMode,
    SetAngleMode(AngleMode),
}

/// What a command produced besides the new state.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// State changed, nothing to report
    Applied,

    /// Command produced a value
    Value(f64),

    /// Command failed; the returned state carries no trace of the failed
    /// operation in its history
    Failed(CalcError),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl From<Result<f64, CalcError>> for Outcome {
    fn from(result: Result<f64, CalcError>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(err) => Self::Failed(err),
        }
    }
}

/// Run one command against a state.
///
/// Failures of direct calculations come back as [`Outcome::Failed`]. A
/// failing pending operation (through `Evaluate` or `SetOperation`) is
/// instead absorbed into the state: the display shows `"Error: <message>"`
/// and the phase becomes [`Phase::Error`].
///
/// # Example
///
/// ```rust
/// use abacus::core::{CalculatorState, Operator};
/// use abacus::engine::{apply, Command, Outcome};
///
/// let state = CalculatorState::default();
/// let (state, _) = apply(state, Command::AppendDigit('5'));
/// let (state, _) = apply(state, Command::SetOperation(Operator::Add));
/// let (state, _) = apply(state, Command::AppendDigit('3'));
/// let (state, outcome) = apply(state, Command::Evaluate);
///
/// assert_eq!(outcome, Outcome::Value(8.0));
/// assert_eq!(state.display_text(), "8");
/// assert_eq!(state.history().last(), Some("5 + 3 = 8"));
/// ```
pub fn apply(mut state: CalculatorState, command: Command) -> (CalculatorState, Outcome) {
    trace!(?command, phase = state.phase.name(), "applying command");

    let outcome = match command {
        Command::Binary { op, lhs, rhs } => compute_binary(&mut state, op, lhs, rhs).into(),
        Command::Unary { function, input } => compute_unary(&mut state, function, input).into(),
        Command::MemoryStore => {
            state.memory_value = state.current_value;
            let entry = format!("M← {}", state.format(state.current_value));
            state.record(entry);
            Outcome::Applied
        }
        Command::MemoryRecall => {
            let value = state.memory_value;
            state.show(value);
            state.entering_new_number = true;
            state.phase = if state.pending.is_some() {
                Phase::EnteringSecondOperand
            } else {
                Phase::Result
            };
            let entry = format!("MR {}", state.display_text);
            state.record(entry);
            Outcome::Value(value)
        }
        Command::MemoryClear => {
            state.memory_value = 0.0;
            state.record("MC".to_string());
            Outcome::Applied
        }
        Command::MemoryAdd => {
            state.memory_value += state.current_value;
            let entry = format!("M+ {}", state.format(state.current_value));
            state.record(entry);
            Outcome::Applied
        }
        Command::MemorySubtract => {
            state.memory_value -= state.current_value;
            let entry = format!("M- {}", state.format(state.current_value));
            state.record(entry);
            Outcome::Applied
        }
        Command::AppendDigit(digit) => append_digit(&mut state, digit).into(),
        Command::SetOperation(op) => {
            evaluate(&mut state);
            state.stored_value = state.current_value;
            state.pending = Some(op);
            state.entering_new_number = true;
            if !state.phase.is_error() {
                state.phase = Phase::OperatorSelected;
            }
            Outcome::Applied
        }
        Command::Evaluate => evaluate(&mut state),
        Command::Clear => {
            state.current_value = 0.0;
            state.stored_value = 0.0;
            state.pending = None;
            state.display_text = "0".to_string();
            state.entering_new_number = true;
            state.phase = Phase::EnteringFirstOperand;
            Outcome::Applied
        }
        Command::ClearHistory => {
            state.history.clear();
            Outcome::Applied
        }
        Command::ToggleAngleMode => {
            state.angle_mode = state.angle_mode.toggled();
            Outcome::Applied
        }
        Command::SetAngleMode(mode) => {
            state.angle_mode = mode;
            Outcome::Applied
        }
    };

    (state, outcome)
}

pub(crate) fn compute_binary(
    state: &mut CalculatorState,
    op: Operator,
    lhs: f64,
    rhs: f64,
) -> Result<f64, CalcError> {
    let result = binary(op, lhs, rhs)?;
    let (a, b, r) = (state.format(lhs), state.format(rhs), state.format(result));
    let entry = match op {
        Operator::Power => format!("{a}^{b} = {r}"),
        _ => format!("{a} {op} {b} = {r}"),
    };
    state.record(entry);
    Ok(result)
}

pub(crate) fn compute_unary(
    state: &mut CalculatorState,
    function: Function,
    input: f64,
) -> Result<f64, CalcError> {
    let result = unary(function, input, state.angle_mode)?;
    let entry = format!(
        "{}({}) = {}",
        function.name(),
        state.format(input),
        state.format(result)
    );
    state.record(entry);
    Ok(result)
}

pub(crate) fn append_digit(state: &mut CalculatorState, digit: char) -> Result<f64, CalcError> {
    if state.entering_new_number {
        state.display_text = digit.to_string();
        state.entering_new_number = false;
        state.phase = if state.pending.is_some() {
            Phase::EnteringSecondOperand
        } else {
            Phase::EnteringFirstOperand
        };
    } else {
        state.display_text.push(digit);
    }

    // An unparsable entry keeps its text so a following digit can complete it.
    let value = state
        .display_text
        .parse::<f64>()
        .map_err(|_| CalcError::parse(state.display_text.clone()))?;
    state.current_value = value;
    Ok(value)
}

fn evaluate(state: &mut CalculatorState) -> Outcome {
    let Some(op) = state.pending.take() else {
        return Outcome::Applied;
    };

    let (lhs, rhs) = (state.stored_value, state.current_value);
    let outcome = match compute_binary(state, op, lhs, rhs) {
        Ok(result) => {
            state.show(result);
            state.phase = Phase::Result;
            Outcome::Value(result)
        }
        Err(err) => {
            debug!(%op, lhs, rhs, error = %err, "pending operation failed");
            state.display_text = err.display_message();
            state.current_value = 0.0;
            state.phase = Phase::Error;
            Outcome::Applied
        }
    };
    state.entering_new_number = true;
    outcome
}
