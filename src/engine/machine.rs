//! Calculator that owns one session state and runs commands against it.

use crate::builder::CalculatorBuilder;
use crate::core::{AngleMode, CalcError, CalculatorState, Function, History, Operator, Phase};
use crate::engine::transition::{
    append_digit, apply, compute_binary, compute_unary, Command, Outcome,
};
use tracing::{debug, trace};

/// Single-owner calculator session.
///
/// Stateful methods build a [`Command`], run it through [`apply`] and keep
/// the resulting state. Methods that yield a value call the same transition
/// helpers `apply` uses, so their `Result` comes straight from the engine.
/// Direct calculations return their errors; the entry state machine
/// (`append_digit`, `set_operation`, `evaluate`) turns failures of a pending
/// operation into an error display instead.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    /// Create a calculator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start configuring a calculator.
    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    pub fn from_state(state: CalculatorState) -> Self {
        Self { state }
    }

    /// Get the session state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn into_state(self) -> CalculatorState {
        self.state
    }

    /// Run one command and keep the resulting state.
    pub fn execute(&mut self, command: Command) -> Outcome {
        let state = std::mem::take(&mut self.state);
        let (state, outcome) = apply(state, command);
        self.state = state;

        if let Outcome::Failed(err) = &outcome {
            debug!(error = %err, "command failed");
        }
        outcome
    }

    fn compute<F>(&mut self, command: Command, step: F) -> Result<f64, CalcError>
    where
        F: FnOnce(&mut CalculatorState) -> Result<f64, CalcError>,
    {
        trace!(?command, phase = self.state.phase().name(), "applying command");

        let result = step(&mut self.state);
        if let Err(err) = &result {
            debug!(error = %err, "command failed");
        }
        result
    }

    fn binary(&mut self, op: Operator, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        self.compute(Command::Binary { op, lhs, rhs }, |state| {
            compute_binary(state, op, lhs, rhs)
        })
    }

    fn unary(&mut self, function: Function, input: f64) -> Result<f64, CalcError> {
        self.compute(Command::Unary { function, input }, |state| {
            compute_unary(state, function, input)
        })
    }

    pub fn add(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.binary(Operator::Add, a, b)
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.binary(Operator::Subtract, a, b)
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.binary(Operator::Multiply, a, b)
    }

    /// Fails with [`CalcError::DivisionByZero`] when `b == 0`.
    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.binary(Operator::Divide, a, b)
    }

    pub fn power(&mut self, base: f64, exp: f64) -> Result<f64, CalcError> {
        self.binary(Operator::Power, base, exp)
    }

    /// Fails with [`CalcError::Domain`] when `x < 0`.
    pub fn sqrt(&mut self, x: f64) -> Result<f64, CalcError> {
        self.unary(Function::Sqrt, x)
    }

    /// Fails with [`CalcError::Domain`] when `x <= 0`.
    pub fn ln(&mut self, x: f64) -> Result<f64, CalcError> {
        self.unary(Function::Ln, x)
    }

    pub fn sin(&mut self, x: f64) -> Result<f64, CalcError> {
        self.unary(Function::Sin, x)
    }

    pub fn cos(&mut self, x: f64) -> Result<f64, CalcError> {
        self.unary(Function::Cos, x)
    }

    pub fn tan(&mut self, x: f64) -> Result<f64, CalcError> {
        self.unary(Function::Tan, x)
    }

    pub fn memory_store(&mut self) {
        self.execute(Command::MemoryStore);
    }

    /// Put the memory value on the display and return it.
    pub fn memory_recall(&mut self) -> f64 {
        self.execute(Command::MemoryRecall);
        self.state.memory_value()
    }

    pub fn memory_clear(&mut self) {
        self.execute(Command::MemoryClear);
    }

    pub fn memory_add(&mut self) {
        self.execute(Command::MemoryAdd);
    }

    pub fn memory_subtract(&mut self) {
        self.execute(Command::MemorySubtract);
    }

    pub fn memory_value(&self) -> f64 {
        self.state.memory_value()
    }

    /// Append a digit, decimal point or sign to the current entry.
    ///
    /// Returns the re-parsed current value, or [`CalcError::Parse`] while
    /// the entry text is not yet a number.
    pub fn append_digit(&mut self, digit: char) -> Result<f64, CalcError> {
        self.compute(Command::AppendDigit(digit), |state| {
            append_digit(state, digit)
        })
    }

    pub fn set_operation(&mut self, op: Operator) {
        self.execute(Command::SetOperation(op));
    }

    /// Evaluate the pending operation and return the new display text.
    pub fn evaluate(&mut self) -> &str {
        self.execute(Command::Evaluate);
        self.state.display_text()
    }

    pub fn clear(&mut self) {
        self.execute(Command::Clear);
    }

    /// Ordered snapshot of the history, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.state.history().snapshot()
    }

    pub fn history_log(&self) -> &History {
        self.state.history()
    }

    pub fn clear_history(&mut self) {
        self.execute(Command::ClearHistory);
    }

    pub fn display_text(&self) -> &str {
        self.state.display_text()
    }

    pub fn current_value(&self) -> f64 {
        self.state.current_value()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Whether the display currently shows an error message.
    pub fn is_error(&self) -> bool {
        self.state.phase().is_error()
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.state.angle_mode()
    }

    /// Switch between radians and degrees, returning the new mode.
    pub fn toggle_angle_mode(&mut self) -> AngleMode {
        self.execute(Command::ToggleAngleMode);
        self.state.angle_mode()
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        self.execute(Command::SetAngleMode(mode));
    }
}
