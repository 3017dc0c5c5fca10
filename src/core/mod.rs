//! Core calculator types and pure functions.
//!
//! This module contains the pure part of the engine:
//! - Session state and the value types it is made of
//! - The bounded history log
//! - Number formatting
//! - The calculation error type
//! - Arithmetic and scientific primitives
//!
//! Nothing in this module performs I/O.

mod error;
mod format;
mod history;
mod math;
mod state;

pub use error::CalcError;
pub use format::{format_number, format_with_precision, DEFAULT_PRECISION};
pub use history::{History, HistoryEntry, DEFAULT_HISTORY_CAPACITY};
pub use math::{binary, degrees_to_radians, radians_to_degrees, unary};
pub use state::{AngleMode, CalculatorState, Function, Operator, Phase};
