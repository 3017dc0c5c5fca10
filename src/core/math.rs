//! Pure numeric primitives.
//!
//! Nothing here touches calculator state. Domain checks live here so the
//! same rules apply to direct calls and to chained evaluation.

use super::error::CalcError;
use super::state::{AngleMode, Function, Operator};

/// Apply a binary operator.
///
/// `Divide` fails on a zero divisor. `Power` follows `f64::powf`, so a
/// negative base with a fractional exponent yields NaN.
pub fn binary(op: Operator, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Subtract => Ok(lhs - rhs),
        Operator::Multiply => Ok(lhs * rhs),
        Operator::Divide if rhs == 0.0 => Err(CalcError::DivisionByZero),
        Operator::Divide => Ok(lhs / rhs),
        Operator::Power => Ok(lhs.powf(rhs)),
    }
}

/// Apply a scientific function, converting trig inputs from degrees first
/// when `mode` says so.
pub fn unary(function: Function, x: f64, mode: AngleMode) -> Result<f64, CalcError> {
    let angle = match mode {
        AngleMode::Degrees if function.is_trigonometric() => degrees_to_radians(x),
        _ => x,
    };

    match function {
        Function::Sqrt if x < 0.0 => Err(CalcError::domain("Square root of negative number")),
        Function::Sqrt => Ok(x.sqrt()),
        Function::Ln if x <= 0.0 => Err(CalcError::domain("Logarithm of non-positive number")),
        Function::Ln => Ok(x.ln()),
        Function::Sin => Ok(angle.sin()),
        Function::Cos => Ok(angle.cos()),
        Function::Tan => Ok(angle.tan()),
    }
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}
