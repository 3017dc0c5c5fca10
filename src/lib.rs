//! Abacus: a deterministic calculator engine
//!
//! Abacus follows a "pure core, imperative shell" layout. The calculator's
//! state is plain data, and every change to it goes through a single pure
//! transition function, `apply(state, command) -> (state, outcome)`.
//! Console loops, menus and rendering belong to the caller.
//!
//! # Core Concepts
//!
//! - **State**: `CalculatorState` holds the entry, pending operator, memory
//!   register, angle mode and a bounded history
//! - **Commands**: each user action is a `Command` value
//! - **Outcomes**: results and errors are returned, never thrown
//! - **History**: append-only log with FIFO eviction (100 entries by default)
//!
//! # Example
//!
//! ```rust
//! use abacus::{Calculator, Operator};
//!
//! let mut calc = Calculator::new();
//!
//! calc.append_digit('5').unwrap();
//! calc.set_operation(Operator::Add);
//! calc.append_digit('3').unwrap();
//! assert_eq!(calc.evaluate(), "8");
//!
//! calc.set_operation(Operator::Multiply);
//! calc.append_digit('2').unwrap();
//! assert_eq!(calc.evaluate(), "16");
//!
//! assert!(calc.divide(1.0, 0.0).is_err());
//! assert_eq!(calc.history(), vec!["5 + 3 = 8", "8 × 2 = 16"]);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use config::{CalculatorConfig, ConfigError};
pub use crate::core::{
    format_number, AngleMode, CalculatorState, Function, History, Operator, Phase,
};
pub use engine::{apply, CalcError, Calculator, Command, Outcome};
