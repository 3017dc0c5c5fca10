//! Calculator engine: the state-transition function and its owner.
//!
//! # Key Concepts
//!
//! - **Commands**: every user action is a [`Command`] value
//! - **Transitions**: [`apply`] maps `(state, command)` to `(state, outcome)`
//! - **Calculator**: owns one state and offers the named operations
//!
//! Errors are values. Direct calculations report [`CalcError`] to the caller;
//! a failing pending operation is turned into an error display by the
//! transition itself.

mod machine;
mod transition;

pub use crate::core::CalcError;
pub use machine::Calculator;
pub use transition::{apply, Command, Outcome};
