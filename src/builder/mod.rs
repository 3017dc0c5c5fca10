//! Builder API for ergonomic calculator construction.
//!
//! # Example
//!
//! ```
//! use abacus::builder::CalculatorBuilder;
//! use abacus::core::AngleMode;
//!
//! let mut calc = CalculatorBuilder::new()
//!     .angle_mode(AngleMode::Degrees)
//!     .precision(4)
//!     .build()
//!     .unwrap();
//!
//! calc.tan(45.0).unwrap();
//! assert_eq!(calc.history(), vec!["tan(45) = 1"]);
//! ```

pub mod calculator;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use error::BuildError;
