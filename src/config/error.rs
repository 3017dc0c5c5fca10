//! Configuration error types.

use thiserror::Error;

/// Problems found while loading or validating a [`super::CalculatorConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("History capacity must be at least 1")]
    ZeroHistoryCapacity,

    #[error("History capacity {capacity} exceeds the maximum of {max}")]
    HistoryCapacityTooLarge { capacity: usize, max: usize },

    #[error("Precision {precision} exceeds the maximum of {max} digits")]
    PrecisionTooHigh { precision: usize, max: usize },

    /// Configuration text could not be deserialized
    #[error("Malformed configuration: {0}")]
    Malformed(String),
}
