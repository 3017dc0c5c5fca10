//! Calculator configuration.
//!
//! Settings are plain serde data. Validation uses Stillwater's `Validation`
//! so every problem in a configuration is reported in one pass.
//!
//! # Example
//!
//! ```rust
//! use abacus::config::CalculatorConfig;
//! use abacus::core::AngleMode;
//!
//! let config = CalculatorConfig::from_json(r#"{ "angle_mode": "degrees" }"#).unwrap();
//!
//! assert_eq!(config.angle_mode, AngleMode::Degrees);
//! assert_eq!(config.history_capacity, 100);
//! assert!(config.validate().is_success());
//! ```

pub mod error;

pub use error::ConfigError;

use crate::core::{AngleMode, CalculatorState, DEFAULT_HISTORY_CAPACITY, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Largest number of fractional digits the display will render.
pub const MAX_PRECISION: usize = 15;

/// Largest history the engine will keep.
pub const MAX_HISTORY_CAPACITY: usize = 10_000;

/// Settings for a calculator session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Maximum number of history entries kept
    pub history_capacity: usize,
    /// Fractional digits used for display and history
    pub precision: usize,
    /// Angle mode the session starts in
    pub angle_mode: AngleMode,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            precision: DEFAULT_PRECISION,
            angle_mode: AngleMode::default(),
        }
    }
}

impl CalculatorConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Check every setting, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let capacity: Validation<(), NonEmptyVec<ConfigError>> = if self.history_capacity == 0 {
            Validation::fail(ConfigError::ZeroHistoryCapacity)
        } else if self.history_capacity > MAX_HISTORY_CAPACITY {
            Validation::fail(ConfigError::HistoryCapacityTooLarge {
                capacity: self.history_capacity,
                max: MAX_HISTORY_CAPACITY,
            })
        } else {
            Validation::success(())
        };

        let precision: Validation<(), NonEmptyVec<ConfigError>> = if self.precision > MAX_PRECISION
        {
            Validation::fail(ConfigError::PrecisionTooHigh {
                precision: self.precision,
                max: MAX_PRECISION,
            })
        } else {
            Validation::success(())
        };

        Validation::all_vec(vec![capacity, precision]).map(|_| ())
    }

    /// Fresh session state using these settings.
    pub fn initial_state(&self) -> CalculatorState {
        CalculatorState::new(self.history_capacity, self.precision, self.angle_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_standard_session() {
        let config = CalculatorConfig::default();

        assert_eq!(config.history_capacity, 100);
        assert_eq!(config.precision, 6);
        assert_eq!(config.angle_mode, AngleMode::Radians);
        assert!(config.validate().is_success());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config = CalculatorConfig::from_json(r#"{ "precision": 3 }"#).unwrap();

        assert_eq!(config.precision, 3);
        assert_eq!(config.history_capacity, 100);
        assert_eq!(config.angle_mode, AngleMode::Radians);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = CalculatorConfig::from_json("{ precision: }");
        assert!(matches!(result, Err(ConfigError::Malformed(_))));

        let result = CalculatorConfig::from_json(r#"{ "angle_mode": "gradians" }"#);
        assert!(matches!(result, Err(ConfigError::Malformed(_))));
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = CalculatorConfig {
            history_capacity: 0,
            precision: 40,
            angle_mode: AngleMode::Degrees,
        };

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::ZeroHistoryCapacity)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::PrecisionTooHigh { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn oversized_history_is_rejected() {
        let config = CalculatorConfig {
            history_capacity: MAX_HISTORY_CAPACITY + 1,
            ..CalculatorConfig::default()
        };

        assert!(config.validate().is_failure());
    }

    #[test]
    fn initial_state_uses_settings() {
        let config = CalculatorConfig {
            history_capacity: 5,
            precision: 2,
            angle_mode: AngleMode::Degrees,
        };
        let state = config.initial_state();

        assert_eq!(state.history().capacity(), 5);
        assert_eq!(state.precision(), 2);
        assert_eq!(state.angle_mode(), AngleMode::Degrees);
        assert_eq!(state.display_text(), "0");
    }

    #[test]
    fn config_roundtrip_serialization() {
        let config = CalculatorConfig {
            history_capacity: 25,
            precision: 4,
            angle_mode: AngleMode::Degrees,
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized = CalculatorConfig::from_json(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
