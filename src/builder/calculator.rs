//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::config::CalculatorConfig;
use crate::core::AngleMode;
use crate::engine::Calculator;
use stillwater::validation::Validation;
use tracing::debug;

/// Builder for constructing calculators with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config = CalculatorConfig::from_json(json)?;
        Ok(Self { config })
    }

    /// Replace every setting at once.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    pub fn precision(mut self, digits: usize) -> Self {
        self.config.precision = digits;
        self
    }

    pub fn angle_mode(mut self, mode: AngleMode) -> Self {
        self.config.angle_mode = mode;
        self
    }

    /// Build the calculator.
    /// Returns every configuration problem found, not just the first.
    pub fn build(self) -> Result<Calculator, BuildError> {
        match self.config.validate() {
            Validation::Success(()) => {
                debug!(
                    history_capacity = self.config.history_capacity,
                    precision = self.config.precision,
                    angle_mode = self.config.angle_mode.name(),
                    "calculator built"
                );
                Ok(Calculator::from_state(self.config.initial_state()))
            }
            Validation::Failure(errors) => Err(BuildError::InvalidConfig(
                errors.iter().cloned().collect(),
            )),
        }
    }
}
