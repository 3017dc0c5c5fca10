//! Build errors for the calculator builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid calculator configuration: {}", join_errors(.0))]
    InvalidConfig(Vec<ConfigError>),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
