//! Configuration error types

use thiserror::Error;

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
///
/// Absence of a value is never an error: every pipeline stage signals it as
/// `Option::None` and the caller substitutes a default. These variants are
/// the hard failures that abort a resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Raw string cannot be converted to the target representation
    #[error("Cannot parse '{value}': expected {expected}")]
    Format { value: String, expected: String },

    /// Converted value violates a declared constraint
    #[error("Invalid value '{value}': {constraint}")]
    Constraint { value: String, constraint: String },

    /// Invalid type configuration, raised when the type is built
    #[error("Invalid type configuration: {0}")]
    Construction(String),

    /// IO error reading a properties file
    #[error("Failed to read properties file: {0}")]
    FileReadError(#[from] std::io::Error),
}

impl ConfigError {
    /// Format error naming the offending value and the expected form
    pub fn format(value: impl Into<String>, expected: impl Into<String>) -> Self {
        ConfigError::Format {
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Constraint violation naming the offending value and the violated rule
    pub fn constraint(value: impl std::fmt::Display, constraint: impl Into<String>) -> Self {
        ConfigError::Constraint {
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }
}
