//! Error types for colony_core.
//!
//! Every fallible engine operation is rejected before it mutates any state,
//! so a returned error always leaves the grid and parameters untouched.

use thiserror::Error;

/// Main error type for colony_core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColonyError {
    /// Bulk replace buffer does not cover the grid exactly
    #[error("Invalid generation size: expected {expected} cells, got {actual}")]
    InvalidGenerationSize { expected: usize, actual: usize },

    /// Parameter outside its documented domain
    #[error("Invalid parameter range: {parameter} = {value} (expected {expected})")]
    InvalidParameterRange {
        parameter: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// Update rule tag outside the closed set
    #[error("Unsupported update rule: {0}")]
    UnsupportedUpdateRule(String),

    /// Weighting tag outside the closed set
    #[error("Unsupported weight function: {0}")]
    UnsupportedWeightFunction(String),

    /// Preset tag outside the closed set
    #[error("Unsupported preset: {0}")]
    UnsupportedPreset(String),

    /// Grid with a zero dimension
    #[error("Invalid grid dimensions: {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    /// Numeric text that is neither a decimal nor a fraction
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Malformed textual grid pattern
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

/// Result type alias for colony_core operations.
pub type Result<T> = std::result::Result<T, ColonyError>;

impl ColonyError {
    /// Creates a new out-of-range parameter error.
    #[must_use]
    pub fn out_of_range(parameter: &'static str, value: f64, expected: &'static str) -> Self {
        Self::InvalidParameterRange {
            parameter,
            value,
            expected,
        }
    }

    /// Creates a new unsupported update rule error.
    #[must_use]
    pub fn unsupported_rule<S: Into<String>>(tag: S) -> Self {
        Self::UnsupportedUpdateRule(tag.into())
    }

    /// Creates a new invalid number error.
    #[must_use]
    pub fn invalid_number<S: Into<String>>(text: S) -> Self {
        Self::InvalidNumber(text.into())
    }

    /// Creates a new invalid pattern error.
    #[must_use]
    pub fn invalid_pattern<S: Into<String>>(msg: S) -> Self {
        Self::InvalidPattern(msg.into())
    }
}
