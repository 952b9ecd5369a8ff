//! Error types for SWT text detection.

use thiserror::Error;

/// Top-level error type for the detection pipeline.
///
/// Degenerate gradients and unbounded walks are not errors: those pixels
/// simply contribute no ray.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SwtError {
    /// Edge mask or gradient fields are empty or disagree in shape.
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A configuration value is out of range.
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    /// The preprocessor could not use the supplied image.
    #[error("Image error: {0}")]
    Image(String),
}

impl SwtError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        SwtError::InvalidInput { reason: reason.into() }
    }

    pub fn config(reason: impl Into<String>) -> Self {
        SwtError::Config { reason: reason.into() }
    }
}

/// Result alias used across the swt crates.
pub type Result<T> = std::result::Result<T, SwtError>;
