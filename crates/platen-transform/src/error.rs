//! Error types for platen-transform

use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] platen_core::Error),

    /// Invalid scale factor
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(String),

    /// Invalid transformation parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The injected skew estimator could not produce an angle
    #[error("skew estimation failed: {0}")]
    EstimatorFailed(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
