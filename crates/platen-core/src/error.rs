//! Error types for platen-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// platen-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// A crop region that cannot be materialized from the source
    #[error("crop rectangle is larger than the input image")]
    CropOutOfRange,

    /// Pixel coordinates outside the buffer
    #[error("pixel index out of bounds: ({x}, {y}) in {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Buffer allocation failed or would exceed the addressable limit
    #[error("buffer allocation failed")]
    AllocationFailed,
}

/// Result type alias for platen operations
pub type Result<T> = std::result::Result<T, Error>;
