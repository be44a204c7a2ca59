//! platen-transform - Geometric transformations for platen
//!
//! This crate provides the derived operations over
//! [`Raster`](platen_core::Raster) buffers:
//!
//! - Resizing: uniform scale, exact-size subset extraction, and
//!   exact-size with an independent draw ratio
//! - Rotation by arbitrary angles with bounding-box canvas expansion
//! - Border composition (fill + scale-to-fit + centered draw)
//! - Whitespace trimming (never fails; falls back to a copy)
//! - Skew-angle consumption via an injected [`SkewEstimator`]
//!
//! Every operation reads its input immutably and returns a freshly
//! allocated buffer.

pub mod border;
pub mod deskew;
mod error;
pub mod rotate;
mod sample;
pub mod scale;
pub mod trim;

pub use border::add_border;
pub use deskew::{FixedAngle, SkewEstimator, deskew, skew_angle};
pub use error::{TransformError, TransformResult};
pub use rotate::{RotateFill, rotate, rotate_with_fill, rotated_bounds};
pub use scale::{ScaleMethod, resize_scale, resize_scale_with_method, resize_to, resize_with_ratio};
pub use trim::{trim, trim_with_background};
