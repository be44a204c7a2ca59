//! platen - Deterministic raster geometry for document images
//!
//! platen provides the geometric transformations a document-image
//! pipeline needs between decode and recognition: resizing, clamped
//! cropping, rotation with bounding-box expansion, border composition,
//! and automatic whitespace trimming. Everything operates on in-memory
//! RGBA buffers; decoding, encoding, and skew-angle estimation are the
//! caller's collaborators.
//!
//! # Overview
//!
//! - [`Raster`] / [`RasterMut`] - the image container
//! - [`Rect`], [`Rgba`] - geometry and color value types
//! - [`transform`] - resize, rotate, border, trim, and deskew operations
//!
//! # Example
//!
//! ```
//! use platen::{Raster, Rgba};
//! use platen::transform::trim;
//!
//! let mut m = Raster::new(4, 4).unwrap().try_into_mut().unwrap();
//! m.fill(Rgba::WHITE);
//! m.set_rgba(1, 1, Rgba::BLACK).unwrap();
//! let page: Raster = m.into();
//!
//! let content = trim(&page);
//! assert_eq!((content.width(), content.height()), (1, 1));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use platen_core::*;

// Re-export the transform crate as a module
pub use platen_transform as transform;
