//! platen-core - Raster buffer and geometry foundation
//!
//! This crate provides the data structures shared by every platen
//! transformation:
//!
//! - [`Raster`] / [`RasterMut`] - the RGBA8 image container
//!   (immutable shared handle / exclusive mutable form)
//! - [`Rect`] - rectangle regions, with "use full extent" sentinels in
//!   crop requests
//! - [`Rgba`] / [`AlphaMode`] - color values and alpha interpretation
//! - pixel access, region blit, clamped crop, and content-edge scanning
//!
//! All operations treat their input as read-only and produce new
//! buffers; `Raster` handles are `Send + Sync` and freely shareable
//! across threads.

pub mod color;
pub mod error;
pub mod raster;
pub mod rect;

pub use color::{AlphaMode, Rgba};
pub use error::{Error, Result};
pub use raster::{Raster, RasterMut, ScanDirection};
pub use rect::Rect;
