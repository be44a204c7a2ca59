//! Raster - the in-memory image container
//!
//! `Raster` holds an RGBA8 image as packed 32-bit words, one pixel per
//! word in `0xRRGGBBAA` order, rows stored top to bottom with no padding.
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership);
//! `clone()` is cheap and shares storage. To modify pixel data, convert
//! to [`RasterMut`] via [`Raster::try_into_mut`] or [`Raster::to_mut`],
//! then convert back with `Into<Raster>`. Every transformation in this
//! workspace reads its input through `&Raster` and writes a freshly
//! allocated `RasterMut`, so inputs are never mutated.

mod access;
mod blit;
mod crop;
mod scan;

pub use scan::ScanDirection;

use crate::color::AlphaMode;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Upper bound on the number of pixel words in a single buffer.
///
/// Dimension pairs whose product exceeds this cannot be materialized and
/// are rejected with [`Error::AllocationFailed`] before any allocation
/// is attempted.
const MAX_PIXELS: u64 = u32::MAX as u64;

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Alpha interpretation, carried as metadata
    alpha_mode: AlphaMode,
    /// Packed `0xRRGGBBAA` words, row-major, `width * height` entries
    data: Vec<u32>,
}

/// An immutable RGBA8 image buffer.
///
/// # Examples
///
/// ```
/// use platen_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with all pixels set to fully transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0, or
    /// [`Error::AllocationFailed`] if the pixel count exceeds the
    /// addressable limit.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_alpha_mode(width, height, AlphaMode::default())
    }

    /// Create a new zero-filled raster with an explicit alpha mode.
    ///
    /// # Errors
    ///
    /// Same as [`Raster::new`].
    pub fn with_alpha_mode(width: u32, height: u32, alpha_mode: AlphaMode) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = u64::from(width) * u64::from(height);
        if len > MAX_PIXELS {
            return Err(Error::AllocationFailed);
        }

        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                alpha_mode,
                data: vec![0u32; len as usize],
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the alpha interpretation of this buffer.
    #[inline]
    pub fn alpha_mode(&self) -> AlphaMode {
        self.inner.alpha_mode
    }

    /// Get raw access to the packed pixel words.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the packed pixel words of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = y as usize * self.inner.width as usize;
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Get the number of strong references to this buffer.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create a new zero-filled raster with the same dimensions and
    /// alpha mode as this one.
    pub fn create_template(&self) -> Self {
        let len = self.inner.data.len();
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                alpha_mode: self.inner.alpha_mode,
                data: vec![0u32; len],
            }),
        }
    }

    /// Create a deep copy of this raster.
    ///
    /// Unlike `clone()` which shares data via `Arc`, this creates a
    /// completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                alpha_mode: self.inner.alpha_mode,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Check if two rasters have the same width, height, and alpha mode.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.alpha_mode == other.inner.alpha_mode
    }

    /// Check if two rasters have the same shape and identical pixels.
    pub fn pixels_equal(&self, other: &Raster) -> bool {
        self.sizes_equal(other) && self.inner.data == other.inner.data
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// A freshly created raster always has exactly one.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always copies, regardless of how many handles share the data.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                alpha_mode: self.inner.alpha_mode,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Allows modification of image data with exclusive access enforced at
/// compile time. Convert back to an immutable [`Raster`] with
/// `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the alpha interpretation of this buffer.
    #[inline]
    pub fn alpha_mode(&self) -> AlphaMode {
        self.inner.alpha_mode
    }

    /// Get raw access to the packed pixel words.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the packed pixel words.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = y as usize * self.inner.width as usize;
        let width = self.inner.width as usize;
        &mut self.inner.data[start..start + width]
    }
}

impl From<RasterMut> for Raster {
    fn from(raster: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster.inner),
        }
    }
}
