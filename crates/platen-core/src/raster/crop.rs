//! Rectangular crop with automatic bounds clamping

use super::Raster;
use crate::error::{Error, Result};
use crate::rect::Rect;

impl Raster {
    /// Extract a rectangular sub-region.
    ///
    /// A request of `None` returns a handle sharing this buffer's
    /// storage - no pixels are copied. Otherwise the rectangle is
    /// resolved against the buffer:
    ///
    /// - `x` and `y` are clamped up to 0.
    /// - Non-positive `w`/`h` are "unspecified" sentinels and resolve to
    ///   the full buffer width/height.
    /// - A rectangle extending past the right or bottom edge is reduced
    ///   to the part that overlaps the buffer.
    ///
    /// The destination is allocated only after the clamped region has
    /// been validated, so a failing crop never holds a partially built
    /// buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CropOutOfRange`] if the clamped region is empty
    /// (the origin lies at or beyond the buffer's extent) or the
    /// destination cannot be materialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use platen_core::{Raster, Rect};
    ///
    /// let raster = Raster::new(100, 80).unwrap();
    /// let cropped = raster.crop(Some(Rect::new(80, 60, 50, 50))).unwrap();
    /// assert_eq!(cropped.width(), 20);   // clamped: 100 - 80
    /// assert_eq!(cropped.height(), 20);  // clamped: 80 - 60
    /// ```
    pub fn crop(&self, region: Option<Rect>) -> Result<Raster> {
        let Some(region) = region else {
            return Ok(self.clone());
        };

        let src_w = i64::from(self.width());
        let src_h = i64::from(self.height());

        let x = i64::from(region.x.max(0));
        let y = i64::from(region.y.max(0));
        let mut w = if region.w > 0 {
            i64::from(region.w)
        } else {
            src_w
        };
        let mut h = if region.h > 0 {
            i64::from(region.h)
        } else {
            src_h
        };
        if x + w > src_w {
            w = src_w - x;
        }
        if y + h > src_h {
            h = src_h - y;
        }
        if w <= 0 || h <= 0 {
            return Err(Error::CropOutOfRange);
        }

        let dest = Raster::with_alpha_mode(w as u32, h as u32, self.alpha_mode())
            .map_err(|_| Error::CropOutOfRange)?;
        let mut dest = dest.try_into_mut().unwrap();
        dest.blit_from(self, 0, 0, x as u32, y as u32, w as u32, h as u32);
        Ok(dest.into())
    }
}
