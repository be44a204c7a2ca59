//! Pixel access
//!
//! Checked accessors return `Option`/`Result`; the unchecked forms are
//! for inner loops that have already validated their bounds and panic on
//! misuse.

use super::{Raster, RasterMut};
use crate::color::Rgba;
use crate::error::{Error, Result};

impl Raster {
    /// Get a packed pixel word at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a packed pixel word without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[y as usize * self.inner.width as usize + x as usize]
    }

    /// Get the color at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<Rgba> {
        self.get_pixel(x, y).map(Rgba::from_pixel)
    }

    /// Get the color at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_rgba_unchecked(&self, x: u32, y: u32) -> Rgba {
        Rgba::from_pixel(self.get_pixel_unchecked(x, y))
    }
}

impl RasterMut {
    /// Get a packed pixel word at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a packed pixel word without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[y as usize * self.inner.width as usize + x as usize]
    }

    /// Set a packed pixel word at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of
    /// bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a packed pixel word without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let width = self.inner.width as usize;
        self.inner.data[y as usize * width + x as usize] = val;
    }

    /// Set the color at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of
    /// bounds.
    pub fn set_rgba(&mut self, x: u32, y: u32, color: Rgba) -> Result<()> {
        self.set_pixel(x, y, color.to_pixel())
    }

    /// Fill the entire buffer with one color.
    pub fn fill(&mut self, color: Rgba) {
        let val = color.to_pixel();
        self.data_mut().fill(val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip() {
        let base = Raster::new(8, 8).unwrap();
        let mut m = base.try_into_mut().unwrap();
        m.set_rgba(3, 5, Rgba::new(10, 20, 30, 40)).unwrap();
        // Readable through the mutable form too
        assert_eq!(m.get_pixel(3, 5), Some(0x0A141E28));
        assert_eq!(m.get_pixel_unchecked(3, 5), 0x0A141E28);
        let raster: Raster = m.into();

        assert_eq!(raster.get_rgba(3, 5), Some(Rgba::new(10, 20, 30, 40)));
        assert_eq!(raster.get_pixel(3, 5), Some(0x0A141E28));
    }

    #[test]
    fn test_out_of_bounds() {
        let base = Raster::new(4, 4).unwrap();
        let mut m = base.try_into_mut().unwrap();
        assert!(matches!(
            m.set_pixel(4, 0, 0),
            Err(Error::IndexOutOfBounds { .. })
        ));
        let raster: Raster = m.into();
        assert_eq!(raster.get_pixel(0, 4), None);
        assert_eq!(raster.get_rgba(4, 0), None);
    }

    #[test]
    fn test_fill() {
        let base = Raster::new(5, 3).unwrap();
        let mut m = base.try_into_mut().unwrap();
        m.fill(Rgba::WHITE);
        assert!(m.data().iter().all(|&p| p == 0xFFFFFFFF));
        let raster: Raster = m.into();
        assert!(raster.data().iter().all(|&p| p == 0xFFFFFFFF));
    }
}
