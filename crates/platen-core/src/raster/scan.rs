//! Content-edge scanning
//!
//! Linear scans along one axis that find the first row or column
//! containing a non-background pixel. Four such scans compose the tight
//! content bounding box that whitespace trimming crops to.
//!
//! # Foreground predicate
//!
//! A pixel counts as content when it is not fully transparent AND at
//! least one of its R/G/B/A components differs from the background
//! color. The predicate is the same for all four scan directions:
//! fully transparent pixels are background on every edge, even when
//! their stored RGB differs from the background.

use super::Raster;
use crate::color::Rgba;
use crate::rect::Rect;

/// Direction for scanning a raster to find the content edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Scan from left edge toward right
    FromLeft,
    /// Scan from right edge toward left
    FromRight,
    /// Scan from top edge toward bottom
    FromTop,
    /// Scan from bottom edge toward top
    FromBot,
}

/// Whether `pixel` is content against `background`.
#[inline]
fn is_content(pixel: Rgba, background: Rgba) -> bool {
    !pixel.is_fully_transparent() && pixel != background
}

impl Raster {
    /// Scan from the specified direction to the first row or column that
    /// contains a content pixel.
    ///
    /// For [`ScanDirection::FromLeft`] and [`ScanDirection::FromRight`]
    /// the returned value is a column index; for the other two it is a
    /// row index. The scan is deterministic: columns (or rows) are
    /// visited in the documented direction, each one top-to-bottom
    /// (left-to-right), and the first hit wins.
    ///
    /// Returns `None` if the entire raster is background.
    pub fn scan_content_edge(&self, background: Rgba, direction: ScanDirection) -> Option<u32> {
        let w = self.width();
        let h = self.height();

        match direction {
            ScanDirection::FromLeft => {
                for x in 0..w {
                    for y in 0..h {
                        if is_content(self.get_rgba_unchecked(x, y), background) {
                            return Some(x);
                        }
                    }
                }
            }
            ScanDirection::FromRight => {
                for x in (0..w).rev() {
                    for y in 0..h {
                        if is_content(self.get_rgba_unchecked(x, y), background) {
                            return Some(x);
                        }
                    }
                }
            }
            ScanDirection::FromTop => {
                for y in 0..h {
                    for x in 0..w {
                        if is_content(self.get_rgba_unchecked(x, y), background) {
                            return Some(y);
                        }
                    }
                }
            }
            ScanDirection::FromBot => {
                for y in (0..h).rev() {
                    for x in 0..w {
                        if is_content(self.get_rgba_unchecked(x, y), background) {
                            return Some(y);
                        }
                    }
                }
            }
        }

        None
    }

    /// Find the tightest rectangle enclosing all content pixels.
    ///
    /// Composes the four edge scans. Returns `None` if the raster is
    /// uniformly background under the scan predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use platen_core::{Raster, Rect, Rgba};
    ///
    /// let mut m = Raster::new(4, 4).unwrap().try_into_mut().unwrap();
    /// m.fill(Rgba::WHITE);
    /// m.set_rgba(1, 2, Rgba::BLACK).unwrap();
    /// let raster: Raster = m.into();
    ///
    /// assert_eq!(
    ///     raster.content_box(Rgba::WHITE),
    ///     Some(Rect::new(1, 2, 1, 1))
    /// );
    /// ```
    pub fn content_box(&self, background: Rgba) -> Option<Rect> {
        let left = self.scan_content_edge(background, ScanDirection::FromLeft)?;
        let right = self.scan_content_edge(background, ScanDirection::FromRight)?;
        let top = self.scan_content_edge(background, ScanDirection::FromTop)?;
        let bottom = self.scan_content_edge(background, ScanDirection::FromBot)?;

        Some(Rect::new(
            left as i32,
            top as i32,
            (right - left + 1) as i32,
            (bottom - top + 1) as i32,
        ))
    }
}
