//! Automatic whitespace trimming
//!
//! Finds the tightest rectangle enclosing all non-background content and
//! crops to it. Trimming never fails observably: a raster with no
//! detectable content comes back as an unmodified independent copy.

use platen_core::{Raster, Rgba};

/// Trim surrounding whitespace against an opaque white background.
///
/// Equivalent to [`trim_with_background`] with [`Rgba::WHITE`].
///
/// # Examples
///
/// ```
/// use platen_core::{Raster, Rgba};
/// use platen_transform::trim;
///
/// let mut m = Raster::new(4, 4).unwrap().try_into_mut().unwrap();
/// m.fill(Rgba::WHITE);
/// m.set_rgba(1, 1, Rgba::BLACK).unwrap();
/// let raster: Raster = m.into();
///
/// let trimmed = trim(&raster);
/// assert_eq!((trimmed.width(), trimmed.height()), (1, 1));
/// assert_eq!(trimmed.get_rgba(0, 0), Some(Rgba::BLACK));
/// ```
pub fn trim(src: &Raster) -> Raster {
    trim_with_background(src, Rgba::WHITE)
}

/// Trim surrounding areas matching `background`.
///
/// The content box is found by the four edge scans of
/// [`Raster::content_box`]; the same transparency-aware predicate
/// applies to every edge, so fully transparent pixels never count as
/// content regardless of their stored color.
///
/// If the raster is uniformly background, there is nothing to crop to:
/// the failure is swallowed, a warning is logged, and an independent
/// deep copy of the input is returned with its original dimensions.
pub fn trim_with_background(src: &Raster, background: Rgba) -> Raster {
    let Some(bounds) = src.content_box(background) else {
        log::warn!(
            "trim: no content found in {}x{} raster, returning unmodified copy",
            src.width(),
            src.height()
        );
        return src.deep_clone();
    };

    match src.crop(Some(bounds)) {
        Ok(trimmed) => trimmed,
        Err(err) => {
            log::warn!("trim: crop of content box failed ({err}), returning unmodified copy");
            src.deep_clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platen_core::Rect;

    fn solid(w: u32, h: u32, color: Rgba) -> Raster {
        let mut m = Raster::new(w, h).unwrap().try_into_mut().unwrap();
        m.fill(color);
        m.into()
    }

    #[test]
    fn test_trim_uniform_returns_copy() {
        let src = solid(12, 9, Rgba::WHITE);
        let out = trim(&src);
        assert!(out.pixels_equal(&src));
        // An independent copy, not a shared handle
        assert_eq!(src.ref_count(), 1);
        assert_eq!(out.ref_count(), 1);
    }

    #[test]
    fn test_trim_single_pixel() {
        let mut m = solid(4, 4, Rgba::WHITE).try_into_mut().unwrap();
        m.set_rgba(1, 1, Rgba::BLACK).unwrap();
        let src: Raster = m.into();

        let out = trim(&src);
        assert_eq!((out.width(), out.height()), (1, 1));
        assert_eq!(out.get_rgba(0, 0), Some(Rgba::BLACK));
    }

    #[test]
    fn test_trim_content_block() {
        let mut m = solid(20, 10, Rgba::WHITE).try_into_mut().unwrap();
        for y in 2..5u32 {
            for x in 6..13u32 {
                m.set_rgba(x, y, Rgba::opaque(30, 30, 30)).unwrap();
            }
        }
        let src: Raster = m.into();

        assert_eq!(src.content_box(Rgba::WHITE), Some(Rect::new(6, 2, 7, 3)));
        let out = trim(&src);
        assert_eq!((out.width(), out.height()), (7, 3));
        assert_eq!(out.get_rgba(0, 0), Some(Rgba::opaque(30, 30, 30)));
        assert_eq!(out.get_rgba(6, 2), Some(Rgba::opaque(30, 30, 30)));
    }

    #[test]
    fn test_trim_all_transparent_returns_copy() {
        // Transparent pixels are background even with non-white color
        let src = solid(6, 6, Rgba::new(40, 40, 40, 0));
        let out = trim(&src);
        assert!(out.pixels_equal(&src));
    }

    #[test]
    fn test_trim_custom_background() {
        let mut m = solid(8, 8, Rgba::BLACK).try_into_mut().unwrap();
        m.set_rgba(3, 4, Rgba::WHITE).unwrap();
        let src: Raster = m.into();

        let out = trim_with_background(&src, Rgba::BLACK);
        assert_eq!((out.width(), out.height()), (1, 1));
        assert_eq!(out.get_rgba(0, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_trim_content_touching_edges_is_noop_copy() {
        let mut m = solid(5, 5, Rgba::WHITE).try_into_mut().unwrap();
        m.set_rgba(0, 0, Rgba::BLACK).unwrap();
        m.set_rgba(4, 4, Rgba::BLACK).unwrap();
        let src: Raster = m.into();

        let out = trim(&src);
        assert!(out.pixels_equal(&src));
    }
}
