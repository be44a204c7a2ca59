//! Border composition
//!
//! Pads an image onto a larger canvas filled with a border color.

use crate::error::{TransformError, TransformResult};
use crate::scale::{ScaleMethod, draw_scaled};
use platen_core::{Raster, Rgba};

/// Add a border of `size` pixels per side around the image.
///
/// The output is `(width + 2*size) x (height + 2*size)`, filled with
/// `color`. The source is then drawn centered, scaled down by the
/// old-to-new dimension ratio on each axis - it is not padded at 1:1
/// scale. The visible margin is therefore wider than `size` and differs
/// between the axes when their ratios differ; only the canvas growth is
/// exactly `2*size` per axis.
///
/// A `size` of 0 returns an unscaled deep copy.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if the padded
/// dimensions overflow, or the core error if the canvas cannot be
/// allocated.
///
/// # Examples
///
/// ```
/// use platen_core::{Raster, Rgba};
/// use platen_transform::add_border;
///
/// let raster = Raster::new(100, 80).unwrap();
/// let bordered = add_border(&raster, Rgba::BLACK, 10).unwrap();
/// assert_eq!(bordered.width(), 120);
/// assert_eq!(bordered.height(), 100);
/// assert_eq!(bordered.get_rgba(0, 0), Some(Rgba::BLACK));
/// ```
pub fn add_border(src: &Raster, color: Rgba, size: u32) -> TransformResult<Raster> {
    if size == 0 {
        return Ok(src.deep_clone());
    }

    let grow = size.checked_mul(2);
    let new_w = grow.and_then(|g| src.width().checked_add(g));
    let new_h = grow.and_then(|g| src.height().checked_add(g));
    let (Some(new_w), Some(new_h)) = (new_w, new_h) else {
        return Err(TransformError::InvalidParameters(format!(
            "border size {size} overflows the padded dimensions"
        )));
    };

    let dest = Raster::with_alpha_mode(new_w, new_h, src.alpha_mode())?;
    let mut dest = dest.try_into_mut().unwrap();
    dest.fill(color);

    // Scale-to-fit, not 1:1 padding: the source shrinks by old/new per
    // axis, floored but never below a single pixel.
    let scale_x = src.width() as f32 / new_w as f32;
    let scale_y = src.height() as f32 / new_h as f32;
    let scaled_w = ((src.width() as f32 * scale_x).floor() as u32).max(1);
    let scaled_h = ((src.height() as f32 * scale_y).floor() as u32).max(1);
    let off_x = (new_w - scaled_w.min(new_w)) / 2;
    let off_y = (new_h - scaled_h.min(new_h)) / 2;

    draw_scaled(
        src,
        &mut dest,
        off_x,
        off_y,
        scaled_w,
        scaled_h,
        ScaleMethod::Linear,
    );

    Ok(dest.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: u32, h: u32, color: Rgba) -> Raster {
        let mut m = Raster::new(w, h).unwrap().try_into_mut().unwrap();
        m.fill(color);
        m.into()
    }

    #[test]
    fn test_border_dimensions() {
        let src = solid(100, 80, Rgba::WHITE);
        let out = add_border(&src, Rgba::BLACK, 10).unwrap();
        assert_eq!((out.width(), out.height()), (120, 100));
    }

    #[test]
    fn test_border_corners_carry_color() {
        let src = solid(30, 20, Rgba::WHITE);
        let border = Rgba::opaque(200, 0, 0);
        let out = add_border(&src, border, 5).unwrap();
        assert_eq!(out.get_rgba(0, 0), Some(border));
        assert_eq!(out.get_rgba(39, 0), Some(border));
        assert_eq!(out.get_rgba(0, 29), Some(border));
        assert_eq!(out.get_rgba(39, 29), Some(border));
    }

    #[test]
    fn test_border_center_carries_source() {
        let src = solid(30, 30, Rgba::BLACK);
        let out = add_border(&src, Rgba::WHITE, 5).unwrap();
        assert_eq!((out.width(), out.height()), (40, 40));
        assert_eq!(out.get_rgba(20, 20), Some(Rgba::BLACK));
    }

    #[test]
    fn test_border_is_scaled_not_padded() {
        // 30x30 source in a 40x40 canvas shrinks to 22x22
        // (30 * 30/40 = 22.5, floor'd), so the margin is 9, not 5.
        let src = solid(30, 30, Rgba::BLACK);
        let out = add_border(&src, Rgba::WHITE, 5).unwrap();
        assert_eq!(out.get_rgba(5, 20), Some(Rgba::WHITE));
        assert_eq!(out.get_rgba(9, 20), Some(Rgba::BLACK));
    }

    #[test]
    fn test_border_zero_size_is_copy() {
        let src = solid(10, 10, Rgba::BLACK);
        let out = add_border(&src, Rgba::WHITE, 0).unwrap();
        assert!(out.pixels_equal(&src));
        assert_eq!(out.ref_count(), 1);
    }

    #[test]
    fn test_border_overflow_fails() {
        let src = solid(10, 10, Rgba::BLACK);
        assert!(matches!(
            add_border(&src, Rgba::WHITE, u32::MAX / 2 + 1),
            Err(TransformError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_border_one_pixel_source() {
        let src = solid(1, 1, Rgba::BLACK);
        let out = add_border(&src, Rgba::WHITE, 3).unwrap();
        assert_eq!((out.width(), out.height()), (7, 7));
        assert_eq!(out.get_rgba(0, 0), Some(Rgba::WHITE));
        assert_eq!(out.get_rgba(3, 3), Some(Rgba::BLACK));
    }
}
