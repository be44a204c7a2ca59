//! Resize operations
//!
//! Three distinct resize contracts:
//!
//! - [`resize_scale`] - uniform scale factor, scale-and-draw
//! - [`resize_to`] - exact target size by subset extraction (no scaling)
//! - [`resize_with_ratio`] - exact target size with the source drawn
//!   scaled by an independent ratio from the origin
//!
//! The subset-extraction behavior of [`resize_to`] is deliberate: a
//! target larger than the source does not upscale, it extracts whatever
//! overlaps and leaves the remainder at the default fill.

use crate::error::{TransformError, TransformResult};
use crate::sample::{sample_bilinear, sample_nearest};
use platen_core::{Raster, RasterMut};

/// Scaling method to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMethod {
    /// Nearest-neighbor sampling (fastest, pixelated results)
    Sampling,
    /// Bilinear interpolation
    #[default]
    Linear,
}

/// Draw `src` resampled to `out_w x out_h` into `dst`, anchored at
/// (`dest_x`, `dest_y`).
///
/// The drawn extent is clipped to the destination; destination pixels
/// outside it keep their current fill.
pub(crate) fn draw_scaled(
    src: &Raster,
    dst: &mut RasterMut,
    dest_x: u32,
    dest_y: u32,
    out_w: u32,
    out_h: u32,
    method: ScaleMethod,
) {
    if out_w == 0 || out_h == 0 {
        return;
    }
    let inv_x = src.width() as f32 / out_w as f32;
    let inv_y = src.height() as f32 / out_h as f32;
    let limit_w = out_w.min(dst.width().saturating_sub(dest_x));
    let limit_h = out_h.min(dst.height().saturating_sub(dest_y));

    for dy in 0..limit_h {
        let sy = (dy as f32 + 0.5) * inv_y - 0.5;
        for dx in 0..limit_w {
            let sx = (dx as f32 + 0.5) * inv_x - 0.5;
            let sampled = match method {
                ScaleMethod::Linear => sample_bilinear(src, sx, sy),
                ScaleMethod::Sampling => sample_nearest(src, sx, sy),
            };
            if let Some(val) = sampled {
                dst.set_pixel_unchecked(dest_x + dx, dest_y + dy, val);
            }
        }
    }
}

/// Resize by a uniform scale factor.
///
/// The output is `floor(width * scale) x floor(height * scale)` with the
/// same alpha mode as the input, produced by bilinear scale-and-draw.
///
/// # Errors
///
/// Fails fast on degenerate input rather than producing a corrupt
/// buffer: [`TransformError::InvalidScaleFactor`] if `scale` is not a
/// positive number, and a core dimension error if either floor'd output
/// dimension is 0.
///
/// # Examples
///
/// ```
/// use platen_core::Raster;
/// use platen_transform::resize_scale;
///
/// let raster = Raster::new(100, 80).unwrap();
/// let half = resize_scale(&raster, 0.5).unwrap();
/// assert_eq!(half.width(), 50);
/// assert_eq!(half.height(), 40);
/// ```
pub fn resize_scale(src: &Raster, scale: f32) -> TransformResult<Raster> {
    resize_scale_with_method(src, scale, ScaleMethod::default())
}

/// Resize by a uniform scale factor with an explicit scaling method.
///
/// # Errors
///
/// Same as [`resize_scale`].
pub fn resize_scale_with_method(
    src: &Raster,
    scale: f32,
    method: ScaleMethod,
) -> TransformResult<Raster> {
    if !(scale > 0.0) {
        return Err(TransformError::InvalidScaleFactor(format!(
            "scale factor must be positive, got {scale}"
        )));
    }

    let new_w = (src.width() as f32 * scale).floor() as u32;
    let new_h = (src.height() as f32 * scale).floor() as u32;
    let dest = Raster::with_alpha_mode(new_w, new_h, src.alpha_mode())?;
    let mut dest = dest.try_into_mut().unwrap();
    draw_scaled(src, &mut dest, 0, 0, new_w, new_h, method);
    Ok(dest.into())
}

/// Resize to an exact target size by subset extraction.
///
/// Copies the top-left `width x height` region of the source 1:1, like a
/// crop clamped to the source extent. No scaling is applied: a target
/// dimension larger than the source leaves the uncovered area at the
/// default fill (fully transparent black).
///
/// # Errors
///
/// Returns a core dimension error if either target dimension is 0.
pub fn resize_to(src: &Raster, width: u32, height: u32) -> TransformResult<Raster> {
    let dest = Raster::with_alpha_mode(width, height, src.alpha_mode())?;
    let mut dest = dest.try_into_mut().unwrap();
    dest.blit_from(src, 0, 0, 0, 0, width, height);
    Ok(dest.into())
}

/// Resize to an exact target size with the source drawn scaled by
/// `ratio` from the origin.
///
/// Unlike [`resize_to`], this variant does scale-and-draw. The scaled
/// source occupies `floor(src_w * ratio) x floor(src_h * ratio)` at the
/// top-left of the target; the remainder keeps the default fill, and a
/// scaled extent larger than the target is clipped.
///
/// # Errors
///
/// [`TransformError::InvalidScaleFactor`] if `ratio` is not a positive
/// number; a core dimension error if either target dimension is 0.
pub fn resize_with_ratio(
    src: &Raster,
    width: u32,
    height: u32,
    ratio: f32,
) -> TransformResult<Raster> {
    if !(ratio > 0.0) {
        return Err(TransformError::InvalidScaleFactor(format!(
            "scale ratio must be positive, got {ratio}"
        )));
    }

    let scaled_w = (src.width() as f32 * ratio).floor() as u32;
    let scaled_h = (src.height() as f32 * ratio).floor() as u32;
    let dest = Raster::with_alpha_mode(width, height, src.alpha_mode())?;
    let mut dest = dest.try_into_mut().unwrap();
    draw_scaled(
        src,
        &mut dest,
        0,
        0,
        scaled_w,
        scaled_h,
        ScaleMethod::default(),
    );
    Ok(dest.into())
}
