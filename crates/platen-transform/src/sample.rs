//! Source sampling at fractional coordinates
//!
//! Shared by the inverse-mapping loops in rotation and scaling. Both
//! samplers return `None` when the requested position lies outside the
//! source, so callers can leave their background fill untouched there.

use platen_core::{Raster, color};

/// Interpolate one 8-bit channel between four neighbors.
fn lerp_channel(c00: u8, c10: u8, c01: u8, c11: u8, fx: f32, fy: f32) -> u8 {
    let top = c00 as f32 * (1.0 - fx) + c10 as f32 * fx;
    let bottom = c01 as f32 * (1.0 - fx) + c11 as f32 * fx;
    (top * (1.0 - fy) + bottom * fy).round() as u8
}

/// Bilinear sample of the source at (`sx`, `sy`).
///
/// Neighbors outside the source are clamped to the nearest edge pixel,
/// so positions within half a pixel of the boundary still interpolate.
/// Positions farther out return `None`.
pub(crate) fn sample_bilinear(src: &Raster, sx: f32, sy: f32) -> Option<u32> {
    let w = src.width() as i64;
    let h = src.height() as i64;
    if sx < -0.5 || sy < -0.5 || sx > w as f32 - 0.5 || sy > h as f32 - 0.5 {
        return None;
    }

    let x0 = sx.floor() as i64;
    let y0 = sy.floor() as i64;
    let fx = sx - x0 as f32;
    let fy = sy - y0 as f32;

    let cx = |x: i64| x.clamp(0, w - 1) as u32;
    let cy = |y: i64| y.clamp(0, h - 1) as u32;
    let p00 = src.get_pixel_unchecked(cx(x0), cy(y0));
    let p10 = src.get_pixel_unchecked(cx(x0 + 1), cy(y0));
    let p01 = src.get_pixel_unchecked(cx(x0), cy(y0 + 1));
    let p11 = src.get_pixel_unchecked(cx(x0 + 1), cy(y0 + 1));

    let r = lerp_channel(
        color::red(p00),
        color::red(p10),
        color::red(p01),
        color::red(p11),
        fx,
        fy,
    );
    let g = lerp_channel(
        color::green(p00),
        color::green(p10),
        color::green(p01),
        color::green(p11),
        fx,
        fy,
    );
    let b = lerp_channel(
        color::blue(p00),
        color::blue(p10),
        color::blue(p01),
        color::blue(p11),
        fx,
        fy,
    );
    let a = lerp_channel(
        color::alpha(p00),
        color::alpha(p10),
        color::alpha(p01),
        color::alpha(p11),
        fx,
        fy,
    );
    Some(color::compose_rgba(r, g, b, a))
}

/// Nearest-neighbor sample of the source at (`sx`, `sy`).
pub(crate) fn sample_nearest(src: &Raster, sx: f32, sy: f32) -> Option<u32> {
    let x = sx.round() as i64;
    let y = sy.round() as i64;
    if x < 0 || y < 0 || x >= src.width() as i64 || y >= src.height() as i64 {
        return None;
    }
    Some(src.get_pixel_unchecked(x as u32, y as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use platen_core::Rgba;

    fn two_by_one(left: Rgba, right: Rgba) -> Raster {
        let mut m = Raster::new(2, 1).unwrap().try_into_mut().unwrap();
        m.set_rgba(0, 0, left).unwrap();
        m.set_rgba(1, 0, right).unwrap();
        m.into()
    }

    #[test]
    fn test_bilinear_at_integer_is_exact() {
        let src = two_by_one(Rgba::opaque(10, 20, 30), Rgba::opaque(50, 60, 70));
        assert_eq!(
            sample_bilinear(&src, 0.0, 0.0),
            Some(Rgba::opaque(10, 20, 30).to_pixel())
        );
        assert_eq!(
            sample_bilinear(&src, 1.0, 0.0),
            Some(Rgba::opaque(50, 60, 70).to_pixel())
        );
    }

    #[test]
    fn test_bilinear_midpoint_averages() {
        let src = two_by_one(Rgba::opaque(0, 0, 0), Rgba::opaque(100, 200, 50));
        let mid = Rgba::from_pixel(sample_bilinear(&src, 0.5, 0.0).unwrap());
        assert_eq!(mid, Rgba::opaque(50, 100, 25));
    }

    #[test]
    fn test_samples_outside_are_none() {
        let src = two_by_one(Rgba::WHITE, Rgba::WHITE);
        assert_eq!(sample_bilinear(&src, -0.6, 0.0), None);
        assert_eq!(sample_bilinear(&src, 0.0, 0.6), None);
        assert_eq!(sample_nearest(&src, -0.6, 0.0), None);
        assert_eq!(sample_nearest(&src, 2.0, 0.0), None);
    }

    #[test]
    fn test_nearest_rounds() {
        let src = two_by_one(Rgba::opaque(1, 1, 1), Rgba::opaque(9, 9, 9));
        assert_eq!(
            sample_nearest(&src, 0.4, 0.0),
            Some(Rgba::opaque(1, 1, 1).to_pixel())
        );
        assert_eq!(
            sample_nearest(&src, 0.6, 0.0),
            Some(Rgba::opaque(9, 9, 9).to_pixel())
        );
    }
}
