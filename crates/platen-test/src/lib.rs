//! platen-test - Shared test fixtures
//!
//! Deterministic synthetic rasters for the workspace's test suites.
//! Transformations here are pure functions over in-memory buffers, so
//! fixtures are generated rather than loaded from files; every builder
//! produces the same pixels on every run.

use platen_core::{Raster, Rgba};

/// A raster filled with a single color.
pub fn solid(width: u32, height: u32, color: Rgba) -> Raster {
    let mut m = Raster::new(width, height)
        .expect("fixture dimensions must be valid")
        .try_into_mut()
        .unwrap();
    m.fill(color);
    m.into()
}

/// A solid `background` raster with one `dot` pixel at (x, y).
pub fn with_dot(width: u32, height: u32, background: Rgba, dot: Rgba, x: u32, y: u32) -> Raster {
    let mut m = solid(width, height, background).try_into_mut().unwrap();
    m.set_rgba(x, y, dot).expect("dot must lie inside the fixture");
    m.into()
}

/// A raster where every pixel value is derived from its position.
///
/// Useful when a test needs to check that pixels ended up in the right
/// place: `(x, y)` maps to `Rgba(x % 256, y % 256, (x + y) % 256, 255)`.
pub fn gradient(width: u32, height: u32) -> Raster {
    let mut m = Raster::new(width, height)
        .expect("fixture dimensions must be valid")
        .try_into_mut()
        .unwrap();
    for y in 0..height {
        for x in 0..width {
            let color = Rgba::opaque((x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8);
            m.set_pixel_unchecked(x, y, color.to_pixel());
        }
    }
    m.into()
}

/// Assert two rasters have identical shape and pixels.
///
/// # Panics
///
/// Panics with the first differing coordinate when the rasters are not
/// pixel-identical.
pub fn assert_pixels_equal(actual: &Raster, expected: &Raster) {
    assert_eq!(
        (actual.width(), actual.height()),
        (expected.width(), expected.height()),
        "raster dimensions differ"
    );
    for y in 0..expected.height() {
        for x in 0..expected.width() {
            let a = actual.get_rgba_unchecked(x, y);
            let e = expected.get_rgba_unchecked(x, y);
            assert_eq!(a, e, "pixel ({x}, {y}) differs: {a:?} != {e:?}");
        }
    }
}
