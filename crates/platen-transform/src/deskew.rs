//! Skew-angle consumption
//!
//! Skew estimation itself lives outside this crate: an estimator is an
//! injected capability that inspects a raster and reports the rotation,
//! in degrees, that best straightens its content. This module only
//! consumes that angle.

use crate::error::TransformResult;
use crate::rotate::rotate;
use platen_core::Raster;

/// A skew-angle estimator capability.
///
/// Implementations inspect the raster and return the best-fit rotation
/// angle in degrees (clockwise-positive, matching [`rotate`]).
/// Estimators that cannot produce an angle should return
/// [`crate::TransformError::EstimatorFailed`].
pub trait SkewEstimator {
    /// Estimate the deskew angle for `src`, in degrees.
    fn estimate(&self, src: &Raster) -> TransformResult<f32>;
}

/// An estimator that always reports the same angle.
///
/// The trivial implementation: useful as a deterministic substitute in
/// tests and wherever the angle is already known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAngle(pub f32);

impl SkewEstimator for FixedAngle {
    fn estimate(&self, _src: &Raster) -> TransformResult<f32> {
        Ok(self.0)
    }
}

/// Get the skew angle of `src` from the injected estimator.
///
/// A pass-through with no logic of its own.
///
/// # Errors
///
/// Whatever the estimator returns.
pub fn skew_angle<E: SkewEstimator + ?Sized>(src: &Raster, estimator: &E) -> TransformResult<f32> {
    estimator.estimate(src)
}

/// Rotate `src` by the angle the injected estimator reports.
///
/// Equivalent to [`rotate`] with [`skew_angle`]'s result; the canvas
/// expands per the usual rotation contract.
///
/// # Errors
///
/// Propagates estimator and rotation failures.
pub fn deskew<E: SkewEstimator + ?Sized>(
    src: &Raster,
    estimator: &E,
) -> TransformResult<Raster> {
    let degrees = skew_angle(src, estimator)?;
    rotate(src, degrees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;
    use crate::rotate::rotated_bounds;
    use platen_core::Rgba;

    struct Failing;

    impl SkewEstimator for Failing {
        fn estimate(&self, _src: &Raster) -> TransformResult<f32> {
            Err(TransformError::EstimatorFailed(
                "insufficient content".to_string(),
            ))
        }
    }

    fn solid(w: u32, h: u32, color: Rgba) -> Raster {
        let mut m = Raster::new(w, h).unwrap().try_into_mut().unwrap();
        m.fill(color);
        m.into()
    }

    #[test]
    fn test_skew_angle_passes_through() {
        let src = solid(10, 10, Rgba::WHITE);
        assert_eq!(skew_angle(&src, &FixedAngle(-2.5)).unwrap(), -2.5);
    }

    #[test]
    fn test_deskew_rotates_by_estimate() {
        let src = solid(60, 40, Rgba::WHITE);
        let out = deskew(&src, &FixedAngle(7.0)).unwrap();
        assert_eq!(
            (out.width(), out.height()),
            rotated_bounds(60, 40, 7.0)
        );
    }

    #[test]
    fn test_deskew_zero_estimate_is_identity() {
        let mut m = solid(6, 6, Rgba::WHITE).try_into_mut().unwrap();
        m.set_rgba(2, 4, Rgba::BLACK).unwrap();
        let src: Raster = m.into();

        let out = deskew(&src, &FixedAngle(0.0)).unwrap();
        assert!(out.pixels_equal(&src));
    }

    #[test]
    fn test_deskew_propagates_estimator_failure() {
        let src = solid(10, 10, Rgba::WHITE);
        assert!(matches!(
            deskew(&src, &Failing),
            Err(TransformError::EstimatorFailed(_))
        ));
    }

    #[test]
    fn test_estimator_as_trait_object() {
        let src = solid(10, 10, Rgba::WHITE);
        let estimator: &dyn SkewEstimator = &FixedAngle(1.0);
        assert_eq!(skew_angle(&src, estimator).unwrap(), 1.0);
    }
}
