//! Floating-point sample types.

use std::fmt::Debug;

use approx::AbsDiffEq;
use num_traits::{Float, FloatConst, NumCast};

/// Scalar type a window or expression can be evaluated in.
///
/// Implemented for [`f32`] and [`f64`].
pub trait Sample:
    Float
    + FloatConst
    + NumCast
    + AbsDiffEq<Epsilon = Self>
    + Debug
    + Default
    + Send
    + Sync
    + 'static
{
    /// Number of tabulated terms the Bessel series uses at this precision.
    const BESSEL_TERMS: usize;

    /// Converts a constant into this precision.
    ///
    /// The constants used in this crate are all representable in `f32`,
    /// so the conversion cannot fail.
    fn from_f64(value: f64) -> Self;

    /// Converts an index or a size into this precision.
    fn from_usize(value: usize) -> Self;

    /// Converts to `f64` without loss.
    fn widen(self) -> f64;

    /// Unnormalized sinc, `sin(x) / x` with `sinc(0) == 1`.
    #[inline]
    fn sinc(self) -> Self {
        if approx::abs_diff_eq!(self, Self::zero()) {
            Self::one()
        } else {
            self.sin() / self
        }
    }
}

impl Sample for f32 {
    const BESSEL_TERMS: usize = 20;

    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
    #[inline(always)]
    fn from_usize(value: usize) -> Self {
        value as f32
    }
    #[inline(always)]
    fn widen(self) -> f64 {
        self as f64
    }
}

impl Sample for f64 {
    const BESSEL_TERMS: usize = 39;

    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value
    }
    #[inline(always)]
    fn from_usize(value: usize) -> Self {
        value as f64
    }
    #[inline(always)]
    fn widen(self) -> f64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Sample;

    #[test]
    fn sinc_at_zero() {
        assert_eq!(0.0f64.sinc(), 1.0);
        assert_eq!(0.0f32.sinc(), 1.0);
    }

    #[test]
    fn sinc_at_pi() {
        approx::assert_abs_diff_eq!(std::f64::consts::PI.sinc(), 0.0, epsilon = 1.0e-15);
        approx::assert_abs_diff_eq!(
            (std::f64::consts::PI / 2.0).sinc(),
            2.0 / std::f64::consts::PI,
            epsilon = 1.0e-15
        );
    }
}
