//! Modified Bessel function of the first kind, order zero.
//!
//! Only the Kaiser window needs it, so a truncated power series is enough:
//! `I₀(x) = Σ ((x/2)^k / k!)²`.

use crate::sample::Sample;

/// `1 / (k!)²` for `k = 2..=40`.
const BESSEL_COEF: [f64; 39] = [
    0.25,
    0.027777777777777776236,
    0.0017361111111111110147,
    6.9444444444444444384e-005,
    1.9290123456790123911e-006,
    3.9367598891408417495e-008,
    6.1511873267825652335e-010,
    7.5940584281266239246e-012,
    7.5940584281266233693e-014,
    6.2760813455591932909e-016,
    4.3583898233049949985e-018,
    2.5789288895295827557e-020,
    1.3157800456783586208e-022,
    5.8479113141260384983e-025,
    2.2843403570804837884e-027,
    7.904291893012054025e-030,
    2.4395962632753252792e-032,
    6.75788438580422547e-035,
    1.689471096451056426e-037,
    3.8310002187098784929e-040,
    7.9152897080782616517e-043,
    1.4962740468957016443e-045,
    2.5976979980828152196e-048,
    4.1563167969325041577e-051,
    6.1483976285983795968e-054,
    8.434015951438105991e-057,
    1.0757673407446563809e-059,
    1.2791526049282476926e-062,
    1.4212806721424974034e-065,
    1.4789601166935457918e-068,
    1.4442969889585408123e-071,
    1.3262598613026086927e-074,
    1.1472836170437790782e-077,
    9.3655805472961564331e-081,
    7.2265282000741942594e-084,
    5.2786911614858977913e-087,
    3.6556032974279072401e-090,
    2.4034209713529963119e-093,
    1.5021381070956226783e-096,
];

/// Evaluates `I₀(x)`.
///
/// The series is cut after [`Sample::BESSEL_TERMS`] tabulated terms, 20 for
/// `f32` and 39 for `f64`, and always summed in `f64`. See [`i0_series`].
#[inline]
pub fn modified_bessel_i0<T: Sample>(x: T) -> T {
    T::from_f64(i0_series(x.widen(), T::BESSEL_TERMS))
}

/// `I₀(x)` summed over `1 + (x/2)²` and the first `terms` tabulated terms
/// (at most 39).
///
/// Each term is produced from the previous one by multiplying with `(x/2)²`,
/// then accumulated with a fused multiply-add.
pub fn i0_series(x: f64, terms: usize) -> f64 {
    let half = x * 0.5;
    let half_sqr = half * half;
    let mut num = half_sqr;
    let mut result = 1.0 + half_sqr;
    for coef in &BESSEL_COEF[..terms.min(BESSEL_COEF.len())] {
        num *= half_sqr;
        result = num.mul_add(*coef, result);
    }
    result
}

/// Lane-wise [`modified_bessel_i0`].
#[inline]
pub fn modified_bessel_i0_lanes<T: Sample, const N: usize>(x: [T; N]) -> [T; N] {
    x.map(modified_bessel_i0)
}

#[cfg(test)]
mod tests {
    use super::{i0_series, modified_bessel_i0, modified_bessel_i0_lanes};

    #[test]
    fn zero_is_one() {
        assert_eq!(modified_bessel_i0(0.0f64), 1.0);
        assert_eq!(modified_bessel_i0(0.0f32), 1.0);
    }

    #[test]
    fn reference_values() {
        approx::assert_relative_eq!(
            modified_bessel_i0(1.0f64),
            1.2660658777520082,
            max_relative = 1.0e-14
        );
        approx::assert_relative_eq!(
            modified_bessel_i0(5.0f64),
            27.239871823604442,
            max_relative = 1.0e-13
        );
        approx::assert_relative_eq!(
            modified_bessel_i0(2.5f32),
            3.289839144,
            max_relative = 1.0e-6
        );
    }

    #[test]
    fn single_precision_does_not_overflow() {
        for x in [16.0f32, 17.0, 20.0, 30.0, 60.0] {
            let value = modified_bessel_i0(x);
            assert!(value.is_finite(), "I0({x}) = {value}");
        }
        approx::assert_relative_eq!(
            modified_bessel_i0(20.0f32),
            4.355828e7,
            max_relative = 1.0e-3
        );
    }

    #[test]
    fn term_count_is_clamped() {
        assert_eq!(i0_series(3.0, 39), i0_series(3.0, 1000));
        assert_eq!(i0_series(3.0, 0), 1.0 + 1.5 * 1.5);
    }

    #[test]
    fn even_function() {
        for x in [0.1, 0.5, 3.0, 7.25] {
            assert_eq!(modified_bessel_i0(x), modified_bessel_i0(-x));
        }
    }

    #[test]
    fn monotonic_on_positive_axis() {
        let mut previous = modified_bessel_i0(0.0f64);
        for i in 1..200 {
            let current = modified_bessel_i0(i as f64 * 0.05);
            assert!(current > previous, "I0 not increasing at {}", i as f64 * 0.05);
            previous = current;
        }
    }

    #[test]
    fn lanes_match_scalar() {
        let x = [0.0, 0.25, 1.0, 4.0];
        let lanes = modified_bessel_i0_lanes(x);
        for (lane, x) in lanes.iter().zip(x) {
            assert_eq!(*lane, modified_bessel_i0(x));
        }
    }
}
