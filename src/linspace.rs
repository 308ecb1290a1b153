//! Evenly spaced coordinates.

use crate::{expression::Expression, sample::Sample};

/// Linearly spaced coordinates between `start` and `stop`.
///
/// With `endpoint`, `size` points span `start..=stop`. Without it the step
/// is `(stop - start) / size`, so `stop` itself is the first point past the
/// end. This is the periodic framing FFT-based analysis expects.
///
/// When there is no step to take (`size <= 1` with `endpoint`, `size == 0`
/// without), every index maps to `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linspace<T> {
    start: T,
    stop: T,
    invsize: T,
    size: usize,
    endpoint: bool,
}

impl<T: Sample> Linspace<T> {
    pub fn new(start: T, stop: T, size: usize, endpoint: bool) -> Self {
        let steps = if endpoint { size.saturating_sub(1) } else { size };
        let invsize = if steps == 0 {
            T::zero()
        } else {
            T::from_usize(steps).recip()
        };
        Self {
            start,
            stop,
            invsize,
            size,
            endpoint,
        }
    }

    /// `-stop..stop`.
    pub fn symmetric(stop: T, size: usize, endpoint: bool) -> Self {
        Self::new(-stop, stop, size, endpoint)
    }

    pub fn start(&self) -> T {
        self.start
    }
    pub fn stop(&self) -> T {
        self.stop
    }
    pub fn endpoint(&self) -> bool {
        self.endpoint
    }

    /// Coordinate of a single index.
    #[inline(always)]
    pub fn at(&self, index: usize) -> T {
        let c = T::from_usize(index) * self.invsize;
        self.start * (T::one() - c) + self.stop * c
    }
}

impl<T: Sample> Expression for Linspace<T> {
    type Value = T;

    fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn evaluate_into(&self, index: usize, out: &mut [T]) {
        for (k, o) in out.iter_mut().enumerate() {
            *o = self.at(index.saturating_add(k));
        }
    }
}

/// Coordinate ranges the window families are defined over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowDomain {
    /// `0..1`
    ZeroOne,
    /// `-1..1`
    MinusOneOne,
    /// `-π..π`
    MinusPiPi,
    /// `±(size-1)/size`, keeps the outermost samples away from zero.
    MinusOneOneTruncated,
    /// `±(size-1)/(size+1)` for odd sizes, `±(size-1)/size` for even ones.
    MinusOneOneTruncatedOdd,
}

impl WindowDomain {
    pub fn linspace<T: Sample>(self, size: usize, symmetric: bool) -> Linspace<T> {
        match self {
            Self::ZeroOne => Linspace::new(T::zero(), T::one(), size, symmetric),
            Self::MinusOneOne => Linspace::symmetric(T::one(), size, symmetric),
            Self::MinusPiPi => Linspace::symmetric(T::PI(), size, symmetric),
            Self::MinusOneOneTruncated => {
                Linspace::symmetric(Self::ratio(size, size), size, symmetric)
            }
            Self::MinusOneOneTruncatedOdd => {
                let denominator = if size & 1 == 1 { size + 1 } else { size };
                Linspace::symmetric(Self::ratio(size, denominator), size, symmetric)
            }
        }
    }

    /// `(size - 1) / denominator`, zero when undefined.
    fn ratio<T: Sample>(size: usize, denominator: usize) -> T {
        if size == 0 {
            T::zero()
        } else {
            T::from_usize(size - 1) / T::from_usize(denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{Linspace, WindowDomain};
    use crate::expression::Expression;

    #[test]
    fn symmetric_includes_both_ends() {
        let l = Linspace::new(0.0f64, 1.0, 5, true);
        assert_eq!(l.materialize(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn periodic_excludes_stop() {
        let l = Linspace::new(0.0f64, 1.0, 4, false);
        assert_eq!(l.materialize(), vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(l.at(4), 1.0);
    }

    #[test]
    fn out_of_order_access() {
        let l = Linspace::new(-1.0f64, 1.0, 9, true);
        let forward = l.materialize();
        for i in (0..9).rev() {
            assert_eq!(l.at(i), forward[i]);
        }
        assert_eq!(l.evaluate(3, 2), forward[3..5].to_vec());
    }

    #[test]
    fn degenerate_sizes() {
        let one = Linspace::new(-1.0f64, 1.0, 1, true);
        assert_eq!(one.materialize(), vec![-1.0]);
        let empty = Linspace::new(-1.0f64, 1.0, 0, false);
        assert!(empty.materialize().is_empty());
        assert_eq!(empty.at(3), -1.0);
    }

    #[test]
    fn indices_near_the_top_of_usize() {
        let l = Linspace::new(0.0f64, 1.0, 4, false);
        let far = l.evaluate(usize::MAX - 1, 3);
        assert!(far.iter().all(|v| v.is_finite()));
        assert_eq!(far[1], far[2]);
    }

    #[test]
    fn domains() {
        let pi = WindowDomain::MinusPiPi.linspace::<f64>(3, true);
        assert_eq!(pi.materialize(), vec![-std::f64::consts::PI, 0.0, std::f64::consts::PI]);

        let trunc = WindowDomain::MinusOneOneTruncated.linspace::<f64>(4, true);
        assert_abs_diff_eq!(trunc.start(), -0.75);
        assert_abs_diff_eq!(trunc.stop(), 0.75);

        let odd = WindowDomain::MinusOneOneTruncatedOdd.linspace::<f64>(5, true);
        assert_abs_diff_eq!(odd.stop(), 4.0 / 6.0);
        let even = WindowDomain::MinusOneOneTruncatedOdd.linspace::<f64>(6, true);
        assert_abs_diff_eq!(even.stop(), 5.0 / 6.0);

        let zero = WindowDomain::MinusOneOneTruncated.linspace::<f32>(0, true);
        assert_eq!(zero.stop(), 0.0);
    }
}
