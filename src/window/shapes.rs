//! One expression type per window family.
//!
//! Every family except [`Rectangular`] maps its index onto a [`Linspace`]
//! coordinate and applies a closed-form shape to it. Windows of zero or one
//! sample are special-cased, see [`WindowShape`].

use std::marker::PhantomData;

use crate::{
    bessel::i0_series,
    expression::Expression,
    linspace::{Linspace, WindowDomain},
    sample::Sample,
};

use super::family::{WindowFamily, WindowSymmetry};

/// Common constructor of all window expressions, keyed by family at
/// compile time.
///
/// Windows with `size <= 1` evaluate like a rectangular window of the same
/// size: a single `1` at index 0 for one sample, nothing but zeros for none.
pub trait WindowShape<T: Sample>: Expression<Value = T> + Sized {
    const FAMILY: WindowFamily;

    /// `param` is ignored by families without a shape parameter, and
    /// replaced by the family default when `None`.
    fn build(size: usize, param: Option<T>, symmetry: WindowSymmetry) -> Self;
}

#[inline]
fn rectangular_into<T: Sample>(size: usize, index: usize, out: &mut [T]) {
    for (k, o) in out.iter_mut().enumerate() {
        *o = if index.saturating_add(k) < size { T::one() } else { T::zero() };
    }
}

#[inline(always)]
fn c<T: Sample>(value: f64) -> T {
    T::from_f64(value)
}

macro_rules! window_expression {
    ($t:ident, $family:ident) => {
        impl<T: Sample> Expression for $t<T> {
            type Value = T;

            #[inline]
            fn size(&self) -> usize {
                self.size
            }

            fn evaluate_into(&self, index: usize, out: &mut [T]) {
                if self.size <= 1 {
                    return rectangular_into(self.size, index, out);
                }
                self.linspace.evaluate_into(index, out);
                for x in out.iter_mut() {
                    *x = self.shape(*x);
                }
            }
        }

        impl<T: Sample> WindowShape<T> for $t<T> {
            const FAMILY: WindowFamily = WindowFamily::$family;

            fn build(size: usize, param: Option<T>, symmetry: WindowSymmetry) -> Self {
                Self::from_parts(size, param, symmetry)
            }
        }
    };
}

/// `1` inside the window, `0` past its end. Symmetry does not apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangular<T> {
    size: usize,
    _marker: PhantomData<T>,
}

impl<T: Sample> Rectangular<T> {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            _marker: PhantomData,
        }
    }
}

impl<T: Sample> Expression for Rectangular<T> {
    type Value = T;

    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    fn evaluate_into(&self, index: usize, out: &mut [T]) {
        rectangular_into(self.size, index, out)
    }
}

impl<T: Sample> WindowShape<T> for Rectangular<T> {
    const FAMILY: WindowFamily = WindowFamily::Rectangular;

    fn build(size: usize, _: Option<T>, _: WindowSymmetry) -> Self {
        Self::new(size)
    }
}

/// `1 - |x|` over a domain shortened so the edge samples stay above zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangular<T> {
    linspace: Linspace<T>,
    size: usize,
}

impl<T: Sample> Triangular<T> {
    pub fn new(size: usize) -> Self {
        Self::with_symmetry(size, WindowSymmetry::Symmetric)
    }

    pub fn with_symmetry(size: usize, symmetry: WindowSymmetry) -> Self {
        Self {
            linspace: WindowDomain::MinusOneOneTruncatedOdd.linspace(size, symmetry.is_symmetric()),
            size,
        }
    }

    fn from_parts(size: usize, _: Option<T>, symmetry: WindowSymmetry) -> Self {
        Self::with_symmetry(size, symmetry)
    }

    #[inline(always)]
    fn shape(&self, x: T) -> T {
        T::one() - x.abs()
    }
}

window_expression!(Triangular, Triangular);

/// `1 - |x|` over `-1..1`, zero at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bartlett<T> {
    linspace: Linspace<T>,
    size: usize,
}

impl<T: Sample> Bartlett<T> {
    pub fn new(size: usize) -> Self {
        Self::with_symmetry(size, WindowSymmetry::Symmetric)
    }

    pub fn with_symmetry(size: usize, symmetry: WindowSymmetry) -> Self {
        Self {
            linspace: WindowDomain::MinusOneOne.linspace(size, symmetry.is_symmetric()),
            size,
        }
    }

    fn from_parts(size: usize, _: Option<T>, symmetry: WindowSymmetry) -> Self {
        Self::with_symmetry(size, symmetry)
    }

    #[inline(always)]
    fn shape(&self, x: T) -> T {
        T::one() - x.abs()
    }
}

window_expression!(Bartlett, Bartlett);

/// `sin(πx)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cosine<T> {
    linspace: Linspace<T>,
    size: usize,
}

impl<T: Sample> Cosine<T> {
    pub fn new(size: usize) -> Self {
        Self::with_symmetry(size, WindowSymmetry::Symmetric)
    }

    pub fn with_symmetry(size: usize, symmetry: WindowSymmetry) -> Self {
        Self {
            linspace: WindowDomain::ZeroOne.linspace(size, symmetry.is_symmetric()),
            size,
        }
    }

    fn from_parts(size: usize, _: Option<T>, symmetry: WindowSymmetry) -> Self {
        Self::with_symmetry(size, symmetry)
    }

    #[inline(always)]
    fn shape(&self, x: T) -> T {
        (T::PI() * x).sin()
    }
}

window_expression!(Cosine, Cosine);

/// `0.5 (1 - cos 2πx)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hann<T> {
    linspace: Linspace<T>,
    size: usize,
}

impl<T: Sample> Hann<T> {
    pub fn new(size: usize) -> Self {
        Self::with_symmetry(size, WindowSymmetry::Symmetric)
    }

    pub fn with_symmetry(size: usize, symmetry: WindowSymmetry) -> Self {
        Self {
            linspace: WindowDomain::ZeroOne.linspace(size, symmetry.is_symmetric()),
            size,
        }
    }

    fn from_parts(size: usize, _: Option<T>, symmetry: WindowSymmetry) -> Self {
        Self::with_symmetry(size, symmetry)
    }

    #[inline(always)]
    fn shape(&self, x: T) -> T {
        c::<T>(0.5) * (T::one() - (T::TAU() * x).cos())
    }
}

window_expression!(Hann, Hann);

/// `0.62 - 0.48 |x - 0.5| + 0.38 cos(2π (x - 0.5))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BartlettHann<T> {
    linspace: Linspace<T>,
    size: usize,
}

impl<T: Sample> BartlettHann<T> {
    pub fn new(size: usize) -> Self {
        Self::with_symmetry(size, WindowSymmetry::Symmetric)
    }

    pub fn with_symmetry(size: usize, symmetry: WindowSymmetry) -> Self {
        Self {
            linspace: WindowDomain::ZeroOne.linspace(size, symmetry.is_symmetric()),
            size,
        }
    }

    fn from_parts(size: usize, _: Option<T>, symmetry: WindowSymmetry) -> Self {
        Self::with_symmetry(size, symmetry)
    }

    #[inline(always)]
    fn shape(&self, x: T) -> T {
        let centered = x - c(0.5);
        c::<T>(0.62) - c::<T>(0.48) * centered.abs() + c::<T>(0.38) * (T::TAU() * centered).cos()
    }
}

window_expression!(BartlettHann, BartlettHann);

/// `alpha - (1 - alpha) cos 2πx`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hamming<T> {
    linspace: Linspace<T>,
    alpha: T,
    size: usize,
}

impl<T: Sample> Hamming<T> {
    pub const DEFAULT_ALPHA: f64 = 0.54;

    pub fn new(size: usize) -> Self {
        Self::with_symmetry(size, WindowSymmetry::Symmetric)
    }

    pub fn with_symmetry(size: usize, symmetry: WindowSymmetry) -> Self {
        Self::with_alpha(size, c(Self::DEFAULT_ALPHA), symmetry)
    }

    pub fn with_alpha(size: usize, alpha: T, symmetry: WindowSymmetry) -> Self {
        Self {
            linspace: WindowDomain::ZeroOne.linspace(size, symmetry.is_symmetric()),
            alpha,
            size,
        }
    }

    pub fn alpha(&self) -> T {
        self.alpha
    }

    fn from_parts(size: usize, alpha: Option<T>, symmetry: WindowSymmetry) -> Self {
        Self::with_alpha(size, alpha.unwrap_or(c(Self::DEFAULT_ALPHA)), symmetry)
    }

    #[inline(always)]
    fn shape(&self, x: T) -> T {
        self.alpha - (T::one() - self.alpha) * (T::TAU() * x).cos()
    }
}

window_expression!(Hamming, Hamming);

/// `(1 - |x|) cos(π|x|) + sin(π|x|) / π`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bohman<T> {
    linspace: Linspace<T>,
    size: usize,
}

impl<T: Sample> Bohman<T> {
    pub fn new(size: usize) -> Self {
        Self::with_symmetry(size, WindowSymmetry::Symmetric)
    }

    pub fn with_symmetry(size: usize, symmetry: WindowSymmetry) -> Self {
        Self {
            linspace: WindowDomain::MinusOneOne.linspace(size, symmetry.is_symmetric()),
            size,
        }
    }

    fn from_parts(size: usize, _: Option<T>, symmetry: WindowSymmetry) -> Self {
        Self::with_symmetry(size, symmetry)
    }

    #[inline(always)]
    fn shape(&self, x: T) -> T {
        let n = x.abs();
        (T::one() - n) * (T::PI() * n).cos() + T::FRAC_1_PI() * (T::PI() * n).sin()
    }
}

window_expression!(Bohman, Bohman);

/// `a0 - a1 cos 2πx + a2 cos 4πx` with `a0 = (1 - alpha) / 2`, `a1 = 0.5`,
/// `a2 = alpha / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blackman<T> {
    linspace: Linspace<T>,
    a0: T,
    a1: T,
    a2: T,
    size: usize,
}

impl<T: Sample> Blackman<T> {
    pub const DEFAULT_ALPHA: f64 = 0.16;

    pub fn new(size: usize) -> Self {
        Self::with_symmetry(size, WindowSymmetry::Symmetric)
    }

    pub fn with_symmetry(size: usize, symmetry: WindowSymmetry) -> Self {
        Self::with_alpha(size, c(Self::DEFAULT_ALPHA), symmetry)
    }

    pub fn with_alpha(size: usize, alpha: T, symmetry: WindowSymmetry) -> Self {
        let half = c::<T>(0.5);
        Self {
            linspace: WindowDomain::ZeroOne.linspace(size, symmetry.is_symmetric()),
            a0: (T::one() - alpha) * half,
            a1: half,
            a2: alpha * half,
            size,
        }
    }

    fn from_parts(size: usize, alpha: Option<T>, symmetry: WindowSymmetry) -> Self {
        Self::with_alpha(size, alpha.unwrap_or(c(Self::DEFAULT_ALPHA)), symmetry)
    }

    #[inline(always)]
    fn shape(&self, x: T) -> T {
        let n = T::TAU() * x;
        self.a0 - self.a1 * n.cos() + self.a2 * (n + n).cos()
    }
}

window_expression!(Blackman, Blackman);

/// Four-term Blackman-Harris.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackmanHarris<T> {
    linspace: Linspace<T>,
    size: usize,
}

impl<T: Sample> BlackmanHarris<T> {
    pub fn new(size: usize) -> Self {
        Self::with_symmetry(size, WindowSymmetry::Symmetric)
    }

    pub fn with_symmetry(size: usize, symmetry: WindowSymmetry) -> Self {
        Self {
            linspace: WindowDomain::ZeroOne.linspace(size, symmetry.is_symmetric()),
            size,
        }
    }

    fn from_parts(size: usize, _: Option<T>, symmetry: WindowSymmetry) -> Self {
        Self::with_symmetry(size, symmetry)
    }

    #[inline(always)]
    fn shape(&self, x: T) -> T {
        let n = T::TAU() * x;
        c::<T>(0.35875) - c::<T>(0.48829) * n.cos() + c::<T>(0.14128) * (c::<T>(2.0) * n).cos()
            - c::<T>(0.01168) * (c::<T>(3.0) * n).cos()
    }
}

window_expression!(BlackmanHarris, BlackmanHarris);

/// `I₀(beta √(1 - x²)) / I₀(beta)`
///
/// `I₀(beta)` is computed once, when the window is built. Both Bessel values
/// stay in `f64` until the ratio is taken, so large `beta` does not
/// overflow in `f32`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kaiser<T> {
    linspace: Linspace<T>,
    beta: T,
    i0_beta: f64,
    size: usize,
}

impl<T: Sample> Kaiser<T> {
    pub const DEFAULT_BETA: f64 = 0.5;

    pub fn new(size: usize) -> Self {
        Self::with_symmetry(size, WindowSymmetry::Symmetric)
    }

    pub fn with_symmetry(size: usize, symmetry: WindowSymmetry) -> Self {
        Self::with_beta(size, c(Self::DEFAULT_BETA), symmetry)
    }

    pub fn with_beta(size: usize, beta: T, symmetry: WindowSymmetry) -> Self {
        Self {
            linspace: WindowDomain::MinusOneOne.linspace(size, symmetry.is_symmetric()),
            beta,
            i0_beta: i0_series(beta.widen(), T::BESSEL_TERMS),
            size,
        }
    }

    pub fn beta(&self) -> T {
        self.beta
    }

    fn from_parts(size: usize, beta: Option<T>, symmetry: WindowSymmetry) -> Self {
        Self::with_beta(size, beta.unwrap_or(c(Self::DEFAULT_BETA)), symmetry)
    }

    #[inline(always)]
    fn shape(&self, x: T) -> T {
        // |x| > 1 only happens past the end of the window
        let inner = (T::one() - x * x).max(T::zero());
        let i0 = i0_series((self.beta * inner.sqrt()).widen(), T::BESSEL_TERMS);
        T::from_f64(i0 / self.i0_beta)
    }
}

window_expression!(Kaiser, Kaiser);

/// Five-term flat top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flattop<T> {
    linspace: Linspace<T>,
    size: usize,
}

impl<T: Sample> Flattop<T> {
    pub fn new(size: usize) -> Self {
        Self::with_symmetry(size, WindowSymmetry::Symmetric)
    }

    pub fn with_symmetry(size: usize, symmetry: WindowSymmetry) -> Self {
        Self {
            linspace: WindowDomain::ZeroOne.linspace(size, symmetry.is_symmetric()),
            size,
        }
    }

    fn from_parts(size: usize, _: Option<T>, symmetry: WindowSymmetry) -> Self {
        Self::with_symmetry(size, symmetry)
    }

    #[inline(always)]
    fn shape(&self, x: T) -> T {
        let n = T::TAU() * x;
        T::one() - c::<T>(1.93) * n.cos() + c::<T>(1.29) * (c::<T>(2.0) * n).cos()
            - c::<T>(0.388) * (c::<T>(3.0) * n).cos()
            + c::<T>(0.028) * (c::<T>(4.0) * n).cos()
    }
}

window_expression!(Flattop, Flattop);

/// `exp(-0.5 (alpha x)²)` over a domain shortened by one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian<T> {
    linspace: Linspace<T>,
    alpha: T,
    size: usize,
}

impl<T: Sample> Gaussian<T> {
    pub const DEFAULT_ALPHA: f64 = 2.5;

    pub fn new(size: usize) -> Self {
        Self::with_symmetry(size, WindowSymmetry::Symmetric)
    }

    pub fn with_symmetry(size: usize, symmetry: WindowSymmetry) -> Self {
        Self::with_alpha(size, c(Self::DEFAULT_ALPHA), symmetry)
    }

    pub fn with_alpha(size: usize, alpha: T, symmetry: WindowSymmetry) -> Self {
        Self {
            linspace: WindowDomain::MinusOneOneTruncated.linspace(size, symmetry.is_symmetric()),
            alpha,
            size,
        }
    }

    pub fn alpha(&self) -> T {
        self.alpha
    }

    fn from_parts(size: usize, alpha: Option<T>, symmetry: WindowSymmetry) -> Self {
        Self::with_alpha(size, alpha.unwrap_or(c(Self::DEFAULT_ALPHA)), symmetry)
    }

    #[inline(always)]
    fn shape(&self, x: T) -> T {
        let ax = self.alpha * x;
        (c::<T>(-0.5) * ax * ax).exp()
    }
}

window_expression!(Gaussian, Gaussian);

/// `sinc(x)` over `-π..π`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lanczos<T> {
    linspace: Linspace<T>,
    size: usize,
}

impl<T: Sample> Lanczos<T> {
    pub fn new(size: usize) -> Self {
        Self::with_symmetry(size, WindowSymmetry::Symmetric)
    }

    pub fn with_symmetry(size: usize, symmetry: WindowSymmetry) -> Self {
        Self {
            linspace: WindowDomain::MinusPiPi.linspace(size, symmetry.is_symmetric()),
            size,
        }
    }

    fn from_parts(size: usize, _: Option<T>, symmetry: WindowSymmetry) -> Self {
        Self::with_symmetry(size, symmetry)
    }

    #[inline(always)]
    fn shape(&self, x: T) -> T {
        x.sinc()
    }
}

window_expression!(Lanczos, Lanczos);
