//! Window construction from a family known at compile time or at run time.

use crate::{
    expression::{Expression, ExpressionPointer},
    sample::Sample,
};

use super::{
    family::{WindowFamily, WindowSymmetry},
    shapes::*,
};

fn trace_degenerate(family: WindowFamily, size: usize) {
    if size <= 1 && family != WindowFamily::Rectangular {
        log::trace!("{} window of size {} evaluates as rectangular", family, size);
    }
}

/// Builds window `W` directly, without any dispatch.
///
/// ```
/// use kawari::{expression::Expression, window::{window_static, shapes::Kaiser, WindowSymmetry}};
///
/// let kaiser: Kaiser<f32> = window_static(32, Some(6.0), WindowSymmetry::Symmetric);
/// assert_eq!(kaiser.size(), 32);
/// ```
#[inline]
pub fn window_static<W, T>(size: usize, param: Option<T>, symmetry: WindowSymmetry) -> W
where
    W: WindowShape<T>,
    T: Sample,
{
    W::build(size, param, symmetry)
}

/// Builds the window of `family` behind a trait object.
///
/// `param` is the family's shape parameter, `None` selects its default.
pub fn window<T: Sample>(
    size: usize,
    family: WindowFamily,
    param: Option<T>,
    symmetry: WindowSymmetry,
) -> ExpressionPointer<T> {
    log::debug!(
        "Boxing {} window: size={}, param={:?}, symmetry={:?}",
        family,
        size,
        param,
        symmetry
    );
    trace_degenerate(family, size);
    fn boxed<W, T>(size: usize, param: Option<T>, symmetry: WindowSymmetry) -> ExpressionPointer<T>
    where
        W: WindowShape<T> + Send + Sync + 'static,
        T: Sample,
    {
        Box::new(W::build(size, param, symmetry))
    }
    match family {
        WindowFamily::Rectangular => boxed::<Rectangular<T>, T>(size, param, symmetry),
        WindowFamily::Triangular => boxed::<Triangular<T>, T>(size, param, symmetry),
        WindowFamily::Bartlett => boxed::<Bartlett<T>, T>(size, param, symmetry),
        WindowFamily::Cosine => boxed::<Cosine<T>, T>(size, param, symmetry),
        WindowFamily::Hann => boxed::<Hann<T>, T>(size, param, symmetry),
        WindowFamily::BartlettHann => boxed::<BartlettHann<T>, T>(size, param, symmetry),
        WindowFamily::Hamming => boxed::<Hamming<T>, T>(size, param, symmetry),
        WindowFamily::Bohman => boxed::<Bohman<T>, T>(size, param, symmetry),
        WindowFamily::Blackman => boxed::<Blackman<T>, T>(size, param, symmetry),
        WindowFamily::BlackmanHarris => boxed::<BlackmanHarris<T>, T>(size, param, symmetry),
        WindowFamily::Kaiser => boxed::<Kaiser<T>, T>(size, param, symmetry),
        WindowFamily::Flattop => boxed::<Flattop<T>, T>(size, param, symmetry),
        WindowFamily::Gaussian => boxed::<Gaussian<T>, T>(size, param, symmetry),
        WindowFamily::Lanczos => boxed::<Lanczos<T>, T>(size, param, symmetry),
    }
}

macro_rules! any_window {
    ($($family:ident),* $(,)?) => {
        /// Any window, selected at run time without boxing.
        #[derive(Debug, Clone, PartialEq)]
        pub enum AnyWindow<T> {
            $($family($family<T>),)*
        }

        impl<T: Sample> AnyWindow<T> {
            pub fn new(
                size: usize,
                family: WindowFamily,
                param: Option<T>,
                symmetry: WindowSymmetry,
            ) -> Self {
                log::debug!(
                    "Building {} window: size={}, param={:?}, symmetry={:?}",
                    family,
                    size,
                    param,
                    symmetry
                );
                trace_degenerate(family, size);
                match family {
                    $(
                        WindowFamily::$family => {
                            Self::$family($family::build(size, param, symmetry))
                        }
                    )*
                }
            }

            pub fn family(&self) -> WindowFamily {
                match self {
                    $(Self::$family(_) => WindowFamily::$family,)*
                }
            }
        }

        impl<T: Sample> Expression for AnyWindow<T> {
            type Value = T;

            fn size(&self) -> usize {
                match self {
                    $(Self::$family(w) => w.size(),)*
                }
            }

            fn evaluate_into(&self, index: usize, out: &mut [T]) {
                match self {
                    $(Self::$family(w) => w.evaluate_into(index, out),)*
                }
            }
        }

        $(
            impl<T> From<$family<T>> for AnyWindow<T> {
                fn from(window: $family<T>) -> Self {
                    Self::$family(window)
                }
            }
        )*
    };
}

any_window!(
    Rectangular,
    Triangular,
    Bartlett,
    Cosine,
    Hann,
    BartlettHann,
    Hamming,
    Bohman,
    Blackman,
    BlackmanHarris,
    Kaiser,
    Flattop,
    Gaussian,
    Lanczos,
);
