//! Lazy, index-addressable sample generators.
//!
//! An [`Expression`] never owns its output. It computes any range of samples
//! on demand, in any order and at any width, so a window of a million points
//! costs nothing until somebody asks for a block of it.

use num_traits::Zero;

use crate::sample::Sample;

#[cfg(feature = "simd")]
mod simd;
#[cfg(feature = "simd")]
pub use simd::SimdExpression;

/// Samples combinators keep on the stack per pass. Wider requests are
/// processed in chunks of this many samples.
pub(crate) const SCRATCH_LEN: usize = 64;

/// Type-erased expression, as returned by [`crate::window::window`].
pub type ExpressionPointer<T> = Box<dyn Expression<Value = T> + Send + Sync>;

pub trait Expression {
    type Value: Sample;

    /// Number of samples in the logical range `0..size()`.
    fn size(&self) -> usize;

    /// Writes `out.len()` consecutive samples starting at `index`.
    ///
    /// The result only depends on `index` and the position inside `out`,
    /// never on earlier calls.
    fn evaluate_into(&self, index: usize, out: &mut [Self::Value]);

    /// Returns `width` consecutive samples starting at `index`.
    fn evaluate(&self, index: usize, width: usize) -> Vec<Self::Value> {
        let mut out = vec![Self::Value::zero(); width];
        self.evaluate_into(index, &mut out);
        out
    }

    /// Fixed-width evaluation, the array counterpart of [`Expression::evaluate`].
    #[inline]
    fn evaluate_array<const N: usize>(&self, index: usize) -> [Self::Value; N]
    where
        Self: Sized,
    {
        let mut out = [Self::Value::zero(); N];
        self.evaluate_into(index, &mut out);
        out
    }

    /// Evaluates the whole logical range.
    fn materialize(&self) -> Vec<Self::Value> {
        self.evaluate(0, self.size())
    }
}

impl<E: Expression + ?Sized> Expression for &E {
    type Value = E::Value;

    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
    #[inline]
    fn evaluate_into(&self, index: usize, out: &mut [Self::Value]) {
        (**self).evaluate_into(index, out)
    }
}

impl<E: Expression + ?Sized> Expression for Box<E> {
    type Value = E::Value;

    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
    #[inline]
    fn evaluate_into(&self, index: usize, out: &mut [Self::Value]) {
        (**self).evaluate_into(index, out)
    }
}

/// Combinators available on every sized expression.
pub trait ExpressionExt: Expression + Sized {
    /// Elementwise product. The size is the smaller of both sizes.
    fn mul<E>(self, other: E) -> Product<Self, E>
    where
        E: Expression<Value = Self::Value>,
    {
        Product { lhs: self, rhs: other }
    }

    /// Multiplies every sample by `factor`.
    fn scale(self, factor: Self::Value) -> Scaled<Self> {
        Scaled {
            inner: self,
            factor,
        }
    }

    /// Applies `f` to every sample.
    fn map<F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Value) -> Self::Value,
    {
        Map { inner: self, f }
    }
}

impl<E: Expression> ExpressionExt for E {}

#[derive(Debug, Clone)]
pub struct Product<A, B> {
    lhs: A,
    rhs: B,
}

impl<A, B> Expression for Product<A, B>
where
    A: Expression,
    B: Expression<Value = A::Value>,
{
    type Value = A::Value;

    fn size(&self) -> usize {
        self.lhs.size().min(self.rhs.size())
    }

    fn evaluate_into(&self, index: usize, out: &mut [Self::Value]) {
        self.lhs.evaluate_into(index, out);
        let mut scratch = [Self::Value::zero(); SCRATCH_LEN];
        for (n, chunk) in out.chunks_mut(SCRATCH_LEN).enumerate() {
            let rhs = &mut scratch[..chunk.len()];
            self.rhs.evaluate_into(index.saturating_add(n * SCRATCH_LEN), rhs);
            for (o, r) in chunk.iter_mut().zip(rhs.iter()) {
                *o = *o * *r;
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Scaled<E: Expression> {
    inner: E,
    factor: E::Value,
}

impl<E: Expression> Expression for Scaled<E> {
    type Value = E::Value;

    fn size(&self) -> usize {
        self.inner.size()
    }

    fn evaluate_into(&self, index: usize, out: &mut [Self::Value]) {
        self.inner.evaluate_into(index, out);
        for o in out.iter_mut() {
            *o = *o * self.factor;
        }
    }
}

#[derive(Clone)]
pub struct Map<E, F> {
    inner: E,
    f: F,
}

impl<E, F> Expression for Map<E, F>
where
    E: Expression,
    F: Fn(E::Value) -> E::Value,
{
    type Value = E::Value;

    fn size(&self) -> usize {
        self.inner.size()
    }

    fn evaluate_into(&self, index: usize, out: &mut [Self::Value]) {
        self.inner.evaluate_into(index, out);
        for o in out.iter_mut() {
            *o = (self.f)(*o);
        }
    }
}

/// Borrowed buffer seen as an expression. Reads past the end yield zero.
#[derive(Debug, Clone, Copy)]
pub struct Slice<'a, T> {
    data: &'a [T],
}

impl<'a, T: Sample> Slice<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }
}

impl<T: Sample> Expression for Slice<'_, T> {
    type Value = T;

    fn size(&self) -> usize {
        self.data.len()
    }

    fn evaluate_into(&self, index: usize, out: &mut [T]) {
        let start = index.min(self.data.len());
        let available = (self.data.len() - start).min(out.len());
        let (head, tail) = out.split_at_mut(available);
        head.copy_from_slice(&self.data[start..start + available]);
        tail.fill(T::zero());
    }
}
