use std::simd::{LaneCount, Simd, SimdElement, SupportedLaneCount};

use super::Expression;

/// Evaluation straight into a portable SIMD vector.
pub trait SimdExpression: Expression
where
    Self::Value: SimdElement,
{
    #[inline(always)]
    fn evaluate_simd<const N: usize>(&self, index: usize) -> Simd<Self::Value, N>
    where
        Self: Sized,
        LaneCount<N>: SupportedLaneCount,
    {
        Simd::from_array(self.evaluate_array::<N>(index))
    }
}

impl<E: Expression> SimdExpression for E where E::Value: SimdElement {}
