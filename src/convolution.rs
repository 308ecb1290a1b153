//! Direct linear convolution.

use crate::sample::Sample;

/// Full linear convolution, `a.len() + b.len() - 1` samples long.
///
/// Returns an empty vector if either input is empty.
pub fn convolve<T: Sample>(a: &[T], b: &[T]) -> Vec<T> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![T::zero(); a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (o, &h) in out[i..].iter_mut().zip(b) {
            *o = x.mul_add(h, *o);
        }
    }
    out
}
