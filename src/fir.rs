//! Short FIR filters evaluated lazily over another expression.

use num_traits::{Float, One, Zero};

use crate::expression::{Expression, SCRATCH_LEN};

/// `y[i] = Σ taps[k] · x[i - k]`, with `x` read as zero before index 0.
///
/// The output has the size of the input; the filter tail past the end is
/// still readable through [`Expression::evaluate`].
#[derive(Debug, Clone)]
pub struct ShortFir<E: Expression, const TAPS: usize> {
    input: E,
    taps: [E::Value; TAPS],
}

impl<E: Expression, const TAPS: usize> ShortFir<E, TAPS> {
    pub fn new(input: E, taps: [E::Value; TAPS]) -> Self {
        Self { input, taps }
    }

    pub fn taps(&self) -> &[E::Value; TAPS] {
        &self.taps
    }

    pub fn input(&self) -> &E {
        &self.input
    }

    /// `x` holds `history` samples of context followed by one input sample
    /// per output sample.
    fn filter(&self, x: &[E::Value], history: usize, out: &mut [E::Value]) {
        for (j, o) in out.iter_mut().enumerate() {
            let newest = j + history;
            *o = self
                .taps
                .iter()
                .take(newest + 1)
                .enumerate()
                .fold(E::Value::zero(), |acc, (k, &tap)| tap.mul_add(x[newest - k], acc));
        }
    }
}

impl<E: Expression, const TAPS: usize> Expression for ShortFir<E, TAPS> {
    type Value = E::Value;

    fn size(&self) -> usize {
        self.input.size()
    }

    fn evaluate_into(&self, index: usize, out: &mut [Self::Value]) {
        let span = TAPS.saturating_sub(1);
        if span >= SCRATCH_LEN / 2 {
            let history = index.min(span);
            let x = self.input.evaluate(index - history, out.len() + history);
            return self.filter(&x, history, out);
        }

        let mut scratch = [Self::Value::zero(); SCRATCH_LEN];
        let mut position = index;
        for chunk in out.chunks_mut(SCRATCH_LEN - span) {
            let history = position.min(span);
            let x = &mut scratch[..chunk.len() + history];
            self.input.evaluate_into(position - history, x);
            self.filter(x, history, chunk);
            position = position.saturating_add(chunk.len());
        }
    }
}

/// Delays `input` by a fraction of a sample using linear interpolation.
///
/// Negative delays are treated as 0 and delays above 1 keep only their
/// fractional part.
pub fn fracdelay<E: Expression>(input: E, delay: E::Value) -> ShortFir<E, 2> {
    let delay = if delay < E::Value::zero() {
        E::Value::zero()
    } else if delay > E::Value::one() {
        delay.fract()
    } else {
        delay
    };
    log::trace!("Fractional delay of {:?} samples", delay);
    ShortFir::new(input, [E::Value::one() - delay, delay])
}
