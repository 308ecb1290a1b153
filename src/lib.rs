#![cfg_attr(feature = "simd", feature(portable_simd))]

pub mod bessel;
pub mod convolution;
pub mod expression;
pub mod fir;
pub mod io;
pub mod linspace;
pub mod sample;
pub mod units;
pub mod window;

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{
        convolution::convolve,
        expression::{Expression, ExpressionExt, Slice},
        fir::fracdelay,
        units::{amp_to_db, db_to_amp},
        window::{WindowFamily, WindowSpec, WindowSymmetry, window},
    };

    #[test]
    fn convolution_regression() {
        let signal = [1.0, 2.0, 3.0, 4.0, 5.0];
        let kernel = [0.25, 0.5, 1.0, 0.5, 0.25];
        let expected = [0.25, 1.0, 2.75, 5.0, 7.5, 8.5, 7.75, 3.5, 1.25];
        for (got, want) in convolve::<f64>(&signal, &kernel).into_iter().zip(expected) {
            assert_abs_diff_eq!(got, want, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn windowed_delayed_convolved() {
        let signal: Vec<f64> = (0..16).map(|i| (i as f64 * 0.4).sin()).collect();
        let hann = window::<f64>(16, WindowFamily::Hann, None, WindowSymmetry::Symmetric);

        let windowed = (&hann).mul(Slice::new(&signal));
        assert_eq!(windowed.size(), 16);
        let tapered = windowed.materialize();
        assert_eq!(tapered[0], 0.0);
        assert_abs_diff_eq!(tapered[15], 0.0, epsilon = 1.0e-15);

        let delayed = fracdelay(Slice::new(&tapered), 1.0).materialize();
        assert_eq!(delayed[0], 0.0);
        assert_eq!(delayed[1..], tapered[..15]);

        let kernel = WindowSpec::new(WindowFamily::Rectangular, 3).build::<f64>().materialize();
        let smoothed = convolve(&tapered, &kernel);
        assert_eq!(smoothed.len(), 18);
        for i in 2..16 {
            assert_abs_diff_eq!(
                smoothed[i],
                tapered[i] + tapered[i - 1] + tapered[i - 2],
                epsilon = 1.0e-12
            );
        }
    }

    #[test]
    fn spec_drives_window_and_levels() {
        let spec = WindowSpec::new(WindowFamily::Kaiser, 9)
            .with_shape_param(6.0)
            .unwrap();
        let levels = spec.build::<f64>().map(amp_to_db).materialize();
        assert_abs_diff_eq!(levels[4], 0.0, epsilon = 1.0e-12);
        assert!(levels[0] < levels[2]);

        let gains: Vec<f64> = levels.iter().copied().map(db_to_amp).collect();
        for (gain, sample) in gains.iter().zip(spec.build::<f64>().materialize()) {
            assert_abs_diff_eq!(*gain, sample, epsilon = 1.0e-12);
        }
    }
}
