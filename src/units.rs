//! Level and pitch conversions.
//!
//! All functions are generic over [`Sample`] and come in a scalar form and
//! an in-place slice form. To convert lazily, map an expression:
//! `expr.map(amp_to_db)`.

use crate::sample::Sample;

/// `20 / ln(10)`
const AMP_TO_DB: f64 = 8.6858896380650365530225783783322;
/// `ln(10) / 20`
const DB_TO_AMP: f64 = 0.11512925464970228420089957273422;
/// `ln(2) / 12`, one semitone on a natural-log scale.
const NOTE_TO_LOG_HERTZ: f64 = 0.05776226504666210911810267678818;
/// `12 / ln(2)`
const LOG_HERTZ_TO_NOTE: f64 = 17.312340490667560888319096172023;
/// `ln(440) - 69 ln(2) / 12`, MIDI note 69 tuned to 440 Hz.
const NOTE_TO_HERTZ_OFFSET: f64 = 2.1011784386926213177653145771814;
/// `-69 - 12 log2(440)` scaled onto the natural log.
const HERTZ_TO_NOTE_OFFSET: f64 = -36.376316562295915248836189714583;

#[inline]
pub fn amp_to_db<T: Sample>(amp: T) -> T {
    amp.ln() * T::from_f64(AMP_TO_DB)
}

#[inline]
pub fn db_to_amp<T: Sample>(db: T) -> T {
    (db * T::from_f64(DB_TO_AMP)).exp()
}

/// `amp_to_db(amp) + offset`
#[inline]
pub fn amp_to_db_with_offset<T: Sample>(amp: T, offset: T) -> T {
    amp.ln().mul_add(T::from_f64(AMP_TO_DB), offset)
}

/// `db_to_amp(db - offset)`
#[inline]
pub fn db_to_amp_with_offset<T: Sample>(db: T, offset: T) -> T {
    let k = T::from_f64(DB_TO_AMP);
    db.mul_add(k, -k * offset).exp()
}

#[inline]
pub fn power_to_db<T: Sample>(power: T) -> T {
    power.ln() * (T::from_f64(10.0) * T::LN_10().recip())
}

/// Inverse of [`power_to_db`]. `-∞ dB` is exactly zero power.
#[inline]
pub fn db_to_power<T: Sample>(db: T) -> T {
    if db == T::neg_infinity() {
        T::zero()
    } else {
        (db * (T::LN_10() / T::from_f64(10.0))).exp()
    }
}

/// MIDI note number to frequency, A4 (69) = 440 Hz.
#[inline]
pub fn note_to_hertz<T: Sample>(note: T) -> T {
    note.mul_add(T::from_f64(NOTE_TO_LOG_HERTZ), T::from_f64(NOTE_TO_HERTZ_OFFSET))
        .exp()
}

/// Frequency to (fractional) MIDI note number, A4 (69) = 440 Hz.
#[inline]
pub fn hertz_to_note<T: Sample>(hertz: T) -> T {
    hertz
        .ln()
        .mul_add(T::from_f64(LOG_HERTZ_TO_NOTE), T::from_f64(HERTZ_TO_NOTE_OFFSET))
}

/// [`note_to_hertz`] with `tune_note` sounding at `tune_hertz`.
#[inline]
pub fn note_to_hertz_tuned<T: Sample>(note: T, tune_note: T, tune_hertz: T) -> T {
    let k = T::from_f64(NOTE_TO_LOG_HERTZ);
    let offset = tune_hertz.ln() - tune_note * k;
    note.mul_add(k, offset).exp()
}

/// [`hertz_to_note`] with `tune_note` sounding at `tune_hertz`.
#[inline]
pub fn hertz_to_note_tuned<T: Sample>(hertz: T, tune_note: T, tune_hertz: T) -> T {
    let k = T::from_f64(LOG_HERTZ_TO_NOTE);
    let offset = tune_note - tune_hertz.ln() * k;
    hertz.ln().mul_add(k, offset)
}

macro_rules! in_place {
    ($($name:ident => $f:ident),* $(,)?) => {
        $(
            #[doc = concat!("Applies [`", stringify!($f), "`] to every element.")]
            pub fn $name<T: Sample>(values: &mut [T]) {
                for v in values.iter_mut() {
                    *v = $f(*v);
                }
            }
        )*
    };
}

in_place!(
    amp_to_db_in_place => amp_to_db,
    db_to_amp_in_place => db_to_amp,
    power_to_db_in_place => power_to_db,
    db_to_power_in_place => db_to_power,
    note_to_hertz_in_place => note_to_hertz,
    hertz_to_note_in_place => hertz_to_note,
);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        expression::{Expression, ExpressionExt},
        window::shapes::Rectangular,
    };

    #[test]
    fn db_to_power_of_negative_infinity() {
        assert_eq!(db_to_power(f64::NEG_INFINITY), 0.0);
        assert_eq!(db_to_power(f32::NEG_INFINITY), 0.0);
        assert_eq!(power_to_db(0.0f64), f64::NEG_INFINITY);
    }

    #[test]
    fn amplitude_round_trip() {
        for i in -100..=100 {
            let x = i as f64;
            assert_abs_diff_eq!(amp_to_db(db_to_amp(x)), x, epsilon = 1.0e-10);
            assert_abs_diff_eq!(power_to_db(db_to_power(x)), x, epsilon = 1.0e-10);
        }
        for x in [-100.0f32, -3.0, 0.0, 6.0, 100.0] {
            assert_abs_diff_eq!(amp_to_db(db_to_amp(x)), x, epsilon = 1.0e-3);
        }
    }

    #[test]
    fn reference_levels() {
        assert_abs_diff_eq!(amp_to_db(10.0f64), 20.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(amp_to_db(1.0f64), 0.0, epsilon = 1.0e-15);
        assert_abs_diff_eq!(power_to_db(10.0f64), 10.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(db_to_amp(-6.0f64), 0.501187233627272, epsilon = 1.0e-12);
        assert_abs_diff_eq!(db_to_power(3.0f64), 1.9952623149688795, epsilon = 1.0e-12);
    }

    #[test]
    fn offsets() {
        assert_abs_diff_eq!(amp_to_db_with_offset(10.0f64, 3.0), 23.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(
            db_to_amp_with_offset(26.0f64, 6.0),
            db_to_amp(20.0),
            epsilon = 1.0e-12
        );
    }

    #[test]
    fn notes() {
        assert_abs_diff_eq!(note_to_hertz(69.0f64), 440.0, epsilon = 1.0e-9);
        assert_abs_diff_eq!(note_to_hertz(57.0f64), 220.0, epsilon = 1.0e-9);
        assert_abs_diff_eq!(hertz_to_note(440.0f64), 69.0, epsilon = 1.0e-9);
        assert_abs_diff_eq!(hertz_to_note(261.6255653005986f64), 60.0, epsilon = 1.0e-9);
        assert_abs_diff_eq!(note_to_hertz_tuned(69.0f64, 69.0, 432.0), 432.0, epsilon = 1.0e-9);
        assert_abs_diff_eq!(hertz_to_note_tuned(864.0f64, 69.0, 432.0), 81.0, epsilon = 1.0e-9);
    }

    #[test]
    fn slices_and_expressions() {
        let mut levels = [0.0f64, -20.0, 20.0];
        db_to_amp_in_place(&mut levels);
        assert_abs_diff_eq!(levels[1], 0.1, epsilon = 1.0e-12);
        amp_to_db_in_place(&mut levels);
        assert_abs_diff_eq!(levels[2], 20.0, epsilon = 1.0e-10);

        let mut notes = [69.0f64, 81.0];
        note_to_hertz_in_place(&mut notes);
        assert_abs_diff_eq!(notes[1], 880.0, epsilon = 1.0e-9);
        hertz_to_note_in_place(&mut notes);
        assert_abs_diff_eq!(notes[0], 69.0, epsilon = 1.0e-9);

        let mut powers = [f64::NEG_INFINITY, 0.0];
        db_to_power_in_place(&mut powers);
        assert_eq!(powers[0], 0.0);
        power_to_db_in_place(&mut powers);
        assert_abs_diff_eq!(powers[1], 0.0, epsilon = 1.0e-15);

        let gains = Rectangular::<f64>::new(4).scale(0.5).map(amp_to_db);
        for db in gains.evaluate(0, 4) {
            assert_abs_diff_eq!(db, -6.020599913279624, epsilon = 1.0e-12);
        }
    }
}
