//! Raw binary sample streams.
//!
//! Samples are stored at their own precision (`f32` or `f64`) in the byte
//! order chosen by the caller, without any header.

use std::io::{Read, Write};

use byteorder::{ByteOrder, ReadBytesExt, WriteBytesExt};

use crate::{expression::Expression, sample::Sample};

/// Precision a [`Sample`] is stored at.
pub trait BinarySample: Sample {
    fn write_to<B: ByteOrder>(self, writer: impl Write) -> std::io::Result<()>;
    fn read_from<B: ByteOrder>(reader: impl Read) -> std::io::Result<Self>;
}

impl BinarySample for f32 {
    fn write_to<B: ByteOrder>(self, mut writer: impl Write) -> std::io::Result<()> {
        writer.write_f32::<B>(self)
    }
    fn read_from<B: ByteOrder>(mut reader: impl Read) -> std::io::Result<Self> {
        reader.read_f32::<B>()
    }
}

impl BinarySample for f64 {
    fn write_to<B: ByteOrder>(self, mut writer: impl Write) -> std::io::Result<()> {
        writer.write_f64::<B>(self)
    }
    fn read_from<B: ByteOrder>(mut reader: impl Read) -> std::io::Result<Self> {
        reader.read_f64::<B>()
    }
}

/// Materializes `expr` and writes every sample. Returns the number written.
pub fn write_samples<B, E>(mut writer: impl Write, expr: &E) -> std::io::Result<usize>
where
    B: ByteOrder,
    E: Expression + ?Sized,
    E::Value: BinarySample,
{
    let samples = expr.materialize();
    for &sample in &samples {
        sample.write_to::<B>(&mut writer)?;
    }
    log::debug!("Wrote {} samples", samples.len());
    Ok(samples.len())
}

/// Reads exactly `count` samples.
pub fn read_samples<B, T>(mut reader: impl Read, count: usize) -> std::io::Result<Vec<T>>
where
    B: ByteOrder,
    T: BinarySample,
{
    (0..count)
        .map(|_| T::read_from::<B>(&mut reader))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, ErrorKind};

    use byteorder::{BigEndian, LittleEndian};

    use super::{read_samples, write_samples};
    use crate::{
        expression::Expression,
        window::{WindowFamily, WindowSpec},
    };

    #[test]
    fn round_trip_f64() {
        let window = WindowSpec::new(WindowFamily::Kaiser, 33).build::<f64>();
        let mut bytes = Vec::new();
        let written = write_samples::<LittleEndian, _>(&mut bytes, &window).unwrap();
        assert_eq!(written, 33);
        assert_eq!(bytes.len(), 33 * 8);

        let read: Vec<f64> = read_samples::<LittleEndian, _>(Cursor::new(&bytes), 33).unwrap();
        assert_eq!(read, window.materialize());
    }

    #[test]
    fn round_trip_boxed_f32_big_endian() {
        let window = WindowSpec::new(WindowFamily::Hann, 5).boxed::<f32>();
        let mut bytes = Vec::new();
        write_samples::<BigEndian, _>(&mut bytes, &*window).unwrap();
        assert_eq!(bytes.len(), 5 * 4);
        // hann(5)[2] == 1.0
        assert_eq!(&bytes[8..12], &[0x3f, 0x80, 0x00, 0x00]);

        let read: Vec<f32> = read_samples::<BigEndian, _>(Cursor::new(&bytes), 5).unwrap();
        assert_eq!(read, window.materialize());
    }

    #[test]
    fn short_input_is_an_error() {
        let bytes = [0u8; 12];
        let err = read_samples::<LittleEndian, f64>(Cursor::new(&bytes), 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }
}
