/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Encode a random sequence of values on a single stream, decode it back and
//! check values and sizes.
//!
//! Values that cannot be encoded (too wide for their width field, strings
//! with a zero byte) must be rejected before anything is written.

use crate::codes::bit_field::raw_to_fb;
use crate::prelude::*;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    values: Vec<RandomValue>,
}

/// Matrix scale and rotate/skew terms are given as raw 16.16 numbers, so that
/// they survive the round trip exactly.
#[derive(Arbitrary, Debug, Clone)]
enum RandomValue {
    Twips(i32),
    EncodedU32(u32),
    Float16(u16),
    Fixed(u32),
    Fixed8(u16),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
    Argb(u8, u8, u8, u8),
    String(Vec<u8>),
    Language(u8),
    Rect(i32, i32, i32, i32),
    Matrix([i32; 4], i32, i32),
    CxForm([i16; 6]),
    CxFormWithAlpha([i16; 8]),
}

#[derive(Debug, PartialEq)]
enum Value {
    Twips(Twips),
    EncodedU32(EncodedU32),
    Float16(Float16),
    Fixed(Fixed),
    Fixed8(Fixed8),
    Rgb(Rgb),
    Rgba(Rgba),
    Argb(Argb),
    String(SwfString),
    Language(LanguageCode),
    Rect(Rect),
    Matrix(Matrix),
    CxForm(CxForm),
    CxFormWithAlpha(CxFormWithAlpha),
}

impl Value {
    fn from_random(random: &RandomValue) -> Option<Self> {
        Some(match random {
            RandomValue::Twips(v) => Value::Twips(Twips(*v)),
            RandomValue::EncodedU32(v) => Value::EncodedU32(EncodedU32(*v)),
            // NaNs do not compare equal, and their payload is not preserved
            RandomValue::Float16(half) => {
                let value = f16_bits_to_f32(*half);
                if value.is_nan() {
                    return None;
                }
                Value::Float16(Float16(value))
            }
            RandomValue::Fixed(raw) => Value::Fixed(Fixed(*raw as f64 / 65536.0)),
            RandomValue::Fixed8(raw) => Value::Fixed8(Fixed8(*raw as f32 / 256.0)),
            RandomValue::Rgb(r, g, b) => Value::Rgb(Rgb::new(*r, *g, *b)),
            RandomValue::Rgba(r, g, b, a) => Value::Rgba(Rgba::new(*r, *g, *b, *a)),
            RandomValue::Argb(a, r, g, b) => Value::Argb(Argb::new(*a, *r, *g, *b)),
            RandomValue::String(bytes) => Value::String(SwfString(bytes.clone())),
            RandomValue::Language(code) => Value::Language(LanguageCode::try_from(*code).ok()?),
            RandomValue::Rect(x_min, x_max, y_min, y_max) => Value::Rect(Rect::new(
                Twips(*x_min),
                Twips(*x_max),
                Twips(*y_min),
                Twips(*y_max),
            )),
            RandomValue::Matrix(raw, x, y) => Value::Matrix(Matrix::new(
                raw_to_fb(raw[0]),
                raw_to_fb(raw[1]),
                raw_to_fb(raw[2]),
                raw_to_fb(raw[3]),
                Twips(*x),
                Twips(*y),
            )),
            RandomValue::CxForm(t) => {
                Value::CxForm(CxForm::new(t[0], t[1], t[2], t[3], t[4], t[5]))
            }
            RandomValue::CxFormWithAlpha(t) => Value::CxFormWithAlpha(CxFormWithAlpha::new(
                t[0], t[1], t[2], t[3], t[4], t[5], t[6], t[7],
            )),
        })
    }

    /// Return whether the value can be encoded.
    fn is_encodable(&self) -> bool {
        match self {
            Value::String(s) => !s.as_bytes().contains(&0),
            Value::Rect(r) => r.field_width() <= 31,
            Value::Matrix(m) => m.field_widths().iter().flatten().all(|&w| w <= 31),
            Value::CxForm(c) => c.field_width() <= 15,
            Value::CxFormWithAlpha(c) => c.field_width() <= 15,
            _ => true,
        }
    }

    fn encode<W: ByteWrite + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        match self {
            Value::Twips(v) => v.encode(writer),
            Value::EncodedU32(v) => v.encode(writer),
            Value::Float16(v) => v.encode(writer),
            Value::Fixed(v) => v.encode(writer),
            Value::Fixed8(v) => v.encode(writer),
            Value::Rgb(v) => v.encode(writer),
            Value::Rgba(v) => v.encode(writer),
            Value::Argb(v) => v.encode(writer),
            Value::String(v) => v.encode(writer),
            Value::Language(v) => v.encode(writer),
            Value::Rect(v) => v.encode(writer),
            Value::Matrix(v) => v.encode(writer),
            Value::CxForm(v) => v.encode(writer),
            Value::CxFormWithAlpha(v) => v.encode(writer),
        }
    }

    fn byte_size(&self) -> usize {
        match self {
            Value::Twips(v) => v.byte_size(),
            Value::EncodedU32(v) => v.byte_size(),
            Value::Float16(v) => v.byte_size(),
            Value::Fixed(v) => v.byte_size(),
            Value::Fixed8(v) => v.byte_size(),
            Value::Rgb(v) => v.byte_size(),
            Value::Rgba(v) => v.byte_size(),
            Value::Argb(v) => v.byte_size(),
            Value::String(v) => v.byte_size(),
            Value::Language(v) => v.byte_size(),
            Value::Rect(v) => v.byte_size(),
            Value::Matrix(v) => v.byte_size(),
            Value::CxForm(v) => v.byte_size(),
            Value::CxFormWithAlpha(v) => v.byte_size(),
        }
    }

    /// Decode a value of the same type as `self`.
    fn decode_like<R: ByteRead + ?Sized>(&self, reader: &mut R) -> Result<(Self, usize)> {
        fn wrap<T>(result: Result<(T, usize)>, f: fn(T) -> Value) -> Result<(Value, usize)> {
            result.map(|(value, len)| (f(value), len))
        }
        match self {
            Value::Twips(_) => wrap(Twips::decode(reader), Value::Twips),
            Value::EncodedU32(_) => wrap(EncodedU32::decode(reader), Value::EncodedU32),
            Value::Float16(_) => wrap(Float16::decode(reader), Value::Float16),
            Value::Fixed(_) => wrap(Fixed::decode(reader), Value::Fixed),
            Value::Fixed8(_) => wrap(Fixed8::decode(reader), Value::Fixed8),
            Value::Rgb(_) => wrap(Rgb::decode(reader), Value::Rgb),
            Value::Rgba(_) => wrap(Rgba::decode(reader), Value::Rgba),
            Value::Argb(_) => wrap(Argb::decode(reader), Value::Argb),
            Value::String(_) => wrap(SwfString::decode(reader), Value::String),
            Value::Language(_) => wrap(LanguageCode::decode(reader), Value::Language),
            Value::Rect(_) => wrap(Rect::decode(reader), Value::Rect),
            Value::Matrix(_) => wrap(Matrix::decode(reader), Value::Matrix),
            Value::CxForm(_) => wrap(CxForm::decode(reader), Value::CxForm),
            Value::CxFormWithAlpha(_) => {
                wrap(CxFormWithAlpha::decode(reader), Value::CxFormWithAlpha)
            }
        }
    }
}

pub fn harness(data: FuzzCase) {
    let values: Vec<Value> = data.values.iter().filter_map(Value::from_random).collect();

    let mut buffer: Vec<u8> = vec![];
    let mut written = vec![];
    {
        let mut writer = MemByteWriterVec::new(&mut buffer);
        for value in values {
            let start = writer.bytes_written();
            match value.encode(&mut writer) {
                Ok(len) => {
                    assert!(value.is_encodable(), "{:?} should not be encodable", value);
                    assert_eq!(len, value.byte_size(), "{:?}", value);
                    assert_eq!(writer.bytes_written() - start, len as u64);
                    written.push(value);
                }
                Err(err) => {
                    assert!(!value.is_encodable(), "{:?}: {}", value, err);
                    assert!(matches!(
                        err.root(),
                        Error::InteriorNul { .. } | Error::InvalidFieldRange { .. }
                    ));
                    assert_eq!(writer.bytes_written(), start);
                }
            }
        }
    }

    let mut reader = MemByteReader::new(&buffer);
    for value in &written {
        let start = reader.bytes_read();
        let (read, len) = value.decode_like(&mut reader).unwrap();
        assert_eq!(&read, value);
        assert_eq!(len, value.byte_size());
        assert_eq!(reader.bytes_read() - start, len as u64);
    }
    assert!(reader.remaining().is_empty());
}
