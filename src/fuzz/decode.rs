/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Decode values of random types from random bytes.
//!
//! Decoding must never panic. Every value decoded successfully must be
//! encodable, and its canonical encoding must decode to the same value.

use crate::prelude::*;
use arbitrary::Arbitrary;
use core::fmt::Debug;

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    kinds: Vec<Kind>,
    data: Vec<u8>,
}

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Kind {
    EncodedU32,
    Float16,
    Fixed,
    Fixed8,
    Argb,
    String,
    Language,
    Rect,
    Matrix,
    CxForm,
    CxFormWithAlpha,
}

fn check<T, R>(reader: &mut R) -> Result<()>
where
    T: Decode + Encode + PartialEq + Debug,
    R: ByteRead + ?Sized,
{
    let start = reader.bytes_read();
    let (value, len) = T::decode(reader)?;
    assert_eq!(reader.bytes_read() - start, len as u64);

    let mut buffer: Vec<u8> = vec![];
    let written = value.encode(&mut MemByteWriterVec::new(&mut buffer)).unwrap();
    assert_eq!(written, buffer.len());
    assert_eq!(written, value.byte_size());
    let (again, again_len) = T::decode(&mut MemByteReader::new(&buffer)).unwrap();
    assert_eq!(again, value);
    assert_eq!(again_len, written);
    Ok(())
}

pub fn harness(data: FuzzCase) {
    let mut reader = MemByteReader::new(&data.data);
    for kind in &data.kinds {
        let result = match kind {
            Kind::EncodedU32 => check::<EncodedU32, _>(&mut reader),
            Kind::Float16 => {
                // NaNs do not compare equal
                let (value, len) = match Float16::decode(&mut reader) {
                    Ok(decoded) => decoded,
                    Err(_) => break,
                };
                assert_eq!(len, 2);
                if !value.0.is_nan() {
                    let half = f32_to_f16_bits(value.0);
                    assert_eq!(f16_bits_to_f32(half), value.0);
                }
                Ok(())
            }
            Kind::Fixed => check::<Fixed, _>(&mut reader),
            Kind::Fixed8 => check::<Fixed8, _>(&mut reader),
            Kind::Argb => check::<Argb, _>(&mut reader),
            Kind::String => check::<SwfString, _>(&mut reader),
            Kind::Language => check::<LanguageCode, _>(&mut reader),
            Kind::Rect => check::<Rect, _>(&mut reader),
            Kind::Matrix => check::<Matrix, _>(&mut reader),
            Kind::CxForm => check::<CxForm, _>(&mut reader),
            Kind::CxFormWithAlpha => check::<CxFormWithAlpha, _>(&mut reader),
        };
        // Streams are not resynchronized after an error
        if result.is_err() {
            break;
        }
    }
    assert!(reader.bytes_read() <= data.data.len() as u64);
}
