/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Operations on heterogeneous sequences of values.
//!
//! Records are often described as a list of fields of different types to be
//! read or written in order. [`DecodeField`] and [`EncodeField`] are
//! dyn-compatible versions of [`Decode`] and [`Encode`], implemented for all
//! types implementing the latter, so that such a list can be written as a
//! slice of trait objects:
//!
//! ```
//! use swf_codec::prelude::*;
//!
//! let (mut id, mut color, mut name) = (0_u16, Rgb::default(), SwfString::default());
//! let mut reader = MemByteReader::new([1, 0, 255, 128, 0, b'a', 0]);
//! let len = read_all(&mut reader, &mut [&mut id, &mut color, &mut name]).unwrap();
//! assert_eq!(len, 7);
//! assert_eq!((id, color, name.to_str()), (1, Rgb::new(255, 128, 0), Ok("a")));
//! ```
//!
//! All functions stop at the first error and return it; values read or
//! written before the error are not rolled back.

use crate::error::Result;
use crate::traits::*;

/// A dyn-compatible version of [`Decode`] that decodes in place.
pub trait DecodeField {
    /// Replace `self` with a value read from `reader` and return the number
    /// of bytes consumed.
    ///
    /// On error, `self` is left unchanged.
    fn decode_from(&mut self, reader: &mut dyn ByteRead) -> Result<usize>;
}

/// A dyn-compatible version of [`Encode`].
pub trait EncodeField {
    /// Write `self` to `writer` and return the number of bytes written.
    fn encode_to(&self, writer: &mut dyn ByteWrite) -> Result<usize>;

    /// Return the exact number of bytes [`EncodeField::encode_to`] would
    /// write.
    fn encoded_size(&self) -> usize;
}

impl<T: Decode> DecodeField for T {
    #[inline]
    fn decode_from(&mut self, reader: &mut dyn ByteRead) -> Result<usize> {
        let (value, len) = T::decode(reader)?;
        *self = value;
        Ok(len)
    }
}

impl<T: Encode> EncodeField for T {
    #[inline]
    fn encode_to(&self, writer: &mut dyn ByteWrite) -> Result<usize> {
        self.encode(writer)
    }

    #[inline]
    fn encoded_size(&self) -> usize {
        self.byte_size()
    }
}

/// Decode the given fields in order, returning the total number of bytes
/// consumed.
pub fn read_all<R: ByteRead + ?Sized>(
    mut reader: &mut R,
    fields: &mut [&mut dyn DecodeField],
) -> Result<usize> {
    let mut total = 0;
    for field in fields.iter_mut() {
        total += field.decode_from(&mut reader)?;
    }
    Ok(total)
}

/// Encode the given fields in order, returning the total number of bytes
/// written.
pub fn write_all<W: ByteWrite + ?Sized>(
    mut writer: &mut W,
    fields: &[&dyn EncodeField],
) -> Result<usize> {
    let mut total = 0;
    for field in fields {
        total += field.encode_to(&mut writer)?;
    }
    Ok(total)
}

/// Return the total number of bytes [`write_all`] would write.
pub fn total_size(fields: &[&dyn EncodeField]) -> usize {
    fields.iter().map(|field| field.encoded_size()).sum()
}
