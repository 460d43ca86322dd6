/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::Result;
use crate::traits::*;

/// A value that can be read from a byte stream.
pub trait Decode: Sized {
    /// Read a value from `reader`, returning the value and the number of
    /// bytes consumed.
    ///
    /// On failure the reader may have been advanced; its
    /// [`ByteRead::bytes_read`] counter tells by how much.
    fn decode<R: ByteRead + ?Sized>(reader: &mut R) -> Result<(Self, usize)>;
}

/// A value that can be written to a byte stream.
pub trait Encode {
    /// Write the value to `writer`, returning the number of bytes written.
    fn encode<W: ByteWrite + ?Sized>(&self, writer: &mut W) -> Result<usize>;

    /// Return the exact number of bytes [`Encode::encode`] would write.
    ///
    /// This method does not touch any stream.
    fn byte_size(&self) -> usize;
}

/// A value that can be read from a bit stream at an externally chosen width.
pub trait BitDecode: Sized {
    /// Read a value of `width` bits from `reader`.
    fn decode_bits<R: BitRead + ?Sized>(reader: &mut R, width: usize) -> Result<Self>;
}

/// A value that can be written to a bit stream at an externally chosen width.
pub trait BitEncode {
    /// Write the value using `width` bits, returning the number of bits
    /// written.
    fn encode_bits<W: BitWrite + ?Sized>(&self, writer: &mut W, width: usize) -> Result<usize>;

    /// Return the minimum number of bits needed to represent the value.
    ///
    /// The result does not depend on the width a container might choose.
    fn bit_size(&self) -> usize;
}

/// Run `f` on `reader` and pair its result with the number of bytes it
/// consumed, as measured by [`ByteRead::bytes_read`].
#[inline]
pub fn decode_counted<R, T, F>(reader: &mut R, f: F) -> Result<(T, usize)>
where
    R: ByteRead + ?Sized,
    F: FnOnce(&mut R) -> Result<T>,
{
    let start = reader.bytes_read();
    let value = f(reader)?;
    Ok((value, (reader.bytes_read() - start) as usize))
}
