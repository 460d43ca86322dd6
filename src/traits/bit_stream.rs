/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::Result;

/// Sequential, streaming bit-by-bit reads.
///
/// Bits are served most-significant first within each byte. This trait
/// specifies the basic operations over which bit-field codes are implemented
/// by traits such as [`crate::codes::BitFieldRead`].
pub trait BitRead {
    /// Read `n` bits and return them in the lowest bits.
    ///
    /// `n` must be at most 64; larger values return
    /// [`crate::Error::InvalidFieldRange`]. Reading zero bits returns zero
    /// and does not touch the stream.
    fn read_bits(&mut self, n: usize) -> Result<u64>;

    /// Discard the bits left in the current partial byte, if any.
    ///
    /// The next read starts at a byte boundary. Calling this method on an
    /// aligned stream does nothing.
    fn align(&mut self);
}

/// Sequential, streaming bit-by-bit writes.
///
/// Bits are accumulated most-significant first and a byte is emitted as soon
/// as eight bits are available.
pub trait BitWrite {
    /// Write the lowest `n` bits of `value` to the stream and return the
    /// number of bits written, that is, `n`.
    ///
    /// `n` must be at most 64; larger values return
    /// [`crate::Error::InvalidFieldRange`]. The bits of `value` above the
    /// lowest `n` are ignored, unless the `checks` feature is enabled, in
    /// which case they must be zero.
    fn write_bits(&mut self, value: u64, n: usize) -> Result<usize>;

    /// Pad the current partial byte with zeros and emit it.
    ///
    /// Return the number of padding bits written, which is zero if the
    /// stream was already aligned.
    fn align(&mut self) -> Result<usize>;
}

impl<R: BitRead + ?Sized> BitRead for &mut R {
    #[inline(always)]
    fn read_bits(&mut self, n: usize) -> Result<u64> {
        (**self).read_bits(n)
    }

    #[inline(always)]
    fn align(&mut self) {
        (**self).align()
    }
}

impl<W: BitWrite + ?Sized> BitWrite for &mut W {
    #[inline(always)]
    fn write_bits(&mut self, value: u64, n: usize) -> Result<usize> {
        (**self).write_bits(value, n)
    }

    #[inline(always)]
    fn align(&mut self) -> Result<usize> {
        (**self).align()
    }
}
