/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{Error, Result};
use crate::traits::*;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// A bit writer on top of a [`ByteWrite`].
///
/// Bits are accumulated most-significant first in a pending byte, which is
/// emitted as soon as it is full. There is no buffering beyond that byte, and
/// no implicit flush on drop: a partial byte is emitted only by
/// [`BitWrite::align`], by a byte-level write, by [`ByteWrite::flush`] or by
/// [`BitWriter::into_inner`].
///
/// The writer implements [`ByteWrite`], too: byte-level writes zero-pad and
/// emit the pending byte first, so that they start at a byte boundary.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct BitWriter<W: ByteWrite> {
    /// The backend.
    backend: W,
    /// The bits written so far to the current byte, in the lowest bits.
    pending: u8,
    /// Number of bits in `pending`.
    bits_used: usize,
}

impl<W: ByteWrite> BitWriter<W> {
    /// Create a new [`BitWriter`] around a [`ByteWrite`].
    #[must_use]
    pub fn new(backend: W) -> Self {
        Self {
            backend,
            pending: 0,
            bits_used: 0,
        }
    }

    /// Return true if no bits are pending.
    #[inline(always)]
    pub fn is_aligned(&self) -> bool {
        self.bits_used == 0
    }

    /// Align the stream and return the backend.
    pub fn into_inner(mut self) -> Result<W> {
        BitWrite::align(&mut self)?;
        Ok(self.backend)
    }
}

impl<W: ByteWrite> BitWrite for BitWriter<W> {
    fn write_bits(&mut self, value: u64, n: usize) -> Result<usize> {
        if n > 64 {
            return Err(Error::InvalidFieldRange {
                kind: "bit write",
                width: n,
                max: 64,
            });
        }
        #[cfg(feature = "checks")]
        if n < 64 && value >> n != 0 {
            return Err(Error::ValueTooWide {
                value: value as i64,
                width: n,
            });
        }
        let mut remaining = n;
        while remaining > 0 {
            let take = remaining.min(8 - self.bits_used);
            let chunk = (value >> (remaining - take)) & ((1_u64 << take) - 1);
            self.pending = (((self.pending as u16) << take) | chunk as u16) as u8;
            self.bits_used += take;
            remaining -= take;
            if self.bits_used == 8 {
                self.backend.write_byte(self.pending)?;
                self.pending = 0;
                self.bits_used = 0;
            }
        }
        Ok(n)
    }

    fn align(&mut self) -> Result<usize> {
        if self.bits_used == 0 {
            return Ok(0);
        }
        let padding = 8 - self.bits_used;
        self.backend.write_byte(self.pending << padding)?;
        self.pending = 0;
        self.bits_used = 0;
        Ok(padding)
    }
}

impl<W: ByteWrite> ByteWrite for BitWriter<W> {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        BitWrite::align(self)?;
        self.backend.write_byte(byte)
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        BitWrite::align(self)?;
        self.backend.write_all(buf)
    }

    fn flush(&mut self) -> Result<()> {
        BitWrite::align(self)?;
        self.backend.flush()
    }

    #[inline(always)]
    fn bytes_written(&self) -> u64 {
        self.backend.bytes_written()
    }
}
