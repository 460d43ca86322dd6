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

/// A bit reader on top of a [`ByteRead`].
///
/// The reader holds at most one partially consumed byte, whose bits are served
/// most-significant first. A new byte is pulled from the backend only when the
/// pending one is exhausted.
///
/// The reader implements [`ByteRead`], too: byte-level reads discard the bits
/// left in the pending byte first, so that they start at a byte boundary.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct BitReader<R: ByteRead> {
    /// The backend.
    backend: R,
    /// The current partial byte; only its lowest `bits_left` bits are unread.
    pending: u8,
    /// Number of unread bits in `pending`.
    bits_left: usize,
}

impl<R: ByteRead> BitReader<R> {
    /// Create a new [`BitReader`] around a [`ByteRead`].
    #[must_use]
    pub fn new(backend: R) -> Self {
        Self {
            backend,
            pending: 0,
            bits_left: 0,
        }
    }

    /// Return true if no bits are pending.
    #[inline(always)]
    pub fn is_aligned(&self) -> bool {
        self.bits_left == 0
    }

    /// Return the backend, discarding any pending bits.
    pub fn into_inner(self) -> R {
        self.backend
    }
}

impl<R: ByteRead> BitRead for BitReader<R> {
    fn read_bits(&mut self, n: usize) -> Result<u64> {
        if n > 64 {
            return Err(Error::InvalidFieldRange {
                kind: "bit read",
                width: n,
                max: 64,
            });
        }
        let mut result = 0_u64;
        let mut remaining = n;
        while remaining > 0 {
            if self.bits_left == 0 {
                self.pending = self.backend.read_byte()?;
                self.bits_left = 8;
            }
            let take = remaining.min(self.bits_left);
            let shift = self.bits_left - take;
            let chunk = (self.pending >> shift) as u64 & ((1_u64 << take) - 1);
            result = (result << take) | chunk;
            self.bits_left -= take;
            remaining -= take;
        }
        Ok(result)
    }

    #[inline(always)]
    fn align(&mut self) {
        self.bits_left = 0;
    }
}

impl<R: ByteRead> ByteRead for BitReader<R> {
    #[inline]
    fn read_byte(&mut self) -> Result<u8> {
        BitRead::align(self);
        self.backend.read_byte()
    }

    #[inline]
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        BitRead::align(self);
        self.backend.read_exact(buf)
    }

    #[inline(always)]
    fn bytes_read(&self) -> u64 {
        self.backend.bytes_read()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::impls::MemByteReader;

    #[test]
    fn test_spanning_fields() -> Result<()> {
        let mut reader = BitReader::new(MemByteReader::new([0b1010_1100_u8, 0b0111_0000, 0xff]));
        assert_eq!(reader.read_bits(3)?, 0b101);
        // Spans the first two bytes
        assert_eq!(reader.read_bits(8)?, 0b0_1100_011);
        assert_eq!(reader.read_bits(0)?, 0);
        assert!(!reader.is_aligned());
        BitRead::align(&mut reader);
        BitRead::align(&mut reader);
        assert_eq!(reader.read_bits(8)?, 0xff);
        assert!(matches!(reader.read_bits(1), Err(Error::EndOfStream)));
        assert_eq!(reader.bytes_read(), 3);
        Ok(())
    }

    #[test]
    fn test_byte_read_aligns() -> Result<()> {
        let mut reader = BitReader::new(MemByteReader::new([0x80_u8, 0x12, 0x34]));
        assert_eq!(reader.read_bits(1)?, 1);
        assert_eq!(reader.read_u16()?, 0x3412);
        assert!(reader.is_aligned());
        Ok(())
    }

    #[test]
    fn test_wide_reads() -> Result<()> {
        let data = [0x01_u8, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xf0];
        let mut reader = BitReader::new(MemByteReader::new(data));
        assert_eq!(reader.read_bits(4)?, 0);
        assert_eq!(reader.read_bits(64)?, 0x1234_5678_9abc_def_f);
        assert!(matches!(
            reader.read_bits(65),
            Err(Error::InvalidFieldRange { width: 65, .. })
        ));
        Ok(())
    }
}
