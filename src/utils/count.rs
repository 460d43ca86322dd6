/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::Result;
use crate::traits::*;

/// Wrapping struct that keep tracks of written bits. Optionally,
/// prints to standard error information about methods called.
///
/// Padding bits written by [`BitWrite::align`] are counted, too.
#[derive(Debug, Clone)]
pub struct CountBitWriter<BW: BitWrite, const PRINT: bool = false> {
    bit_write: BW,
    /// The number of bits written so far on the underlying [`BitWrite`].
    pub bits_written: usize,
}

impl<BW: BitWrite, const PRINT: bool> CountBitWriter<BW, PRINT> {
    pub fn new(bit_write: BW) -> Self {
        Self {
            bit_write,
            bits_written: 0,
        }
    }

    pub fn into_inner(self) -> BW {
        self.bit_write
    }
}

impl<BW: BitWrite, const PRINT: bool> BitWrite for CountBitWriter<BW, PRINT> {
    fn write_bits(&mut self, value: u64, n_bits: usize) -> Result<usize> {
        self.bit_write.write_bits(value, n_bits).map(|x| {
            self.bits_written += x;
            if PRINT {
                eprintln!(
                    "write_bits({:#016x}, {}) = {} (total = {})",
                    value, n_bits, x, self.bits_written
                );
            }
            x
        })
    }

    fn align(&mut self) -> Result<usize> {
        self.bit_write.align().map(|x| {
            self.bits_written += x;
            if PRINT {
                eprintln!("align() = {} (total = {})", x, self.bits_written);
            }
            x
        })
    }
}

/// Wrapping struct that keep tracks of read bits. Optionally,
/// prints to standard error information about methods called.
///
/// Bits discarded by [`BitRead::align`] are not counted, as the wrapper
/// cannot know how many there were.
#[derive(Debug, Clone)]
pub struct CountBitReader<BR: BitRead, const PRINT: bool = false> {
    bit_read: BR,
    /// The number of bits read so far from the underlying [`BitRead`].
    pub bits_read: usize,
}

impl<BR: BitRead, const PRINT: bool> CountBitReader<BR, PRINT> {
    pub fn new(bit_read: BR) -> Self {
        Self {
            bit_read,
            bits_read: 0,
        }
    }

    pub fn into_inner(self) -> BR {
        self.bit_read
    }
}

impl<BR: BitRead, const PRINT: bool> BitRead for CountBitReader<BR, PRINT> {
    fn read_bits(&mut self, n_bits: usize) -> Result<u64> {
        self.bit_read.read_bits(n_bits).map(|x| {
            self.bits_read += n_bits;
            if PRINT {
                eprintln!(
                    "read_bits({}) = {:#016x} (total = {})",
                    n_bits, x, self.bits_read
                );
            }
            x
        })
    }

    fn align(&mut self) {
        if PRINT {
            eprintln!("align() (total = {})", self.bits_read);
        }
        self.bit_read.align()
    }
}

#[cfg(test)]
#[test]
fn test_count() -> Result<()> {
    use crate::prelude::*;
    let mut buffer: Vec<u8> = vec![];
    let bit_write = BitWriter::new(MemByteWriterVec::new(&mut buffer));
    let mut count_bit_write = CountBitWriter::<_, true>::new(bit_write);

    count_bit_write.write_ub(5, 5)?;
    assert_eq!(count_bit_write.bits_written, 5);
    count_bit_write.write_sb(-100, 20)?;
    assert_eq!(count_bit_write.bits_written, 25);
    count_bit_write.write_fb(1.5, 32)?;
    assert_eq!(count_bit_write.bits_written, 57);
    assert_eq!(BitWrite::align(&mut count_bit_write)?, 7);
    assert_eq!(count_bit_write.bits_written, 64);
    count_bit_write.into_inner().into_inner()?;

    let bit_read = BitReader::new(MemByteReader::new(&buffer));
    let mut count_bit_read = CountBitReader::<_, true>::new(bit_read);

    assert_eq!(count_bit_read.read_ub(5)?, 5);
    assert_eq!(count_bit_read.bits_read, 5);
    assert_eq!(count_bit_read.read_sb(20)?, -100);
    assert_eq!(count_bit_read.bits_read, 25);
    assert_eq!(count_bit_read.read_fb(32)?, 1.5);
    assert_eq!(count_bit_read.bits_read, 57);

    Ok(())
}
