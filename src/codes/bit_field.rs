/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Bit-field codes.
//!
//! SWF packs integers in bit fields whose width is decided by the writer and
//! recorded elsewhere in the stream (usually in a preceding width field).
//! There are three such codes:
//!
//! - `UB[n]`: an unsigned integer written in binary using `n` bits;
//! - `SB[n]`: a signed integer written in two's complement using `n` bits;
//!   on reading, the value is sign-extended from bit `n - 1`;
//! - `FB[n]`: a signed 16.16 fixed-point number, that is, the `SB[n]` code of
//!   the value multiplied by 2¹⁶.
//!
//! Widths range from 0 to 32 bits. A zero-width field reads as zero and writes
//! nothing.
//!
//! The `len_*` functions return the minimum width needed to represent a value;
//! they never return zero.

use crate::error::{Error, Result};
use crate::traits::*;

/// The maximum width of a bit field.
pub const MAX_FIELD_BITS: usize = 32;

#[inline(always)]
fn check_width(kind: &'static str, n: usize) -> Result<()> {
    if n > MAX_FIELD_BITS {
        return Err(Error::InvalidFieldRange {
            kind,
            width: n,
            max: MAX_FIELD_BITS,
        });
    }
    Ok(())
}

/// Convert a number to its 16.16 fixed-point representation, truncating
/// toward zero and saturating at the bounds of `i32`.
#[must_use]
#[inline(always)]
pub fn fb_to_raw(value: f64) -> i32 {
    (value * 65536.0) as i32
}

/// Convert a 16.16 fixed-point representation to a number.
#[must_use]
#[inline(always)]
pub fn raw_to_fb(raw: i32) -> f64 {
    raw as f64 / 65536.0
}

/// Return the minimum width of the `UB` code for `value`.
#[must_use]
#[inline]
pub fn len_ub(value: u32) -> usize {
    (u32::BITS - value.leading_zeros()).max(1) as usize
}

/// Return the minimum width of the `SB` code for `value`, that is, the
/// smallest `n` such that `value` is the sign extension of its lowest `n`
/// bits.
#[must_use]
#[inline]
pub fn len_sb(value: i32) -> usize {
    if value >= 0 {
        (u32::BITS + 1 - value.leading_zeros()) as usize
    } else {
        (u32::BITS + 1 - value.leading_ones()) as usize
    }
}

/// Return the minimum width of the `FB` code for `value`.
#[must_use]
#[inline]
pub fn len_fb(value: f64) -> usize {
    len_sb(fb_to_raw(value))
}

/// Trait for reading bit-field codes.
pub trait BitFieldRead: BitRead {
    /// Read an unsigned integer of `n` bits.
    #[inline]
    fn read_ub(&mut self, n: usize) -> Result<u32> {
        check_width("UB", n)?;
        Ok(self.read_bits(n)? as u32)
    }

    /// Read a signed integer of `n` bits, sign-extending it.
    #[inline]
    fn read_sb(&mut self, n: usize) -> Result<i32> {
        check_width("SB", n)?;
        if n == 0 {
            return Ok(0);
        }
        let shift = MAX_FIELD_BITS - n;
        Ok(((self.read_bits(n)? as u32) << shift) as i32 >> shift)
    }

    /// Read a 16.16 fixed-point number of `n` bits.
    #[inline]
    fn read_fb(&mut self, n: usize) -> Result<f64> {
        check_width("FB", n).and_then(|_| self.read_sb(n)).map(raw_to_fb)
    }
}

/// Trait for writing bit-field codes.
///
/// All methods return the number of bits written. When the `checks` feature is
/// enabled, values that do not fit the requested width are rejected with
/// [`Error::ValueTooWide`]; otherwise, they are silently truncated.
pub trait BitFieldWrite: BitWrite {
    /// Write an unsigned integer using `n` bits.
    #[inline]
    fn write_ub(&mut self, value: u32, n: usize) -> Result<usize> {
        check_width("UB", n)?;
        #[cfg(feature = "checks")]
        if n < MAX_FIELD_BITS && value >> n != 0 {
            return Err(Error::ValueTooWide {
                value: value as i64,
                width: n,
            });
        }
        self.write_bits(value as u64 & ((1_u64 << n) - 1), n)
    }

    /// Write a signed integer in two's complement using `n` bits.
    #[inline]
    fn write_sb(&mut self, value: i32, n: usize) -> Result<usize> {
        check_width("SB", n)?;
        #[cfg(feature = "checks")]
        if (n == 0 && value != 0) || (n > 0 && len_sb(value) > n) {
            return Err(Error::ValueTooWide {
                value: value as i64,
                width: n,
            });
        }
        self.write_bits(value as u32 as u64 & ((1_u64 << n) - 1), n)
    }

    /// Write a 16.16 fixed-point number using `n` bits.
    #[inline]
    fn write_fb(&mut self, value: f64, n: usize) -> Result<usize> {
        check_width("FB", n)?;
        self.write_sb(fb_to_raw(value), n)
    }
}

impl<B: BitRead + ?Sized> BitFieldRead for B {}
impl<B: BitWrite + ?Sized> BitFieldWrite for B {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::impls::{BitReader, BitWriter, MemByteReader, MemByteWriterVec};

    #[test]
    fn test_len() {
        assert_eq!(len_ub(0), 1);
        assert_eq!(len_ub(1), 1);
        assert_eq!(len_ub(1024), 11);
        assert_eq!(len_ub(65536), 17);
        assert_eq!(len_ub(u32::MAX), 32);

        assert_eq!(len_sb(0), 1);
        assert_eq!(len_sb(-1), 1);
        assert_eq!(len_sb(1), 2);
        assert_eq!(len_sb(-2), 2);
        assert_eq!(len_sb(-14), 5);
        assert_eq!(len_sb(1024), 12);
        assert_eq!(len_sb(i32::MAX), 32);
        assert_eq!(len_sb(i32::MIN), 32);

        assert_eq!(len_fb(0.0), 1);
        assert_eq!(len_fb(1.0), 18);
        assert_eq!(len_fb(1024.0), 28);
        assert_eq!(len_fb(30000.0), 32);
    }

    #[test]
    fn test_sign_extension() -> Result<()> {
        let mut reader =
            BitReader::new(MemByteReader::new([0b1110_0111_u8, 0xff, 0xff, 0xff, 0xff]));
        assert_eq!(reader.read_sb(3)?, -1);
        assert_eq!(reader.read_sb(0)?, 0);
        assert_eq!(reader.read_sb(2)?, 0);
        assert_eq!(reader.read_sb(3)?, -1);
        assert_eq!(reader.read_sb(32)?, -1);
        assert!(matches!(
            reader.read_ub(33),
            Err(Error::InvalidFieldRange { width: 33, max: 32, .. })
        ));
        Ok(())
    }

    #[test]
    fn test_fields() -> Result<()> {
        let mut buffer: Vec<u8> = vec![];
        let mut writer = BitWriter::new(MemByteWriterVec::new(&mut buffer));
        let mut bits = 0;
        bits += writer.write_ub(5, 3)?;
        bits += writer.write_sb(-3, 3)?;
        bits += writer.write_fb(-0.5, 17)?;
        bits += writer.write_sb(0, 0)?;
        bits += writer.write_ub(u32::MAX, 32)?;
        bits += writer.write_sb(i32::MIN, 32)?;
        assert_eq!(bits, 87);
        writer.into_inner()?;

        let mut reader = BitReader::new(MemByteReader::new(&buffer));
        assert_eq!(reader.read_ub(3)?, 5);
        assert_eq!(reader.read_sb(3)?, -3);
        assert_eq!(reader.read_fb(17)?, -0.5);
        assert_eq!(reader.read_sb(0)?, 0);
        assert_eq!(reader.read_ub(32)?, u32::MAX);
        assert_eq!(reader.read_sb(32)?, i32::MIN);
        Ok(())
    }

    #[cfg(feature = "checks")]
    #[test]
    fn test_checks() {
        let mut writer = BitWriter::new(MemByteWriterVec::new(Vec::<u8>::new()));
        assert!(matches!(
            writer.write_sb(4, 3),
            Err(Error::ValueTooWide { value: 4, width: 3 })
        ));
        assert!(matches!(
            writer.write_ub(8, 3),
            Err(Error::ValueTooWide { value: 8, width: 3 })
        ));
        assert!(writer.write_sb(-4, 3).is_ok());
        assert!(writer.write_sb(0, 0).is_ok());
    }
}
