/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Byte-aligned fixed-point numbers.
//!
//! - `FIXED` is a 16.16 number stored as a little-endian `u32`;
//! - `FIXED8` is an 8.8 number stored as a little-endian `u16`.
//!
//! The stored integers are unsigned. On writing, values are multiplied by the
//! scale and truncated toward zero; values outside the range of the stored
//! integer saturate (negative values and NaNs become zero).

use crate::error::Result;
use crate::traits::*;

/// Scale of 16.16 fixed-point numbers.
pub const FIXED_SCALE: f64 = 65536.0;
/// Scale of 8.8 fixed-point numbers.
pub const FIXED8_SCALE: f32 = 256.0;

#[must_use]
#[inline(always)]
pub fn fixed_to_f64(raw: u32) -> f64 {
    raw as f64 / FIXED_SCALE
}

#[must_use]
#[inline(always)]
pub fn f64_to_fixed(value: f64) -> u32 {
    (value * FIXED_SCALE) as u32
}

#[must_use]
#[inline(always)]
pub fn fixed8_to_f32(raw: u16) -> f32 {
    raw as f32 / FIXED8_SCALE
}

#[must_use]
#[inline(always)]
pub fn f32_to_fixed8(value: f32) -> u16 {
    (value * FIXED8_SCALE) as u16
}

/// Trait for reading fixed-point numbers.
pub trait FixedRead: ByteRead {
    #[inline]
    fn read_fixed(&mut self) -> Result<f64> {
        Ok(fixed_to_f64(self.read_u32()?))
    }

    #[inline]
    fn read_fixed8(&mut self) -> Result<f32> {
        Ok(fixed8_to_f32(self.read_u16()?))
    }
}

/// Trait for writing fixed-point numbers.
///
/// Methods return the number of bytes written.
pub trait FixedWrite: ByteWrite {
    #[inline]
    fn write_fixed(&mut self, value: f64) -> Result<usize> {
        self.write_u32(f64_to_fixed(value))
    }

    #[inline]
    fn write_fixed8(&mut self, value: f32) -> Result<usize> {
        self.write_u16(f32_to_fixed8(value))
    }
}

impl<B: ByteRead + ?Sized> FixedRead for B {}
impl<B: ByteWrite + ?Sized> FixedWrite for B {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(fixed_to_f64(1), 1.0 / 65536.0);
        assert_eq!(fixed_to_f64(u32::MAX), 65535.99998474121);
        assert_eq!(f64_to_fixed(1.5), 0x0001_8000);
        assert_eq!(f64_to_fixed(-1.0), 0);
        assert_eq!(f64_to_fixed(1E10), u32::MAX);

        assert_eq!(fixed8_to_f32(1), 0.00390625);
        assert_eq!(fixed8_to_f32(u16::MAX), 255.99609375);
        assert_eq!(f32_to_fixed8(7.75), 0x07c0);
        assert_eq!(f32_to_fixed8(f32::NAN), 0);
    }
}
