/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Half-precision floating-point numbers.
//!
//! A half-precision number has one sign bit, five exponent bits (bias 15) and
//! ten mantissa bits, and is stored in two little-endian bytes. Values are
//! converted to and from `f32`:
//!
//! - decoding is exact, including subnormals; NaNs decode to a quiet NaN with
//!   the same sign;
//! - encoding rounds half up on the first dropped mantissa bit, carrying into
//!   the exponent; magnitudes too large for a half become infinities, and
//!   magnitudes below 2⁻²⁵ become zeros of the same sign. Since the smallest
//!   normal `f32` is far below that threshold, `f32` subnormals encode as
//!   zeros, too. NaNs encode as `0xFE00`.

use crate::error::Result;
use crate::traits::*;

const F16_EXP_MASK: u16 = 0x7c00;
const F16_MANT_MASK: u16 = 0x03ff;
/// The half-precision pattern written for NaNs.
pub const F16_NAN: u16 = 0xfe00;

/// Convert a half-precision bit pattern to an `f32`.
#[must_use]
pub fn f16_bits_to_f32(half: u16) -> f32 {
    let sign = ((half & 0x8000) as u32) << 16;
    let exp = ((half & F16_EXP_MASK) >> 10) as i32;
    let mut mant = (half & F16_MANT_MASK) as u32;

    let bits = match exp {
        0 if mant == 0 => sign,
        0 => {
            // Subnormal: normalize so that the implicit bit is explicit
            let mut exp = -14;
            while mant & 0x400 == 0 {
                mant <<= 1;
                exp -= 1;
            }
            sign | (((exp + 127) as u32) << 23) | ((mant & 0x3ff) << 13)
        }
        0x1f if mant == 0 => sign | 0x7f80_0000,
        0x1f => sign | 0x7fc0_0000 | (mant << 13),
        _ => sign | (((exp - 15 + 127) as u32) << 23) | (mant << 13),
    };
    f32::from_bits(bits)
}

/// Convert an `f32` to a half-precision bit pattern.
#[must_use]
pub fn f32_to_f16_bits(value: f32) -> u16 {
    let bits = value.to_bits();
    let sign = ((bits >> 16) & 0x8000) as u16;
    let exp = ((bits >> 23) & 0xff) as i32;
    let mant = bits & 0x007f_ffff;

    if exp == 0xff {
        return if mant == 0 { sign | F16_EXP_MASK } else { F16_NAN };
    }
    if exp == 0 {
        return sign;
    }

    let exp = exp - 127 + 15;
    if exp >= 0x1f {
        return sign | F16_EXP_MASK;
    }
    if exp <= 0 {
        if exp < -10 {
            return sign;
        }
        let mant = mant | 0x0080_0000;
        let shift = (14 - exp) as u32;
        let mut half = mant >> shift;
        if mant & (1 << (shift - 1)) != 0 {
            half += 1;
        }
        return sign | half as u16;
    }

    let mut half = ((exp as u32) << 10) | (mant >> 13);
    // Round half up; a carry may move into the exponent, up to infinity
    if mant & 0x1000 != 0 {
        half += 1;
    }
    sign | half as u16
}

/// Trait for reading half-precision numbers.
pub trait Float16Read: ByteRead {
    #[inline]
    fn read_float16(&mut self) -> Result<f32> {
        Ok(f16_bits_to_f32(self.read_u16()?))
    }
}

/// Trait for writing half-precision numbers.
pub trait Float16Write: ByteWrite {
    /// Write `value` as a half-precision number and return the number of
    /// bytes written.
    #[inline]
    fn write_float16(&mut self, value: f32) -> Result<usize> {
        self.write_u16(f32_to_f16_bits(value))
    }
}

impl<B: ByteRead + ?Sized> Float16Read for B {}
impl<B: ByteWrite + ?Sized> Float16Write for B {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_special_values() {
        assert_eq!(f32_to_f16_bits(0.0), 0x0000);
        assert_eq!(f32_to_f16_bits(-0.0), 0x8000);
        assert_eq!(f32_to_f16_bits(1.0), 0x3c00);
        assert_eq!(f32_to_f16_bits(1.0009765625), 0x3c01);
        assert_eq!(f32_to_f16_bits(65504.0), 0x7bff);
        assert_eq!(f32_to_f16_bits(f32::INFINITY), 0x7c00);
        assert_eq!(f32_to_f16_bits(f32::NEG_INFINITY), 0xfc00);
        assert_eq!(f32_to_f16_bits(f32::NAN), F16_NAN);
        assert_eq!(f32_to_f16_bits(f32::MIN_POSITIVE / 2.0), 0);

        assert_eq!(f16_bits_to_f32(0x3c00), 1.0);
        assert_eq!(f16_bits_to_f32(0x7bff), 65504.0);
        assert_eq!(f16_bits_to_f32(0xfc00), f32::NEG_INFINITY);
        assert!(f16_bits_to_f32(F16_NAN).is_nan());
        assert!(f16_bits_to_f32(0x8000).is_sign_negative());
    }

    #[test]
    fn test_rounding() {
        // Round half up
        assert_eq!(f32_to_f16_bits(1.0 + 2.0_f32.powi(-11)), 0x3c01);
        assert_eq!(f32_to_f16_bits(1.0 + 2.0_f32.powi(-12)), 0x3c00);
        // Carry into the exponent
        assert_eq!(f32_to_f16_bits(2.0 - 2.0_f32.powi(-12)), 0x4000);
        // Overflow to infinity
        assert_eq!(f32_to_f16_bits(65520.0), 0x7c00);
        assert_eq!(f32_to_f16_bits(1E10), 0x7c00);
    }

    #[test]
    fn test_subnormals() {
        let min = 2.0_f32.powi(-24);
        assert_eq!(f16_bits_to_f32(0x0001), min);
        assert_eq!(f16_bits_to_f32(0x03ff), 1023.0 * min);
        assert_eq!(f16_bits_to_f32(0x8200), -512.0 * min);
        assert_eq!(f32_to_f16_bits(min), 0x0001);
        assert_eq!(f32_to_f16_bits(-3.0 * min), 0x8003);
        assert_eq!(f32_to_f16_bits(1023.0 * min), 0x03ff);
        // Rounds up to the smallest subnormal
        assert_eq!(f32_to_f16_bits(min / 2.0), 0x0001);
        assert_eq!(f32_to_f16_bits(min / 4.0), 0x0000);
        // The largest subnormal rounds up to the smallest normal
        assert_eq!(f32_to_f16_bits(1023.5 * min), 0x0400);

        for half in 0..0x7c00_u16 {
            assert_eq!(f32_to_f16_bits(f16_bits_to_f32(half)), half);
            assert_eq!(f32_to_f16_bits(f16_bits_to_f32(half | 0x8000)), half | 0x8000);
        }
    }
}
