/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::codes::{len_sb, BitFieldRead, BitFieldWrite};
use crate::error::Result;
use crate::traits::*;
use core::fmt::{self, Display};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

macro_rules! impl_primitive {
    ($($ty:ty),*) => {$(
        impl Decode for $ty {
            #[inline]
            fn decode<R: ByteRead + ?Sized>(reader: &mut R) -> Result<(Self, usize)> {
                Ok((reader.read_le::<$ty>()?, core::mem::size_of::<$ty>()))
            }
        }

        impl Encode for $ty {
            #[inline]
            fn encode<W: ByteWrite + ?Sized>(&self, writer: &mut W) -> Result<usize> {
                writer.write_le(*self)
            }

            #[inline(always)]
            fn byte_size(&self) -> usize {
                core::mem::size_of::<$ty>()
            }
        }
    )*};
}

impl_primitive!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

/// A length in twips, that is, 1/20 of a pixel.
///
/// As a byte-level value, a [`Twips`] is a little-endian `i32`; inside
/// composites, it is an `SB` bit field.
///
/// The [`Display`] implementation writes a mixed fraction:
/// ```
/// use swf_codec::types::Twips;
///
/// assert_eq!(Twips(245).to_string(), "12 5/20");
/// assert_eq!(Twips(-245).to_string(), "-12 5/20");
/// assert_eq!(Twips(40).to_string(), "2");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct Twips(pub i32);

impl Twips {
    /// Twips per pixel.
    pub const PER_PIXEL: i32 = 20;

    /// Return the length in twips of `pixels` pixels, saturating.
    #[must_use]
    pub const fn from_pixels(pixels: i32) -> Self {
        Twips(pixels.saturating_mul(Self::PER_PIXEL))
    }

    /// Return the length in pixels.
    #[must_use]
    pub fn to_pixels(self) -> f64 {
        self.0 as f64 / Self::PER_PIXEL as f64
    }
}

impl From<i32> for Twips {
    fn from(value: i32) -> Self {
        Twips(value)
    }
}

impl From<Twips> for i32 {
    fn from(value: Twips) -> Self {
        value.0
    }
}

impl Display for Twips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        let (whole, frac) = (abs / Self::PER_PIXEL as u32, abs % Self::PER_PIXEL as u32);
        write!(f, "{}{}", sign, whole)?;
        if frac != 0 {
            write!(f, " {}/{}", frac, Self::PER_PIXEL)?;
        }
        Ok(())
    }
}

impl Decode for Twips {
    #[inline]
    fn decode<R: ByteRead + ?Sized>(reader: &mut R) -> Result<(Self, usize)> {
        i32::decode(reader).map(|(value, len)| (Twips(value), len))
    }
}

impl Encode for Twips {
    #[inline]
    fn encode<W: ByteWrite + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        self.0.encode(writer)
    }

    #[inline(always)]
    fn byte_size(&self) -> usize {
        self.0.byte_size()
    }
}

impl BitDecode for Twips {
    #[inline]
    fn decode_bits<R: BitRead + ?Sized>(reader: &mut R, width: usize) -> Result<Self> {
        reader.read_sb(width).map(Twips)
    }
}

impl BitEncode for Twips {
    #[inline]
    fn encode_bits<W: BitWrite + ?Sized>(&self, writer: &mut W, width: usize) -> Result<usize> {
        writer.write_sb(self.0, width)
    }

    #[inline(always)]
    fn bit_size(&self) -> usize {
        len_sb(self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::impls::{MemByteReader, MemByteWriterVec};

    #[test]
    fn test_primitives() -> Result<()> {
        let mut buffer: Vec<u8> = vec![];
        let mut writer = MemByteWriterVec::new(&mut buffer);
        let mut len = 0;
        len += 0xfe_u8.encode(&mut writer)?;
        len += (-2_i16).encode(&mut writer)?;
        len += 12.25_f32.encode(&mut writer)?;
        len += u64::MAX.encode(&mut writer)?;
        len += Twips(-20).encode(&mut writer)?;
        assert_eq!(len, 1 + 2 + 4 + 8 + 4);
        assert_eq!(&buffer[..7], [0xfe, 0xfe, 0xff, 0, 0, 0x44, 0x41]);

        let mut reader = MemByteReader::new(&buffer);
        assert_eq!(u8::decode(&mut reader)?, (0xfe, 1));
        assert_eq!(i16::decode(&mut reader)?, (-2, 2));
        assert_eq!(f32::decode(&mut reader)?, (12.25, 4));
        assert_eq!(u64::decode(&mut reader)?, (u64::MAX, 8));
        assert_eq!(Twips::decode(&mut reader)?, (Twips(-20), 4));
        Ok(())
    }

    #[test]
    fn test_twips_display() {
        assert_eq!(Twips(0).to_string(), "0");
        assert_eq!(Twips(19).to_string(), "0 19/20");
        assert_eq!(Twips(-1).to_string(), "-0 1/20");
        assert_eq!(Twips(i32::MIN).to_string(), "-107374182 8/20");
        assert_eq!(Twips::from_pixels(3), Twips(60));
        assert_eq!(Twips(30).to_pixels(), 1.5);
    }
}
