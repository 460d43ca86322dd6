/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::codes::{
    fixed::{f32_to_fixed8, f64_to_fixed, fixed8_to_f32, fixed_to_f64},
    len_encoded_u32, EncodedU32Read, EncodedU32Write, Float16Read, Float16Write,
};
use crate::error::Result;
use crate::traits::*;
use core::fmt::{self, Display};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// A half-precision number, held as an `f32`.
///
/// See [`crate::codes::float16`] for the conversion rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct Float16(pub f32);

/// A 16.16 fixed-point number stored as an unsigned 32-bit integer, held as
/// an `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct Fixed(pub f64);

/// An 8.8 fixed-point number stored as an unsigned 16-bit integer, held as
/// an `f32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct Fixed8(pub f32);

/// A `u32` stored using one to five bytes.
///
/// See [`crate::codes::encoded_u32`] for the format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct EncodedU32(pub u32);

impl Decode for Float16 {
    fn decode<R: ByteRead + ?Sized>(reader: &mut R) -> Result<(Self, usize)> {
        Ok((Float16(reader.read_float16()?), 2))
    }
}

impl Encode for Float16 {
    fn encode<W: ByteWrite + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        writer.write_float16(self.0)
    }

    #[inline(always)]
    fn byte_size(&self) -> usize {
        2
    }
}

impl Decode for Fixed {
    fn decode<R: ByteRead + ?Sized>(reader: &mut R) -> Result<(Self, usize)> {
        Ok((Fixed(fixed_to_f64(reader.read_u32()?)), 4))
    }
}

impl Encode for Fixed {
    fn encode<W: ByteWrite + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        writer.write_u32(f64_to_fixed(self.0))
    }

    #[inline(always)]
    fn byte_size(&self) -> usize {
        4
    }
}

impl Decode for Fixed8 {
    fn decode<R: ByteRead + ?Sized>(reader: &mut R) -> Result<(Self, usize)> {
        Ok((Fixed8(fixed8_to_f32(reader.read_u16()?)), 2))
    }
}

impl Encode for Fixed8 {
    fn encode<W: ByteWrite + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        writer.write_u16(f32_to_fixed8(self.0))
    }

    #[inline(always)]
    fn byte_size(&self) -> usize {
        2
    }
}

impl Decode for EncodedU32 {
    fn decode<R: ByteRead + ?Sized>(reader: &mut R) -> Result<(Self, usize)> {
        decode_counted(reader, |r| r.read_encoded_u32().map(EncodedU32))
    }
}

impl Encode for EncodedU32 {
    fn encode<W: ByteWrite + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        writer.write_encoded_u32(self.0)
    }

    #[inline]
    fn byte_size(&self) -> usize {
        len_encoded_u32(self.0)
    }
}

impl Display for Float16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

impl Display for Fixed8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

impl Display for EncodedU32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EncodedU32 {
    fn from(value: u32) -> Self {
        EncodedU32(value)
    }
}

impl From<EncodedU32> for u32 {
    fn from(value: EncodedU32) -> Self {
        value.0
    }
}
