/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::codes::{len_fb, len_sb, len_ub, BitFieldRead, BitFieldWrite};
use crate::error::Result;
use crate::traits::*;
use core::fmt::{self, Display};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An unsigned integer packed in a `UB` bit field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct BitUint(pub u32);

/// A signed integer packed in an `SB` bit field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct BitInt(pub i32);

/// A 16.16 fixed-point number packed in an `FB` bit field.
///
/// Values are truncated toward zero to a multiple of 2⁻¹⁶ on writing.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct BitFixed(pub f64);

impl BitDecode for BitUint {
    #[inline]
    fn decode_bits<R: BitRead + ?Sized>(reader: &mut R, width: usize) -> Result<Self> {
        reader.read_ub(width).map(BitUint)
    }
}

impl BitEncode for BitUint {
    #[inline]
    fn encode_bits<W: BitWrite + ?Sized>(&self, writer: &mut W, width: usize) -> Result<usize> {
        writer.write_ub(self.0, width)
    }

    #[inline(always)]
    fn bit_size(&self) -> usize {
        len_ub(self.0)
    }
}

impl BitDecode for BitInt {
    #[inline]
    fn decode_bits<R: BitRead + ?Sized>(reader: &mut R, width: usize) -> Result<Self> {
        reader.read_sb(width).map(BitInt)
    }
}

impl BitEncode for BitInt {
    #[inline]
    fn encode_bits<W: BitWrite + ?Sized>(&self, writer: &mut W, width: usize) -> Result<usize> {
        writer.write_sb(self.0, width)
    }

    #[inline(always)]
    fn bit_size(&self) -> usize {
        len_sb(self.0)
    }
}

impl BitDecode for BitFixed {
    #[inline]
    fn decode_bits<R: BitRead + ?Sized>(reader: &mut R, width: usize) -> Result<Self> {
        reader.read_fb(width).map(BitFixed)
    }
}

impl BitEncode for BitFixed {
    #[inline]
    fn encode_bits<W: BitWrite + ?Sized>(&self, writer: &mut W, width: usize) -> Result<usize> {
        writer.write_fb(self.0, width)
    }

    #[inline(always)]
    fn bit_size(&self) -> usize {
        len_fb(self.0)
    }
}

impl Display for BitUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for BitInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for BitFixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}
