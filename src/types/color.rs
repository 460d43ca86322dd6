/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{Result, ResultExt};
use crate::traits::*;
use core::fmt::{self, Display};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An opaque color: red, green and blue bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// A color with alpha, written after the color channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: u8,
}

/// A color with alpha, written before the color channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct Argb {
    pub alpha: u8,
    pub rgb: Rgb,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl Rgba {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            rgb: Rgb::new(red, green, blue),
            alpha,
        }
    }
}

impl Argb {
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha,
            rgb: Rgb::new(red, green, blue),
        }
    }
}

impl Decode for Rgb {
    fn decode<R: ByteRead + ?Sized>(reader: &mut R) -> Result<(Self, usize)> {
        decode_counted(reader, |r| {
            Ok(Rgb {
                red: r.read_u8().field("RGB.Red")?,
                green: r.read_u8().field("RGB.Green")?,
                blue: r.read_u8().field("RGB.Blue")?,
            })
        })
    }
}

impl Encode for Rgb {
    fn encode<W: ByteWrite + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        writer.write_all(&[self.red, self.green, self.blue])?;
        Ok(3)
    }

    #[inline(always)]
    fn byte_size(&self) -> usize {
        3
    }
}

impl Decode for Rgba {
    fn decode<R: ByteRead + ?Sized>(reader: &mut R) -> Result<(Self, usize)> {
        decode_counted(reader, |r| {
            let (rgb, _) = Rgb::decode(r).field("RGBA")?;
            let alpha = r.read_u8().field("RGBA.Alpha")?;
            Ok(Rgba { rgb, alpha })
        })
    }
}

impl Encode for Rgba {
    fn encode<W: ByteWrite + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        Ok(self.rgb.encode(writer)? + writer.write_u8(self.alpha)?)
    }

    #[inline(always)]
    fn byte_size(&self) -> usize {
        4
    }
}

impl Decode for Argb {
    fn decode<R: ByteRead + ?Sized>(reader: &mut R) -> Result<(Self, usize)> {
        decode_counted(reader, |r| {
            let alpha = r.read_u8().field("ARGB.Alpha")?;
            let (rgb, _) = Rgb::decode(r).field("ARGB")?;
            Ok(Argb { alpha, rgb })
        })
    }
}

impl Encode for Argb {
    fn encode<W: ByteWrite + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        Ok(writer.write_u8(self.alpha)? + self.rgb.encode(writer)?)
    }

    #[inline(always)]
    fn byte_size(&self) -> usize {
        4
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Red: {}, Green: {}, Blue: {}",
            self.red, self.green, self.blue
        )
    }
}

impl Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Alpha: {}", self.rgb, self.alpha)
    }
}

impl Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alpha: {}, {}", self.alpha, self.rgb)
    }
}
