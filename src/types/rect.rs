/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Twips;
use crate::codes::{BitFieldRead, BitFieldWrite};
use crate::error::{Error, Result, ResultExt};
use crate::impls::{BitReader, BitWriter};
use crate::traits::*;
use crate::utils::{bits_to_bytes, max_of};
use core::fmt::{self, Display};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// Bits of the width field.
const NBITS_BITS: usize = 5;
/// The largest width that the width field can express.
const MAX_WIDTH: usize = (1 << NBITS_BITS) - 1;

/// A rectangle.
///
/// On the wire, a rectangle starts at a byte boundary with a 5-bit width `N`,
/// followed by the four coordinates as `SB[N]` fields in the order `x_min`,
/// `x_max`, `y_min`, `y_max`, and it is padded with zeros to a byte boundary.
/// The encoder uses the smallest `N` that can represent all coordinates.
///
/// If the stream ends while reading `y_max`, decoding succeeds and `y_max` is
/// set to zero, as some encoders truncate the last field. End of stream
/// elsewhere is an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct Rect {
    pub x_min: Twips,
    pub x_max: Twips,
    pub y_min: Twips,
    pub y_max: Twips,
}

impl Rect {
    pub const fn new(x_min: Twips, x_max: Twips, y_min: Twips, y_max: Twips) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Return the width of the coordinate fields of the encoded rectangle.
    pub fn field_width(&self) -> usize {
        max_of([self.x_min, self.x_max, self.y_min, self.y_max].map(|t| t.bit_size()))
            .unwrap_or(1)
    }
}

impl Decode for Rect {
    fn decode<R: ByteRead + ?Sized>(reader: &mut R) -> Result<(Self, usize)> {
        decode_counted(reader, |r| {
            let mut bits = BitReader::new(r);
            let width = bits.read_ub(NBITS_BITS).field("Rect.Nbits")? as usize;
            let x_min = Twips::decode_bits(&mut bits, width).field("Rect.Xmin")?;
            let x_max = Twips::decode_bits(&mut bits, width).field("Rect.Xmax")?;
            let y_min = Twips::decode_bits(&mut bits, width).field("Rect.Ymin")?;
            let y_max = match Twips::decode_bits(&mut bits, width) {
                Ok(y_max) => y_max,
                Err(Error::EndOfStream) => Twips(0),
                Err(e) => return Err(e.in_field("Rect.Ymax")),
            };
            Ok(Rect::new(x_min, x_max, y_min, y_max))
        })
    }
}

impl Encode for Rect {
    fn encode<W: ByteWrite + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        let width = self.field_width();
        if width > MAX_WIDTH {
            return Err(Error::InvalidFieldRange {
                kind: "Rect.Nbits",
                width,
                max: MAX_WIDTH,
            });
        }
        let start = writer.bytes_written();
        let mut bits = BitWriter::new(&mut *writer);
        bits.write_ub(width as u32, NBITS_BITS).field("Rect.Nbits")?;
        self.x_min.encode_bits(&mut bits, width).field("Rect.Xmin")?;
        self.x_max.encode_bits(&mut bits, width).field("Rect.Xmax")?;
        self.y_min.encode_bits(&mut bits, width).field("Rect.Ymin")?;
        self.y_max.encode_bits(&mut bits, width).field("Rect.Ymax")?;
        bits.into_inner()?;
        Ok((writer.bytes_written() - start) as usize)
    }

    fn byte_size(&self) -> usize {
        bits_to_bytes(NBITS_BITS + 4 * self.field_width())
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}), ({}, {}), ({}, {}), ({}, {})",
            self.x_min,
            self.y_min,
            self.x_max,
            self.y_min,
            self.x_max,
            self.y_max,
            self.x_min,
            self.y_max
        )
    }
}
