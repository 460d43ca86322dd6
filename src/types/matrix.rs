/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{BitFixed, Twips};
use crate::codes::{BitFieldRead, BitFieldWrite};
use crate::error::{Error, Result, ResultExt};
use crate::impls::{BitReader, BitWriter};
use crate::traits::*;
use crate::utils::{bits_to_bytes, max_of};
use core::fmt::{self, Display};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// Bits of a width field.
const NBITS_BITS: usize = 5;
/// The largest width that a width field can express.
const MAX_WIDTH: usize = (1 << NBITS_BITS) - 1;

/// Field names of a group, for error reporting.
struct Group {
    flag: &'static str,
    width: &'static str,
    fields: [&'static str; 2],
}

const SCALE: Group = Group {
    flag: "Matrix.HasScale",
    width: "Matrix.NScaleBits",
    fields: ["Matrix.ScaleX", "Matrix.ScaleY"],
};

const ROTATE: Group = Group {
    flag: "Matrix.HasRotate",
    width: "Matrix.NRotateBits",
    fields: ["Matrix.RotateSkew0", "Matrix.RotateSkew1"],
};

const TRANSLATE: Group = Group {
    flag: "Matrix.HasTranslate",
    width: "Matrix.NTranslateBits",
    fields: ["Matrix.TranslateX", "Matrix.TranslateY"],
};

/// A 2×3 affine transformation matrix.
///
/// A point (x, y) is mapped to
/// (x · `scale_x` + y · `rotate_skew1` + `translate_x`,
///  x · `rotate_skew0` + y · `scale_y` + `translate_y`).
///
/// On the wire, the matrix starts at a byte boundary and consists of three
/// groups (scale, rotate/skew, and translate), each prefixed by a presence
/// bit. A present group has a 5-bit width `N` followed by two fields of `N`
/// bits (`FB` fields for scale and rotate/skew, `SB` fields for translate);
/// an absent group takes its default value (1 for scale, 0 otherwise). The
/// matrix is padded with zeros to a byte boundary.
///
/// The encoder omits groups equal to their default and uses the smallest
/// width for the other ones, so the identity matrix takes a single byte.
/// Scale and rotate/skew values are truncated to multiples of 2⁻¹⁶.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct Matrix {
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotate_skew0: f64,
    pub rotate_skew1: f64,
    pub translate_x: Twips,
    pub translate_y: Twips,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        scale_x: 1.0,
        scale_y: 1.0,
        rotate_skew0: 0.0,
        rotate_skew1: 0.0,
        translate_x: Twips(0),
        translate_y: Twips(0),
    };

    pub const fn new(
        scale_x: f64,
        scale_y: f64,
        rotate_skew0: f64,
        rotate_skew1: f64,
        translate_x: Twips,
        translate_y: Twips,
    ) -> Self {
        Self {
            scale_x,
            scale_y,
            rotate_skew0,
            rotate_skew1,
            translate_x,
            translate_y,
        }
    }

    /// Return a translation.
    pub const fn translate(x: Twips, y: Twips) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            ..Self::IDENTITY
        }
    }

    fn scale(&self) -> Option<[BitFixed; 2]> {
        (self.scale_x != 1.0 || self.scale_y != 1.0)
            .then_some([BitFixed(self.scale_x), BitFixed(self.scale_y)])
    }

    fn rotate(&self) -> Option<[BitFixed; 2]> {
        (self.rotate_skew0 != 0.0 || self.rotate_skew1 != 0.0)
            .then_some([BitFixed(self.rotate_skew0), BitFixed(self.rotate_skew1)])
    }

    fn translation(&self) -> Option<[Twips; 2]> {
        (self.translate_x != Twips(0) || self.translate_y != Twips(0))
            .then_some([self.translate_x, self.translate_y])
    }

    /// Return the widths of the scale, rotate/skew and translate groups, or
    /// `None` for the groups that will be omitted.
    pub fn field_widths(&self) -> [Option<usize>; 3] {
        [
            self.scale().map(|g| group_width(&g)),
            self.rotate().map(|g| group_width(&g)),
            self.translation().map(|g| group_width(&g)),
        ]
    }
}

fn group_width<T: BitEncode>(fields: &[T; 2]) -> usize {
    max_of(fields.each_ref().map(|f| f.bit_size())).unwrap_or(1)
}

fn read_group<R: BitRead + ?Sized, T: BitDecode>(
    reader: &mut R,
    group: &Group,
) -> Result<Option<[T; 2]>> {
    if reader.read_bits(1).field(group.flag)? == 0 {
        return Ok(None);
    }
    let width = reader.read_ub(NBITS_BITS).field(group.width)? as usize;
    let first = T::decode_bits(reader, width).field(group.fields[0])?;
    let second = T::decode_bits(reader, width).field(group.fields[1])?;
    Ok(Some([first, second]))
}

fn write_group<W: BitWrite + ?Sized, T: BitEncode>(
    writer: &mut W,
    fields: Option<[T; 2]>,
    group: &Group,
) -> Result<()> {
    let Some(fields) = fields else {
        writer.write_bits(0, 1).field(group.flag)?;
        return Ok(());
    };
    writer.write_bits(1, 1).field(group.flag)?;
    let width = group_width(&fields);
    writer.write_ub(width as u32, NBITS_BITS).field(group.width)?;
    for (field, name) in fields.iter().zip(group.fields) {
        field.encode_bits(writer, width).field(name)?;
    }
    Ok(())
}

impl Decode for Matrix {
    fn decode<R: ByteRead + ?Sized>(reader: &mut R) -> Result<(Self, usize)> {
        decode_counted(reader, |r| {
            let mut bits = BitReader::new(r);
            let mut m = Matrix::IDENTITY;
            if let Some([BitFixed(x), BitFixed(y)]) = read_group(&mut bits, &SCALE)? {
                (m.scale_x, m.scale_y) = (x, y);
            }
            if let Some([BitFixed(r0), BitFixed(r1)]) = read_group(&mut bits, &ROTATE)? {
                (m.rotate_skew0, m.rotate_skew1) = (r0, r1);
            }
            if let Some([x, y]) = read_group(&mut bits, &TRANSLATE)? {
                (m.translate_x, m.translate_y) = (x, y);
            }
            Ok(m)
        })
    }
}

impl Encode for Matrix {
    fn encode<W: ByteWrite + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        for (width, group) in self.field_widths().into_iter().zip([&SCALE, &ROTATE, &TRANSLATE]) {
            if let Some(width) = width.filter(|&w| w > MAX_WIDTH) {
                return Err(Error::InvalidFieldRange {
                    kind: group.width,
                    width,
                    max: MAX_WIDTH,
                });
            }
        }
        let start = writer.bytes_written();
        let mut bits = BitWriter::new(&mut *writer);
        write_group(&mut bits, self.scale(), &SCALE)?;
        write_group(&mut bits, self.rotate(), &ROTATE)?;
        write_group(&mut bits, self.translation(), &TRANSLATE)?;
        bits.into_inner()?;
        Ok((writer.bytes_written() - start) as usize)
    }

    fn byte_size(&self) -> usize {
        let bits: usize = self
            .field_widths()
            .iter()
            .map(|w| 1 + w.map_or(0, |w| NBITS_BITS + 2 * w))
            .sum();
        bits_to_bytes(bits)
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MATRIX: [ [ {:.6}, {:.6} ], [ {:.6}, {:.6} ], [ {}, {} ] ]",
            self.scale_x,
            self.rotate_skew0,
            self.rotate_skew1,
            self.scale_y,
            self.translate_x,
            self.translate_y
        )
    }
}
