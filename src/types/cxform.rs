/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::codes::{len_sb, BitFieldRead, BitFieldWrite};
use crate::error::{Error, Result, ResultExt};
use crate::impls::{BitReader, BitWriter};
use crate::traits::*;
use crate::utils::bits_to_bytes;
use core::fmt::{self, Display};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// Bits of the width field.
const NBITS_BITS: usize = 4;
/// The largest width that the width field can express.
const MAX_WIDTH: usize = (1 << NBITS_BITS) - 1;
/// Bits of the two presence flags and of the width field.
const HEADER_BITS: usize = 2 + NBITS_BITS;

/// The multiply term leaving a channel unchanged.
pub const DEFAULT_MULT: i16 = 256;
/// The add term leaving a channel unchanged.
pub const DEFAULT_ADD: i16 = 0;

/// Field names of a color transform with `N` channels, for error reporting.
struct Fields<const N: usize> {
    has_add: &'static str,
    has_mult: &'static str,
    nbits: &'static str,
    mult: [&'static str; N],
    add: [&'static str; N],
}

const CXFORM: Fields<3> = Fields {
    has_add: "CXForm.HasAddTerms",
    has_mult: "CXForm.HasMultTerms",
    nbits: "CXForm.Nbits",
    mult: [
        "CXForm.RedMultTerm",
        "CXForm.GreenMultTerm",
        "CXForm.BlueMultTerm",
    ],
    add: [
        "CXForm.RedAddTerm",
        "CXForm.GreenAddTerm",
        "CXForm.BlueAddTerm",
    ],
};

const CXFORM_WITH_ALPHA: Fields<4> = Fields {
    has_add: "CXFormWithAlpha.HasAddTerms",
    has_mult: "CXFormWithAlpha.HasMultTerms",
    nbits: "CXFormWithAlpha.Nbits",
    mult: [
        "CXFormWithAlpha.RedMultTerm",
        "CXFormWithAlpha.GreenMultTerm",
        "CXFormWithAlpha.BlueMultTerm",
        "CXFormWithAlpha.AlphaMultTerm",
    ],
    add: [
        "CXFormWithAlpha.RedAddTerm",
        "CXFormWithAlpha.GreenAddTerm",
        "CXFormWithAlpha.BlueAddTerm",
        "CXFormWithAlpha.AlphaAddTerm",
    ],
};

/// A color transform without alpha.
///
/// Each channel is transformed as `channel · mult / 256 + add`.
///
/// On the wire, a color transform starts at a byte boundary with a has-add
/// bit, a has-mult bit and a 4-bit width `N`; then come the multiply terms,
/// if present, and the add terms, if present, as `SB[N]` fields in channel
/// order. Absent multiply terms are 256, absent add terms are 0. The
/// transform is padded with zeros to a byte boundary.
///
/// The encoder omits term groups equal to their default and uses the smallest
/// width for the terms of the groups it writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct CxForm {
    pub red_mult: i16,
    pub green_mult: i16,
    pub blue_mult: i16,
    pub red_add: i16,
    pub green_add: i16,
    pub blue_add: i16,
}

/// A color transform with alpha.
///
/// The layout is that of [`CxForm`] with a fourth, alpha, term in each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct CxFormWithAlpha {
    pub cxform: CxForm,
    pub alpha_mult: i16,
    pub alpha_add: i16,
}

impl Default for CxForm {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Default for CxFormWithAlpha {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CxForm {
    pub const IDENTITY: CxForm = CxForm::new(
        DEFAULT_MULT,
        DEFAULT_MULT,
        DEFAULT_MULT,
        DEFAULT_ADD,
        DEFAULT_ADD,
        DEFAULT_ADD,
    );

    pub const fn new(
        red_mult: i16,
        green_mult: i16,
        blue_mult: i16,
        red_add: i16,
        green_add: i16,
        blue_add: i16,
    ) -> Self {
        Self {
            red_mult,
            green_mult,
            blue_mult,
            red_add,
            green_add,
            blue_add,
        }
    }

    fn terms(&self) -> Terms<3> {
        Terms {
            mult: [self.red_mult, self.green_mult, self.blue_mult],
            add: [self.red_add, self.green_add, self.blue_add],
        }
    }

    fn from_terms(terms: Terms<3>) -> Self {
        let ([red_mult, green_mult, blue_mult], [red_add, green_add, blue_add]) =
            (terms.mult, terms.add);
        Self::new(red_mult, green_mult, blue_mult, red_add, green_add, blue_add)
    }

    /// Return the width of the term fields of the encoded transform.
    pub fn field_width(&self) -> usize {
        self.terms().width()
    }
}

impl CxFormWithAlpha {
    pub const IDENTITY: CxFormWithAlpha = CxFormWithAlpha {
        cxform: CxForm::IDENTITY,
        alpha_mult: DEFAULT_MULT,
        alpha_add: DEFAULT_ADD,
    };

    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        red_mult: i16,
        green_mult: i16,
        blue_mult: i16,
        alpha_mult: i16,
        red_add: i16,
        green_add: i16,
        blue_add: i16,
        alpha_add: i16,
    ) -> Self {
        Self {
            cxform: CxForm::new(red_mult, green_mult, blue_mult, red_add, green_add, blue_add),
            alpha_mult,
            alpha_add,
        }
    }

    fn terms(&self) -> Terms<4> {
        let c = &self.cxform;
        Terms {
            mult: [c.red_mult, c.green_mult, c.blue_mult, self.alpha_mult],
            add: [c.red_add, c.green_add, c.blue_add, self.alpha_add],
        }
    }

    fn from_terms(terms: Terms<4>) -> Self {
        let (
            [red_mult, green_mult, blue_mult, alpha_mult],
            [red_add, green_add, blue_add, alpha_add],
        ) = (terms.mult, terms.add);
        Self::new(
            red_mult, green_mult, blue_mult, alpha_mult, red_add, green_add, blue_add, alpha_add,
        )
    }

    /// Return the width of the term fields of the encoded transform.
    pub fn field_width(&self) -> usize {
        self.terms().width()
    }
}

/// The terms of a color transform with `N` channels, in wire order.
struct Terms<const N: usize> {
    mult: [i16; N],
    add: [i16; N],
}

impl<const N: usize> Terms<N> {
    fn has_mult(&self) -> bool {
        self.mult.iter().any(|&m| m != DEFAULT_MULT)
    }

    fn has_add(&self) -> bool {
        self.add.iter().any(|&a| a != DEFAULT_ADD)
    }

    /// The largest width among the terms of the groups to be written, or
    /// zero if no group is written.
    fn width(&self) -> usize {
        let mult: &[i16] = if self.has_mult() { &self.mult } else { &[] };
        let add: &[i16] = if self.has_add() { &self.add } else { &[] };
        mult.iter()
            .chain(add)
            .map(|&t| len_sb(t as i32))
            .max()
            .unwrap_or(0)
    }

    fn byte_size(&self) -> usize {
        let groups = self.has_mult() as usize + self.has_add() as usize;
        bits_to_bytes(HEADER_BITS + groups * N * self.width())
    }

    fn read<R: BitRead + ?Sized>(reader: &mut R, fields: &Fields<N>) -> Result<Self> {
        let has_add = reader.read_bits(1).field(fields.has_add)? != 0;
        let has_mult = reader.read_bits(1).field(fields.has_mult)? != 0;
        let width = reader.read_ub(NBITS_BITS).field(fields.nbits)? as usize;
        let mut terms = Terms {
            mult: [DEFAULT_MULT; N],
            add: [DEFAULT_ADD; N],
        };
        if has_mult {
            for (term, name) in terms.mult.iter_mut().zip(fields.mult) {
                *term = reader.read_sb(width).field(name)? as i16;
            }
        }
        if has_add {
            for (term, name) in terms.add.iter_mut().zip(fields.add) {
                *term = reader.read_sb(width).field(name)? as i16;
            }
        }
        Ok(terms)
    }

    fn write<W: ByteWrite + ?Sized>(&self, writer: &mut W, fields: &Fields<N>) -> Result<usize> {
        let width = self.width();
        if width > MAX_WIDTH {
            return Err(Error::InvalidFieldRange {
                kind: fields.nbits,
                width,
                max: MAX_WIDTH,
            });
        }
        let (has_mult, has_add) = (self.has_mult(), self.has_add());
        let start = writer.bytes_written();
        let mut bits = BitWriter::new(&mut *writer);
        bits.write_bits(has_add as u64, 1).field(fields.has_add)?;
        bits.write_bits(has_mult as u64, 1).field(fields.has_mult)?;
        bits.write_ub(width as u32, NBITS_BITS).field(fields.nbits)?;
        if has_mult {
            for (&term, name) in self.mult.iter().zip(fields.mult) {
                bits.write_sb(term as i32, width).field(name)?;
            }
        }
        if has_add {
            for (&term, name) in self.add.iter().zip(fields.add) {
                bits.write_sb(term as i32, width).field(name)?;
            }
        }
        bits.into_inner()?;
        Ok((writer.bytes_written() - start) as usize)
    }
}

impl Decode for CxForm {
    fn decode<R: ByteRead + ?Sized>(reader: &mut R) -> Result<(Self, usize)> {
        decode_counted(reader, |r| {
            Terms::read(&mut BitReader::new(r), &CXFORM).map(CxForm::from_terms)
        })
    }
}

impl Encode for CxForm {
    fn encode<W: ByteWrite + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        self.terms().write(writer, &CXFORM)
    }

    fn byte_size(&self) -> usize {
        self.terms().byte_size()
    }
}

impl Decode for CxFormWithAlpha {
    fn decode<R: ByteRead + ?Sized>(reader: &mut R) -> Result<(Self, usize)> {
        decode_counted(reader, |r| {
            Terms::read(&mut BitReader::new(r), &CXFORM_WITH_ALPHA)
                .map(CxFormWithAlpha::from_terms)
        })
    }
}

impl Encode for CxFormWithAlpha {
    fn encode<W: ByteWrite + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        self.terms().write(writer, &CXFORM_WITH_ALPHA)
    }

    fn byte_size(&self) -> usize {
        self.terms().byte_size()
    }
}

fn fmt_channel(f: &mut fmt::Formatter<'_>, channel: &str, mult: i16, add: i16) -> fmt::Result {
    f.write_str(channel)?;
    if mult != DEFAULT_MULT {
        write!(f, " * {}/256", mult)?;
    }
    if add != DEFAULT_ADD {
        write!(f, " + {}", add)?;
    }
    Ok(())
}

impl Display for CxForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_channel(f, "R", self.red_mult, self.red_add)?;
        fmt_channel(f, ", G", self.green_mult, self.green_add)?;
        fmt_channel(f, ", B", self.blue_mult, self.blue_add)
    }
}

impl Display for CxFormWithAlpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cxform)?;
        fmt_channel(f, ", A", self.alpha_mult, self.alpha_add)
    }
}
