/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{Error, Result};
use crate::traits::*;
use core::fmt::{self, Display};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// The language of a font or of a text, stored in one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[repr(u8)]
pub enum LanguageCode {
    Latin = 1,
    Japanese = 2,
    Korean = 3,
    SimplifiedChinese = 4,
    TraditionalChinese = 5,
}

impl LanguageCode {
    /// All language codes, in wire order.
    pub const ALL: [LanguageCode; 5] = [
        LanguageCode::Latin,
        LanguageCode::Japanese,
        LanguageCode::Korean,
        LanguageCode::SimplifiedChinese,
        LanguageCode::TraditionalChinese,
    ];

    /// Return the English name of the language.
    pub const fn name(self) -> &'static str {
        match self {
            LanguageCode::Latin => "Latin",
            LanguageCode::Japanese => "Japanese",
            LanguageCode::Korean => "Korean",
            LanguageCode::SimplifiedChinese => "Simplified Chinese",
            LanguageCode::TraditionalChinese => "Traditional Chinese",
        }
    }
}

impl TryFrom<u8> for LanguageCode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1..=5 => Ok(LanguageCode::ALL[value as usize - 1]),
            _ => Err(Error::InvalidLanguageCode(value)),
        }
    }
}

impl From<LanguageCode> for u8 {
    fn from(code: LanguageCode) -> Self {
        code as u8
    }
}

impl Decode for LanguageCode {
    fn decode<R: ByteRead + ?Sized>(reader: &mut R) -> Result<(Self, usize)> {
        Ok((LanguageCode::try_from(reader.read_byte()?)?, 1))
    }
}

impl Encode for LanguageCode {
    fn encode<W: ByteWrite + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        writer.write_u8(*self as u8)
    }

    #[inline(always)]
    fn byte_size(&self) -> usize {
        1
    }
}

impl Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::impls::MemByteReader;

    #[test]
    fn test_language_code() -> Result<()> {
        let mut reader = MemByteReader::new([3_u8, 4, 5, 1, 2, 0, 6]);
        let mut codes = vec![];
        for _ in 0..5 {
            codes.push(LanguageCode::decode(&mut reader)?.0);
        }
        assert_eq!(
            codes,
            [
                LanguageCode::Korean,
                LanguageCode::SimplifiedChinese,
                LanguageCode::TraditionalChinese,
                LanguageCode::Latin,
                LanguageCode::Japanese
            ]
        );
        assert!(matches!(
            LanguageCode::decode(&mut reader),
            Err(Error::InvalidLanguageCode(0))
        ));
        assert!(matches!(
            LanguageCode::decode(&mut reader),
            Err(Error::InvalidLanguageCode(6))
        ));
        for code in LanguageCode::ALL {
            assert_eq!(LanguageCode::try_from(u8::from(code))?, code);
        }
        assert_eq!(LanguageCode::SimplifiedChinese.to_string(), "Simplified Chinese");
        Ok(())
    }
}
