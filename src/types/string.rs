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

/// A zero-terminated byte string.
///
/// The content is usually, but not necessarily, UTF-8 (files older than
/// version 6 use locale-dependent encodings), so it is kept as raw bytes.
///
/// Decoding reads up to and including the first zero byte. If the stream
/// ends after at least one byte the terminator is taken as implicit; if it
/// ends before any byte, decoding fails with [`Error::EndOfStream`].
///
/// Encoding writes the bytes followed by a zero byte; a string containing a
/// zero byte cannot be encoded, as it would not be read back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct SwfString(pub Vec<u8>);

impl SwfString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Return the content as a `&str`, if it is valid UTF-8.
    pub fn to_str(&self) -> core::result::Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(&self.0)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<&str> for SwfString {
    fn from(s: &str) -> Self {
        SwfString(s.as_bytes().to_vec())
    }
}

impl From<String> for SwfString {
    fn from(s: String) -> Self {
        SwfString(s.into_bytes())
    }
}

impl From<Vec<u8>> for SwfString {
    fn from(bytes: Vec<u8>) -> Self {
        SwfString(bytes)
    }
}

impl Decode for SwfString {
    fn decode<R: ByteRead + ?Sized>(reader: &mut R) -> Result<(Self, usize)> {
        let mut bytes = vec![];
        let mut len = 0;
        loop {
            match reader.read_byte() {
                Ok(0) => {
                    len += 1;
                    break;
                }
                Ok(byte) => {
                    bytes.push(byte);
                    len += 1;
                }
                Err(Error::EndOfStream) if len > 0 => break,
                Err(e) => return Err(e),
            }
        }
        Ok((SwfString(bytes), len))
    }
}

impl Encode for SwfString {
    fn encode<W: ByteWrite + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        if let Some(position) = self.0.iter().position(|&b| b == 0) {
            return Err(Error::InteriorNul { position });
        }
        writer.write_all(&self.0)?;
        writer.write_byte(0)?;
        Ok(self.0.len() + 1)
    }

    #[inline(always)]
    fn byte_size(&self) -> usize {
        self.0.len() + 1
    }
}

impl Display for SwfString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}
