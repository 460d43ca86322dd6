/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::Result;
use crate::traits::*;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An implementation of [`ByteWrite`] appending to a vector.
///
/// The vector can be owned (`Vec<u8>`) or borrowed (`&mut Vec<u8>`); in the
/// latter case, bytes are appended after its current content.
///
/// # Example
/// ```
/// use swf_codec::prelude::*;
///
/// let mut buffer: Vec<u8> = Vec::new();
/// let mut writer = MemByteWriterVec::new(&mut buffer);
/// writer.write_u16(0x0102).unwrap();
/// assert_eq!(writer.bytes_written(), 2);
/// assert_eq!(buffer, [0x02, 0x01]);
/// ```
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct MemByteWriterVec<B: AsMut<Vec<u8>>> {
    data: B,
    bytes_written: u64,
}

impl<B: AsMut<Vec<u8>>> MemByteWriterVec<B> {
    /// Create a new [`MemByteWriterVec`] from a vector.
    #[must_use]
    pub fn new(data: B) -> Self {
        Self {
            data,
            bytes_written: 0,
        }
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsMut<Vec<u8>>> ByteWrite for MemByteWriterVec<B> {
    #[inline(always)]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.data.as_mut().push(byte);
        self.bytes_written += 1;
        Ok(())
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.data.as_mut().extend_from_slice(buf);
        self.bytes_written += buf.len() as u64;
        Ok(())
    }

    #[inline(always)]
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}
