/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{Error, Result};
use crate::traits::*;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An implementation of [`ByteRead`] for a slice.
///
/// The reader is forward-only: [`ByteRead::bytes_read`] is also the index of
/// the next byte to be read.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct MemByteReader<B: AsRef<[u8]>> {
    data: B,
    byte_index: usize,
}

impl<B: AsRef<[u8]>> MemByteReader<B> {
    /// Create a new [`MemByteReader`] from a slice of data
    #[must_use]
    pub fn new(data: B) -> Self {
        Self {
            data,
            byte_index: 0,
        }
    }

    /// Return the bytes that have not been read yet.
    pub fn remaining(&self) -> &[u8] {
        &self.data.as_ref()[self.byte_index..]
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsRef<[u8]>> ByteRead for MemByteReader<B> {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<u8> {
        let byte = *self
            .data
            .as_ref()
            .get(self.byte_index)
            .ok_or(Error::EndOfStream)?;
        self.byte_index += 1;
        Ok(byte)
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let available = self.remaining().len();
        if available == 0 && !buf.is_empty() {
            return Err(Error::EndOfStream);
        }
        if available < buf.len() {
            // Consume what is left, as a streaming source would
            self.byte_index += available;
            return Err(short_read(available, buf.len()));
        }
        buf.copy_from_slice(&self.data.as_ref()[self.byte_index..self.byte_index + buf.len()]);
        self.byte_index += buf.len();
        Ok(())
    }

    #[inline(always)]
    fn bytes_read(&self) -> u64 {
        self.byte_index as u64
    }
}
