/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Variable-length byte code for 32-bit unsigned integers.
//!
//! This is the little-endian, incomplete, ungrouped variant (the same used by
//! [LEB128](https://en.wikipedia.org/wiki/LEB128) for unsigned numbers): a
//! value is split in blocks of 7 bits, starting from the least significant
//! one; each block is stored in a byte whose most significant bit is a
//! continuation bit, set on all bytes but the last. Only the leading zero
//! blocks are omitted, so zero is written as a single `0x00` byte.
//!
//! Since values have 32 bits, a code is at most five bytes long, and only the
//! four lowest bits of the fifth byte can be set: a fifth byte larger than 15
//! makes the code malformed.

use crate::error::{Error, Result};
use crate::traits::*;

const UPPER_BOUND_1: u32 = 1 << 7;
const UPPER_BOUND_2: u32 = 1 << 14;
const UPPER_BOUND_3: u32 = 1 << 21;
const UPPER_BOUND_4: u32 = 1 << 28;

/// The maximum length in bytes of the code of a `u32`.
pub const MAX_ENCODED_U32_BYTES: usize = 5;

/// Return the length in bytes of the code for `value`.
#[must_use]
#[inline]
pub fn len_encoded_u32(value: u32) -> usize {
    if value < UPPER_BOUND_1 {
        return 1;
    }
    if value < UPPER_BOUND_2 {
        return 2;
    }
    if value < UPPER_BOUND_3 {
        return 3;
    }
    if value < UPPER_BOUND_4 {
        return 4;
    }
    MAX_ENCODED_U32_BYTES
}

/// Trait for reading variable-length codes of `u32` values.
pub trait EncodedU32Read: ByteRead {
    fn read_encoded_u32(&mut self) -> Result<u32> {
        let mut value = 0;
        for i in 0..MAX_ENCODED_U32_BYTES - 1 {
            let byte = read_block(self, i)?;
            value |= ((byte & 0x7f) as u32) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        let byte = read_block(self, MAX_ENCODED_U32_BYTES - 1)?;
        if byte > 0x0f {
            return Err(Error::MalformedVarint { byte });
        }
        Ok(value | (byte as u32) << 28)
    }
}

/// Read the `index`-th byte of a code; end of stream after the first byte is
/// a truncated code.
#[inline(always)]
fn read_block<R: ByteRead + ?Sized>(reader: &mut R, index: usize) -> Result<u8> {
    match reader.read_byte() {
        Err(Error::EndOfStream) if index > 0 => Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("EncodedU32 truncated after {} bytes", index),
        ))),
        r => r,
    }
}

/// Trait for writing variable-length codes of `u32` values.
pub trait EncodedU32Write: ByteWrite {
    /// Write `value` and return the number of bytes written.
    fn write_encoded_u32(&mut self, mut value: u32) -> Result<usize> {
        let mut buffer = [0_u8; MAX_ENCODED_U32_BYTES];
        let mut len = 0;
        loop {
            let block = (value & 0x7f) as u8;
            value >>= 7;
            if value == 0 {
                buffer[len] = block;
                len += 1;
                break;
            }
            buffer[len] = block | 0x80;
            len += 1;
        }
        self.write_all(&buffer[..len])?;
        Ok(len)
    }
}

impl<B: ByteRead + ?Sized> EncodedU32Read for B {}
impl<B: ByteWrite + ?Sized> EncodedU32Write for B {}
