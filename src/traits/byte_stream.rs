/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{Error, Result};
use num_traits::{FromBytes, ToBytes};

/// Sequential, streaming byte-by-byte reads.
///
/// Implementors keep a running count of the bytes they delivered, which is
/// used by codecs to report how many bytes a decode consumed. The count
/// includes the bytes delivered by reads that eventually failed.
///
/// This trait is dyn-compatible: codecs accept `R: ByteRead + ?Sized`, so
/// `&mut dyn ByteRead` can be used wherever a concrete reader is expected.
pub trait ByteRead {
    /// Read a byte and advance the current position.
    ///
    /// Returns [`Error::EndOfStream`] if the source is exhausted.
    fn read_byte(&mut self) -> Result<u8>;

    /// Fill `buf` completely.
    ///
    /// If the source is exhausted before the first byte, returns
    /// [`Error::EndOfStream`]; if it is exhausted after some, but not all,
    /// bytes have been read, returns an [`Error::Io`] of kind
    /// [`std::io::ErrorKind::UnexpectedEof`].
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = match self.read_byte() {
                Ok(b) => b,
                Err(Error::EndOfStream) if i > 0 => return Err(short_read(i, buf.len())),
                Err(e) => return Err(e),
            };
        }
        Ok(())
    }

    /// Return the number of bytes read so far.
    fn bytes_read(&self) -> u64;
}

/// Sequential, streaming byte-by-byte writes.
pub trait ByteWrite {
    /// Write a byte and advance the current position.
    fn write_byte(&mut self, byte: u8) -> Result<()>;

    /// Write all the bytes in `buf`.
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        for &byte in buf {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Flush the stream.
    fn flush(&mut self) -> Result<()>;

    /// Return the number of bytes written so far.
    fn bytes_written(&self) -> u64;
}

/// The error returned when a read of `expected` bytes obtains only `found`.
pub(crate) fn short_read(found: usize, expected: usize) -> Error {
    Error::Io(std::io::Error::new(
        std::io::ErrorKind::UnexpectedEof,
        format!("read {} bytes out of {}", found, expected),
    ))
}

impl<R: ByteRead + ?Sized> ByteRead for &mut R {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<u8> {
        (**self).read_byte()
    }

    #[inline(always)]
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).read_exact(buf)
    }

    #[inline(always)]
    fn bytes_read(&self) -> u64 {
        (**self).bytes_read()
    }
}

impl<W: ByteWrite + ?Sized> ByteWrite for &mut W {
    #[inline(always)]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        (**self).write_byte(byte)
    }

    #[inline(always)]
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        (**self).write_all(buf)
    }

    #[inline(always)]
    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    #[inline(always)]
    fn bytes_written(&self) -> u64 {
        (**self).bytes_written()
    }
}

/// Little-endian reads of fixed-width numbers from a [`ByteRead`].
///
/// All methods are implemented for every [`ByteRead`]; just pull this trait
/// in scope.
pub trait LittleEndianRead: ByteRead {
    /// Read a number stored in little-endian byte order.
    #[inline]
    fn read_le<T>(&mut self) -> Result<T>
    where
        T: FromBytes,
        T::Bytes: Sized + Default,
    {
        let mut bytes = T::Bytes::default();
        self.read_exact(bytes.as_mut())?;
        Ok(T::from_le_bytes(&bytes))
    }

    #[inline(always)]
    fn read_u8(&mut self) -> Result<u8> {
        self.read_byte()
    }

    #[inline(always)]
    fn read_u16(&mut self) -> Result<u16> {
        self.read_le()
    }

    #[inline(always)]
    fn read_u32(&mut self) -> Result<u32> {
        self.read_le()
    }

    #[inline(always)]
    fn read_u64(&mut self) -> Result<u64> {
        self.read_le()
    }

    #[inline(always)]
    fn read_i8(&mut self) -> Result<i8> {
        self.read_byte().map(|b| b as i8)
    }

    #[inline(always)]
    fn read_i16(&mut self) -> Result<i16> {
        self.read_le()
    }

    #[inline(always)]
    fn read_i32(&mut self) -> Result<i32> {
        self.read_le()
    }

    #[inline(always)]
    fn read_i64(&mut self) -> Result<i64> {
        self.read_le()
    }

    #[inline(always)]
    fn read_f32(&mut self) -> Result<f32> {
        self.read_le()
    }

    #[inline(always)]
    fn read_f64(&mut self) -> Result<f64> {
        self.read_le()
    }
}

/// Little-endian writes of fixed-width numbers to a [`ByteWrite`].
///
/// Every method returns the number of bytes written.
pub trait LittleEndianWrite: ByteWrite {
    /// Write a number in little-endian byte order.
    #[inline]
    fn write_le<T: ToBytes>(&mut self, value: T) -> Result<usize> {
        let bytes = value.to_le_bytes();
        self.write_all(bytes.as_ref())?;
        Ok(bytes.as_ref().len())
    }

    #[inline(always)]
    fn write_u8(&mut self, value: u8) -> Result<usize> {
        self.write_byte(value).map(|_| 1)
    }

    #[inline(always)]
    fn write_u16(&mut self, value: u16) -> Result<usize> {
        self.write_le(value)
    }

    #[inline(always)]
    fn write_u32(&mut self, value: u32) -> Result<usize> {
        self.write_le(value)
    }

    #[inline(always)]
    fn write_u64(&mut self, value: u64) -> Result<usize> {
        self.write_le(value)
    }

    #[inline(always)]
    fn write_i8(&mut self, value: i8) -> Result<usize> {
        self.write_byte(value as u8).map(|_| 1)
    }

    #[inline(always)]
    fn write_i16(&mut self, value: i16) -> Result<usize> {
        self.write_le(value)
    }

    #[inline(always)]
    fn write_i32(&mut self, value: i32) -> Result<usize> {
        self.write_le(value)
    }

    #[inline(always)]
    fn write_i64(&mut self, value: i64) -> Result<usize> {
        self.write_le(value)
    }

    #[inline(always)]
    fn write_f32(&mut self, value: f32) -> Result<usize> {
        self.write_le(value)
    }

    #[inline(always)]
    fn write_f64(&mut self, value: f64) -> Result<usize> {
        self.write_le(value)
    }
}

impl<R: ByteRead + ?Sized> LittleEndianRead for R {}
impl<W: ByteWrite + ?Sized> LittleEndianWrite for W {}
