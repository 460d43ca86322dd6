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
use std::io::{ErrorKind, Read, Write};

/// An adapter from [`Read`] and [`Write`] to [`ByteRead`] and [`ByteWrite`],
/// respectively.
///
/// Instances of this struct can be created using [`ByteAdapter::new`]. They
/// turn every standard source or destination of bytes (such as
/// [`std::fs::File`], [`std::io::BufReader`], sockets, etc.) into a byte
/// stream with a running byte count. Reads are issued one byte at a time, so
/// you should wrap unbuffered backends in a [`std::io::BufReader`] or
/// [`std::io::BufWriter`].
///
/// A read hitting end of file before any byte is [`Error::EndOfStream`];
/// any other failure of the backend is reported as [`Error::Io`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct ByteAdapter<B> {
    backend: B,
    count: u64,
}

impl<B> ByteAdapter<B> {
    /// Create a new ByteAdapter
    pub fn new(backend: B) -> Self {
        Self { backend, count: 0 }
    }

    pub fn into_inner(self) -> B {
        self.backend
    }
}

impl<B: Read> ByteRead for ByteAdapter<B> {
    #[inline]
    fn read_byte(&mut self) -> Result<u8> {
        let mut byte = [0];
        loop {
            match self.backend.read(&mut byte) {
                Ok(0) => return Err(Error::EndOfStream),
                Ok(_) => {
                    self.count += 1;
                    return Ok(byte[0]);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    #[inline(always)]
    fn bytes_read(&self) -> u64 {
        self.count
    }
}

impl<B: Write> ByteWrite for ByteAdapter<B> {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.backend.write_all(&[byte])?;
        self.count += 1;
        Ok(())
    }

    /// Writes `buf` to the backend, counting every byte the backend accepts
    /// even if a later write fails.
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        let mut done = 0;
        while done < buf.len() {
            match self.backend.write(&buf[done..]) {
                Ok(0) => return Err(std::io::Error::from(ErrorKind::WriteZero).into()),
                Ok(n) => {
                    done += n;
                    self.count += n as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(self.backend.flush()?)
    }

    #[inline(always)]
    fn bytes_written(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_byte_adapter() -> Result<()> {
        let path = std::env::temp_dir().join("test_swf_byte_adapter");
        {
            let file = std::io::BufWriter::new(std::fs::File::create(&path)?);
            let mut writer = ByteAdapter::new(file);
            writer.write_u32(0xa6032421)?;
            writer.write_i16(-2)?;
            writer.write_byte(7)?;
            assert_eq!(writer.bytes_written(), 7);
            writer.flush()?;
        }
        {
            let file = std::io::BufReader::new(std::fs::File::open(&path)?);
            let mut reader = ByteAdapter::new(file);
            assert_eq!(reader.read_u32()?, 0xa6032421);
            assert_eq!(reader.read_i16()?, -2);
            // A partial read of a multi-byte value is an I/O error
            match reader.read_u16() {
                Err(Error::Io(e)) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
                r => panic!("unexpected result {r:?}"),
            }
            assert_eq!(reader.bytes_read(), 7);
            assert!(matches!(reader.read_byte(), Err(Error::EndOfStream)));
        }
        std::fs::remove_file(&path)?;
        Ok(())
    }
}
