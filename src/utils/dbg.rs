/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::Result;
use crate::traits::*;

/// A wrapper over a [`BitRead`] that reports on standard error all
/// operations performed.
///
/// Since bit-field codes are implemented on top of [`BitRead::read_bits`],
/// every field read through the wrapper is reported.
#[derive(Debug, Clone)]
pub struct DbgBitReader<R> {
    reader: R,
}

impl<R> DbgBitReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BitRead> BitRead for DbgBitReader<R> {
    fn read_bits(&mut self, n_bits: usize) -> Result<u64> {
        match self.reader.read_bits(n_bits) {
            Ok(value) => {
                eprintln!("read_bits({}): {}", n_bits, value);
                Ok(value)
            }
            Err(e) => {
                eprintln!("read_bits({}): error: {}", n_bits, e);
                Err(e)
            }
        }
    }

    fn align(&mut self) {
        eprintln!("align()");
        self.reader.align()
    }
}

/// A wrapper over a [`BitWrite`] that reports on standard error all
/// operations performed.
#[derive(Debug, Clone)]
pub struct DbgBitWriter<W> {
    writer: W,
}

impl<W> DbgBitWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: BitWrite> BitWrite for DbgBitWriter<W> {
    fn write_bits(&mut self, value: u64, n_bits: usize) -> Result<usize> {
        eprintln!("write_bits({}, {})", value, n_bits);
        self.writer.write_bits(value, n_bits)
    }

    fn align(&mut self) -> Result<usize> {
        let padding = self.writer.align()?;
        eprintln!("align(): {}", padding);
        Ok(padding)
    }
}

#[cfg(test)]
#[test]
fn test_dbg() -> Result<()> {
    use crate::prelude::*;
    let mut buffer: Vec<u8> = vec![];
    let mut writer = DbgBitWriter::new(BitWriter::new(MemByteWriterVec::new(&mut buffer)));
    writer.write_ub(3, 5)?;
    for value in 0..4 {
        Twips(value).encode_bits(&mut writer, 3)?;
    }
    assert_eq!(BitWrite::align(&mut writer)?, 7);
    writer.into_inner().into_inner()?;
    assert_eq!(buffer, [24, 41, 128]);

    let mut reader = DbgBitReader::new(BitReader::new(MemByteReader::new(&buffer)));
    let width = reader.read_ub(5)? as usize;
    let rect: Vec<Twips> = (0..4)
        .map(|_| Twips::decode_bits(&mut reader, width))
        .collect::<Result<_>>()?;
    assert_eq!(rect, [Twips(0), Twips(1), Twips(2), Twips(3)]);
    BitRead::align(&mut reader);
    assert!(reader.read_bits(1).is_err());
    Ok(())
}
