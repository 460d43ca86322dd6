/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Check that [`MemByteReader`] and a [`ByteAdapter`] over the same bytes
//! return the same values, the same kind of errors and the same counts.

use crate::prelude::*;
use arbitrary::Arbitrary;
use std::io::Cursor;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    init: Vec<u8>,
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug)]
enum RandomCommand {
    ReadByte,
    ReadExact(u8),
    ReadU16,
    ReadI32,
    ReadF64,
    ReadEncodedU32,
}

/// Error outcomes that must agree between the two readers.
#[derive(Debug, PartialEq)]
enum Outcome {
    EndOfStream,
    ShortRead,
    Malformed,
    Other,
}

fn outcome(err: Error) -> Outcome {
    match err {
        Error::EndOfStream => Outcome::EndOfStream,
        Error::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Outcome::ShortRead,
        Error::MalformedVarint { .. } => Outcome::Malformed,
        _ => Outcome::Other,
    }
}

fn run<R: ByteRead + ?Sized>(
    reader: &mut R,
    command: &RandomCommand,
) -> core::result::Result<Vec<u8>, Outcome> {
    let result = match command {
        RandomCommand::ReadByte => reader.read_byte().map(|b| vec![b]),
        RandomCommand::ReadExact(len) => {
            let mut buf = vec![0; *len as usize];
            reader.read_exact(&mut buf).map(|_| buf)
        }
        RandomCommand::ReadU16 => reader.read_u16().map(|v| v.to_le_bytes().to_vec()),
        RandomCommand::ReadI32 => reader.read_i32().map(|v| v.to_le_bytes().to_vec()),
        RandomCommand::ReadF64 => reader.read_f64().map(|v| v.to_le_bytes().to_vec()),
        RandomCommand::ReadEncodedU32 => reader
            .read_encoded_u32()
            .map(|v| v.to_le_bytes().to_vec()),
    };
    result.map_err(outcome)
}

pub fn harness(data: FuzzCase) {
    let mut mem = MemByteReader::new(&data.init);
    let mut adapter = ByteAdapter::new(Cursor::new(&data.init));
    for command in &data.commands {
        let a = run(&mut mem, command);
        let b = run(&mut adapter, command);
        assert_eq!(a, b, "{:?}", command);
        assert_ne!(a, Err(Outcome::Other));
        assert_eq!(mem.bytes_read(), adapter.bytes_read());
        assert!(mem.bytes_read() <= data.init.len() as u64);
    }
}
