/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Write a random sequence of bit fields and byte-aligned codes to a bit
//! stream, read it back and check values and lengths.

use crate::prelude::*;
use arbitrary::Arbitrary;

const DEBUG: bool = false;

macro_rules! debugln {
    ($($arg:tt)*) => {
        if DEBUG {
            println!($($arg)*);
        }
    };
}

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug, Clone)]
enum RandomCommand {
    Bits(u64, usize),
    Ub(u32, usize),
    Sb(i32, usize),
    Fb(i32, usize),
    Align,
    EncodedU32(u32),
    Float16(u16),
    Fixed(u32),
    Fixed8(u16),
    Bytes(Vec<u8>),
}

pub fn harness(data: FuzzCase) {
    let mut data = data;
    for command in &mut data.commands {
        match command {
            RandomCommand::Bits(value, n_bits) => {
                *n_bits %= 65;
                if *n_bits < 64 {
                    *value &= (1 << *n_bits) - 1;
                }
            }
            RandomCommand::Ub(value, n_bits) => {
                *n_bits = len_ub(*value) + *n_bits % (33 - len_ub(*value));
            }
            RandomCommand::Sb(value, n_bits) | RandomCommand::Fb(value, n_bits) => {
                *n_bits = len_sb(*value) + *n_bits % (33 - len_sb(*value));
            }
            _ => {}
        };
    }

    debugln!("{:#4?}", data);

    let mut buffer: Vec<u8> = vec![];
    {
        let mut writer = BitWriter::new(MemByteWriterVec::new(&mut buffer));
        for command in data.commands.iter() {
            match command {
                RandomCommand::Bits(value, n_bits) => {
                    assert_eq!(writer.write_bits(*value, *n_bits).unwrap(), *n_bits);
                }
                RandomCommand::Ub(value, n_bits) => {
                    assert_eq!(writer.write_ub(*value, *n_bits).unwrap(), *n_bits);
                }
                RandomCommand::Sb(value, n_bits) => {
                    assert_eq!(writer.write_sb(*value, *n_bits).unwrap(), *n_bits);
                }
                RandomCommand::Fb(raw, n_bits) => {
                    let value = *raw as f64 / 65536.0;
                    assert_eq!(len_fb(value), len_sb(*raw));
                    assert_eq!(writer.write_fb(value, *n_bits).unwrap(), *n_bits);
                }
                RandomCommand::Align => {
                    BitWrite::align(&mut writer).unwrap();
                    assert!(writer.is_aligned());
                }
                RandomCommand::EncodedU32(value) => {
                    let len = writer.write_encoded_u32(*value).unwrap();
                    assert_eq!(len, len_encoded_u32(*value));
                }
                RandomCommand::Float16(half) => {
                    assert_eq!(writer.write_float16(f16_bits_to_f32(*half)).unwrap(), 2);
                }
                RandomCommand::Fixed(raw) => {
                    assert_eq!(writer.write_fixed(*raw as f64 / 65536.0).unwrap(), 4);
                }
                RandomCommand::Fixed8(raw) => {
                    assert_eq!(writer.write_fixed8(*raw as f32 / 256.0).unwrap(), 2);
                }
                RandomCommand::Bytes(bytes) => {
                    writer.write_all(bytes).unwrap();
                }
            };
            debugln!("{:?} -> {} bytes", command, writer.bytes_written());
        }
        writer.flush().unwrap();
    }

    let mut reader = BitReader::new(MemByteReader::new(&buffer));
    for command in data.commands.iter() {
        match command {
            RandomCommand::Bits(value, n_bits) => {
                assert_eq!(reader.read_bits(*n_bits).unwrap(), *value);
            }
            RandomCommand::Ub(value, n_bits) => {
                assert_eq!(reader.read_ub(*n_bits).unwrap(), *value);
            }
            RandomCommand::Sb(value, n_bits) => {
                assert_eq!(reader.read_sb(*n_bits).unwrap(), *value);
            }
            RandomCommand::Fb(raw, n_bits) => {
                assert_eq!(reader.read_fb(*n_bits).unwrap(), *raw as f64 / 65536.0);
            }
            RandomCommand::Align => BitRead::align(&mut reader),
            RandomCommand::EncodedU32(value) => {
                assert_eq!(reader.read_encoded_u32().unwrap(), *value);
            }
            RandomCommand::Float16(half) => {
                let value = reader.read_float16().unwrap();
                if f16_bits_to_f32(*half).is_nan() {
                    assert!(value.is_nan());
                } else {
                    assert_eq!(f32_to_f16_bits(value), *half);
                }
            }
            RandomCommand::Fixed(raw) => {
                assert_eq!(reader.read_fixed().unwrap(), *raw as f64 / 65536.0);
            }
            RandomCommand::Fixed8(raw) => {
                assert_eq!(reader.read_fixed8().unwrap(), *raw as f32 / 256.0);
            }
            RandomCommand::Bytes(bytes) => {
                let mut read = vec![0; bytes.len()];
                reader.read_exact(&mut read).unwrap();
                assert_eq!(&read, bytes);
            }
        }
    }
    // The padding of the last byte is the only thing left
    assert_eq!(reader.bytes_read(), buffer.len() as u64);
    assert!(reader.read_byte().unwrap_err().is_end_of_stream());
}
