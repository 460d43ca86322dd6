/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of byte and bit streams.

If you need to read or write bytes from a file or any backend implementing
[`std::io::Read`] or [`std::io::Write`] you just need to wrap it in a
[`ByteAdapter`].

If instead you want to read directly from memory, or write to a vector, you
can use [`MemByteReader`] and [`MemByteWriterVec`].

Once you have a byte stream, you can wrap it in a [`BitReader`] or a
[`BitWriter`] to read or write bit fields. Bit streams are byte streams, too,
so byte-level values can be interleaved with bit-level fields.

*/

mod mem_byte_reader;
pub use mem_byte_reader::*;

mod mem_byte_writer;
pub use mem_byte_writer::*;

mod byte_adapter;
pub use byte_adapter::*;

mod bit_reader;
pub use bit_reader::BitReader;

mod bit_writer;
pub use bit_writer::BitWriter;
