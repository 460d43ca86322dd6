/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Helpers for sequences of values, size computations, and debugging.

[`read_all`], [`write_all`] and [`total_size`] apply the corresponding
operation to a heterogeneous sequence of values, in order.

[`CountBitReader`] and [`CountBitWriter`] keep track of the number
of bits read or written to a [`BitRead`](crate::traits::BitRead)
and [`BitWrite`](crate::traits::BitWrite), respectively,
optionally printing on standard error the operations performed on the stream.

[`DbgBitReader`] and [`DbgBitWriter`] print on standard error all
operations performed by a [`BitRead`](crate::traits::BitRead) or
[`BitWrite`](crate::traits::BitWrite).

*/

mod count;
pub use count::*;

mod dbg;
pub use dbg::*;

pub mod seq;
pub use seq::{read_all, total_size, write_all, DecodeField, EncodeField};

pub mod size;
pub use size::{bits_to_bytes, max_of, min_of};
