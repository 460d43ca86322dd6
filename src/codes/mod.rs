/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits for reading and writing the numeric codes of the SWF format.

Bit-field codes are packed at a width chosen by the caller; the remaining
codes are byte aligned. For example, the number 5 is written as follows:

| Code         | Width | Bits / bytes         |
|--------------|------:|---------------------:|
| UB           |     4 |                 0101 |
| SB           |     4 |                 0101 |
| FB (5/65536) |     4 |                 0101 |
| EncodedU32   |       |              `05`    |
| Float16 (5.0)|       |           `00 45`    |
| Fixed8 (5.0) |       |           `00 05`    |

Each code is implemented as a pair of extension traits for reading and
writing (e.g., [`BitFieldRead`] and [`BitFieldWrite`]), with a blanket
implementation, plus a `len_*` function computing the length of the code
for a given value. The traits for bit-field codes depend on
[`BitRead`](crate::traits::BitRead) and
[`BitWrite`](crate::traits::BitWrite), whereas the traits for byte-aligned
codes depend on [`ByteRead`](crate::traits::ByteRead) and
[`ByteWrite`](crate::traits::ByteWrite).

*/

pub mod bit_field;
pub use bit_field::{len_fb, len_sb, len_ub, BitFieldRead, BitFieldWrite};

pub mod encoded_u32;
pub use encoded_u32::{len_encoded_u32, EncodedU32Read, EncodedU32Write};

pub mod float16;
pub use float16::{f16_bits_to_f32, f32_to_f16_bits, Float16Read, Float16Write};

pub mod fixed;
pub use fixed::{FixedRead, FixedWrite};
