/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Value types of the SWF format.

Byte-aligned types implement [`Decode`](crate::traits::Decode) and
[`Encode`](crate::traits::Encode); types that are packed at a width chosen
by their container ([`BitUint`], [`BitInt`], [`BitFixed`], [`Twips`])
implement [`BitDecode`](crate::traits::BitDecode) and
[`BitEncode`](crate::traits::BitEncode).

Self-describing composites ([`Rect`], [`Matrix`], [`CxForm`],
[`CxFormWithAlpha`]) start at a byte boundary, record the width of their
fields in the stream, and are padded to a byte boundary at the end. They are
written using the minimum width that can represent all their fields, so
[`Encode::byte_size`](crate::traits::Encode::byte_size) depends on the
values.

Fixed-width integers and floats (`u8`, …, `u64`, `i8`, …, `i64`, `f32`,
`f64`) implement [`Decode`](crate::traits::Decode) and
[`Encode`](crate::traits::Encode) directly, using little-endian byte order.

*/

mod primitive;
pub use primitive::Twips;

mod numeric;
pub use numeric::{EncodedU32, Fixed, Fixed8, Float16};

mod bits;
pub use bits::{BitFixed, BitInt, BitUint};

mod color;
pub use color::{Argb, Rgb, Rgba};

mod string;
pub use string::SwfString;

mod language;
pub use language::LanguageCode;

mod rect;
pub use rect::Rect;

mod matrix;
pub use matrix::Matrix;

mod cxform;
pub use cxform::{CxForm, CxFormWithAlpha, DEFAULT_ADD, DEFAULT_MULT};
