/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits

Byte streams ([`ByteRead`], [`ByteWrite`]) are the transport; bit streams
([`BitRead`], [`BitWrite`]) pack sub-byte fields on top of them; value types
implement [`Decode`]/[`Encode`] against byte streams and, when they can be
packed at an externally chosen width, [`BitDecode`]/[`BitEncode`] against bit
streams.

*/

mod byte_stream;
pub use byte_stream::*;

mod bit_stream;
pub use bit_stream::*;

mod codec;
pub use codec::*;
