/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Size computations.

/// Return the number of bytes needed to store `bits` bits.
#[must_use]
#[inline(always)]
pub const fn bits_to_bytes(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Return the maximum of a fixed number of values, or `None` if there are
/// no values.
#[must_use]
#[inline]
pub fn max_of<T: Ord, const N: usize>(values: [T; N]) -> Option<T> {
    values.into_iter().max()
}

/// Return the minimum of a fixed number of values, or `None` if there are
/// no values.
#[must_use]
#[inline]
pub fn min_of<T: Ord, const N: usize>(values: [T; N]) -> Option<T> {
    values.into_iter().min()
}
