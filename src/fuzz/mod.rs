/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Fuzzing harnesses, available with the `fuzz` feature.
//!
//! Each submodule exposes a `FuzzCase` implementing
//! [`arbitrary::Arbitrary`] and a `harness` function panicking on any
//! inconsistency. They are driven by the `cargo fuzz` targets in the `fuzz`
//! directory and replayed on random data by the test suite.

pub mod codes;
pub mod decode;
pub mod mem_byte_reader;
pub mod types;
