/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Replay the fuzzing harnesses on pseudorandom inputs and, if present, on
//! the corpora accumulated by `cargo fuzz` in `fuzz/corpus`.

use arbitrary::Arbitrary;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

const CASES: usize = 500;

fn corpus(name: &str) -> std::io::Result<Vec<Vec<u8>>> {
    let dir = format!("fuzz/corpus/{}", name);
    let mut inputs = vec![];
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Ok(inputs);
    };
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            inputs.push(std::fs::read(entry.path())?);
        }
    }
    Ok(inputs)
}

macro_rules! impl_fuzz_repr {
    ($func_name:ident, $fuzz_name:ident) => {
        #[test]
        fn $func_name() -> std::io::Result<()> {
            use swf_codec::fuzz::$fuzz_name::*;

            let mut inputs = corpus(stringify!($fuzz_name))?;
            let mut rng = SmallRng::seed_from_u64(0);
            for len in 0..CASES {
                let mut bytes = vec![0; len * 4];
                rng.fill_bytes(&mut bytes);
                inputs.push(bytes);
            }

            for bytes in inputs {
                let mut unstructured = arbitrary::Unstructured::new(&bytes);
                if let Ok(data) = FuzzCase::arbitrary(&mut unstructured) {
                    harness(data);
                }
            }
            Ok(())
        }
    };
}

impl_fuzz_repr!(test_rep_fuzz_codes, codes);
impl_fuzz_repr!(test_rep_fuzz_types, types);
impl_fuzz_repr!(test_rep_fuzz_decode, decode);
impl_fuzz_repr!(test_rep_fuzz_mem_byte_reader, mem_byte_reader);
