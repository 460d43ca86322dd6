#![no_main]

use libfuzzer_sys::fuzz_target;
use swf_codec::fuzz::mem_byte_reader::*;

fuzz_target!(|data: FuzzCase| harness(data));
