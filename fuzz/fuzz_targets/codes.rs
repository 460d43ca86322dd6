#![no_main]

use libfuzzer_sys::fuzz_target;
use swf_codec::fuzz::codes::*;

fuzz_target!(|data: FuzzCase| harness(data));
