#![no_main]

use libfuzzer_sys::fuzz_target;
use swf_codec::fuzz::decode::*;

fuzz_target!(|data: FuzzCase| harness(data));
