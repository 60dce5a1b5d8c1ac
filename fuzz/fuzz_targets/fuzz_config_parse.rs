#![no_main]

use libfuzzer_sys::fuzz_target;
use pokenews_core::config::CountdownConfig;

fuzz_target!(|data: &[u8]| {
    // Only the absence of panics matters
    let _: Result<CountdownConfig, _> = serde_json::from_slice(data);
});
