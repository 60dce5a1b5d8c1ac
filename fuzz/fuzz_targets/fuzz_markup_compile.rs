#![no_main]

use libfuzzer_sys::fuzz_target;
use pokenews_core::markup::compile;

fuzz_target!(|data: &[u8]| {
    if let Ok(markup) = std::str::from_utf8(data) {
        let text = compile(markup);
        // Runs are never empty and never grow the text
        assert!(text.runs.iter().all(|run| !run.text.is_empty()));
        assert!(text.plain_text().len() <= markup.len());
    }
});
