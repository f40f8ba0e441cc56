//! Fuzz target for `cargo metadata` output parsing.
//!
//! Malformed output must surface as a parse error, never a panic, and any
//! records that do come back are sorted.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_cargo_metadata
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(records) = distkit_licenses::parse_cargo_metadata(text) {
        assert!(records.windows(2).all(|w| {
            distkit_types::compare_records(&w[0], &w[1]) != std::cmp::Ordering::Greater
        }));
    }
});
