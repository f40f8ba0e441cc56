//! Fuzz target for package-name exclusion globs.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_exclusions
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct ExclusionInput {
    patterns: Vec<String>,
    names: Vec<String>,
}

fuzz_target!(|input: ExclusionInput| {
    if input.patterns.len() > 20 || input.names.len() > 100 {
        return;
    }
    let patterns: Vec<String> = input.patterns.into_iter().filter(|p| p.len() <= 256).collect();

    if let Ok(exclusions) = distkit_licenses::Exclusions::new(&patterns) {
        for name in input.names.iter().filter(|n| n.len() <= 512) {
            let _ = exclusions.is_excluded(name);
        }
    }
});
