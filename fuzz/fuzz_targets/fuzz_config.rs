//! Fuzz target for `distkit.toml` parsing and resolution.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(cfg) = distkit_settings::parse_config_toml(text) {
        let _ = distkit_settings::resolve_config(cfg, distkit_settings::Overrides::default());
    }
});
