//! Config parsing and override resolution.
//!
//! This crate is IO-free: it parses configuration provided as a string and
//! resolves it against command-line overrides and built-in defaults.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{DistkitConfigV1, IconsConfig, LicensesConfig, SCHEMA_V1};
pub use resolve::{IconSettings, LicenseSettings, Overrides, ResolvedConfig};

/// Parse `distkit.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<DistkitConfigV1> {
    let cfg: DistkitConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective settings: overrides, then config, then defaults.
pub fn resolve_config(cfg: DistkitConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
