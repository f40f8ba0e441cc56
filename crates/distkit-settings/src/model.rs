use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The only schema string this version understands.
pub const SCHEMA_V1: &str = "distkit.config.v1";

/// `distkit.toml` schema v1. Every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DistkitConfigV1 {
    /// Optional schema string for tooling (`distkit.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub icons: IconsConfig,

    #[serde(default)]
    pub licenses: LicensesConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IconsConfig {
    /// Output directory for icon assets, relative to the repo root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<String>,

    /// ICNS packager program (`iconutil` by default).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packager: Option<String>,

    /// Tile color, `#RRGGBB` or `#RRGGBBAA`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,

    /// Wordmark color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,

    /// Accent dot color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LicensesConfig {
    /// Directory `cargo metadata` runs in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_dir: Option<String>,

    /// Directory holding `package.json` and `node_modules`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_root: Option<String>,

    /// Report path, relative to the repo root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Cargo program to invoke.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,

    /// Package-name globs left out of the report.
    #[serde(default)]
    pub exclude: Vec<String>,
}
