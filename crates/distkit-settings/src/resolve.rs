use crate::model::{DistkitConfigV1, SCHEMA_V1};
use anyhow::Context;
use camino::Utf8PathBuf;
use distkit_types::{Palette, Rgba};
use globset::Glob;

const DEFAULT_ASSETS_DIR: &str = "app/assets";
const DEFAULT_PACKAGER: &str = "iconutil";
const DEFAULT_APP_DIR: &str = "app";
const DEFAULT_NODE_ROOT: &str = ".";
const DEFAULT_OUTPUT: &str = "dist/THIRD_PARTY_LICENSES.txt";
const DEFAULT_CARGO: &str = "cargo";

/// Command-line values that win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub assets_dir: Option<Utf8PathBuf>,
    pub packager: Option<String>,
    pub app_dir: Option<Utf8PathBuf>,
    pub node_root: Option<Utf8PathBuf>,
    pub output: Option<Utf8PathBuf>,
    pub cargo_metadata: Option<Utf8PathBuf>,
}

/// Effective icon settings. Paths are relative to the repo root unless absolute.
#[derive(Clone, Debug, PartialEq)]
pub struct IconSettings {
    pub assets_dir: Utf8PathBuf,
    pub packager: String,
    pub palette: Palette,
}

/// Effective license-report settings. Paths are relative to the repo root unless absolute.
#[derive(Clone, Debug, PartialEq)]
pub struct LicenseSettings {
    pub app_dir: Utf8PathBuf,
    pub node_root: Utf8PathBuf,
    pub output: Utf8PathBuf,
    pub cargo: String,
    /// Pre-captured `cargo metadata` output to read instead of running cargo.
    pub cargo_metadata: Option<Utf8PathBuf>,
    pub exclude: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub icons: IconSettings,
    pub licenses: LicenseSettings,
}

pub fn resolve_config(cfg: DistkitConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_V1
    {
        anyhow::bail!("unknown schema: {schema} (expected '{SCHEMA_V1}')");
    }

    let icons = cfg.icons;
    let palette = Palette {
        primary: parse_color("icons.primary", icons.primary.as_deref(), Palette::DEFAULT_PRIMARY)?,
        foreground: parse_color(
            "icons.foreground",
            icons.foreground.as_deref(),
            Palette::DEFAULT_FOREGROUND,
        )?,
        accent: parse_color("icons.accent", icons.accent.as_deref(), Palette::DEFAULT_ACCENT)?,
    };

    let licenses = cfg.licenses;
    validate_exclude(&licenses.exclude)?;

    Ok(ResolvedConfig {
        icons: IconSettings {
            assets_dir: path_setting(overrides.assets_dir, icons.assets_dir, DEFAULT_ASSETS_DIR),
            packager: overrides
                .packager
                .or(icons.packager)
                .unwrap_or_else(|| DEFAULT_PACKAGER.to_string()),
            palette,
        },
        licenses: LicenseSettings {
            app_dir: path_setting(overrides.app_dir, licenses.app_dir, DEFAULT_APP_DIR),
            node_root: path_setting(overrides.node_root, licenses.node_root, DEFAULT_NODE_ROOT),
            output: path_setting(overrides.output, licenses.output, DEFAULT_OUTPUT),
            cargo: licenses.cargo.unwrap_or_else(|| DEFAULT_CARGO.to_string()),
            cargo_metadata: overrides.cargo_metadata,
            exclude: licenses.exclude,
        },
    })
}

fn path_setting(
    overridden: Option<Utf8PathBuf>,
    configured: Option<String>,
    default: &str,
) -> Utf8PathBuf {
    overridden
        .or(configured.map(Utf8PathBuf::from))
        .unwrap_or_else(|| Utf8PathBuf::from(default))
}

fn parse_color(key: &str, value: Option<&str>, default: Rgba) -> anyhow::Result<Rgba> {
    match value {
        Some(v) => v
            .parse()
            .with_context(|| format!("invalid color for {key}: {v}")),
        None => Ok(default),
    }
}

fn validate_exclude(patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern)
            .with_context(|| format!("invalid licenses.exclude glob: {pattern}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    #[test]
    fn empty_config_resolves_to_defaults() {
        let resolved = resolve_config(DistkitConfigV1::default(), Overrides::default())
            .expect("resolve");

        assert_eq!(resolved.icons.assets_dir, "app/assets");
        assert_eq!(resolved.icons.packager, "iconutil");
        assert_eq!(resolved.icons.palette, Palette::default());
        assert_eq!(resolved.licenses.app_dir, "app");
        assert_eq!(resolved.licenses.node_root, ".");
        assert_eq!(resolved.licenses.output, "dist/THIRD_PARTY_LICENSES.txt");
        assert_eq!(resolved.licenses.cargo, "cargo");
        assert_eq!(resolved.licenses.cargo_metadata, None);
        assert!(resolved.licenses.exclude.is_empty());
    }

    #[test]
    fn config_values_are_used() {
        let cfg = parse_config_toml(
            r##"
schema = "distkit.config.v1"

[icons]
assets_dir = "desktop/assets"
primary = "#00000080"

[licenses]
cargo = "cargo-1.92"
exclude = ["f11esync-*"]
"##,
        )
        .expect("parse");
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");

        assert_eq!(resolved.icons.assets_dir, "desktop/assets");
        assert_eq!(resolved.icons.palette.primary, Rgba::new(0, 0, 0, 0x80));
        assert_eq!(resolved.icons.palette.accent, Palette::DEFAULT_ACCENT);
        assert_eq!(resolved.licenses.cargo, "cargo-1.92");
        assert_eq!(resolved.licenses.exclude, vec!["f11esync-*".to_string()]);
    }

    #[test]
    fn overrides_win_over_config() {
        let cfg = parse_config_toml(
            r#"
[icons]
packager = "iconutil"

[licenses]
output = "target/NOTICE.txt"
"#,
        )
        .expect("parse");
        let overrides = Overrides {
            packager: Some("fake-iconutil".to_string()),
            output: Some(Utf8PathBuf::from("out/licenses.txt")),
            cargo_metadata: Some(Utf8PathBuf::from("meta.json")),
            ..Overrides::default()
        };
        let resolved = resolve_config(cfg, overrides).expect("resolve");

        assert_eq!(resolved.icons.packager, "fake-iconutil");
        assert_eq!(resolved.licenses.output, "out/licenses.txt");
        assert_eq!(
            resolved.licenses.cargo_metadata.as_deref(),
            Some(camino::Utf8Path::new("meta.json"))
        );
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let cfg = parse_config_toml(r#"schema = "distkit.config.v9""#).expect("parse");
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("unknown schema: distkit.config.v9"));
    }

    #[test]
    fn invalid_color_is_rejected() {
        let cfg = parse_config_toml("[icons]\naccent = \"blue\"").expect("parse");
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert_eq!(err.to_string(), "invalid color for icons.accent: blue");
    }

    #[test]
    fn invalid_exclude_glob_is_rejected() {
        let cfg = parse_config_toml("[licenses]\nexclude = [\"a[\"]").expect("parse");
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("invalid licenses.exclude glob: a["));
    }

    #[test]
    fn wrong_value_type_fails_to_parse() {
        assert!(parse_config_toml("[licenses]\nexclude = \"x\"").is_err());
    }
}
