//! Config loading shared by every use case.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use distkit_settings::{DistkitConfigV1, Overrides, ResolvedConfig};
use serde_json::{Value, json};

/// Resolve `path` against the repo root. Absolute paths are kept as-is.
pub fn rooted(repo_root: &Utf8Path, path: &Utf8Path) -> Utf8PathBuf {
    if path == "." {
        repo_root.to_path_buf()
    } else {
        repo_root.join(path)
    }
}

/// Read the config file; a missing file reads as empty.
pub fn read_config_text(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        tracing::debug!(%path, "config file not found; using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))
}

/// Parse and resolve config text (empty is allowed, defaults apply).
pub fn load_config(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        DistkitConfigV1::default()
    } else {
        distkit_settings::parse_config_toml(config_text).context("parse config")?
    };
    distkit_settings::resolve_config(cfg, overrides).context("resolve config")
}

/// The effective configuration as JSON, with paths resolved against the repo root.
pub fn explain_config(repo_root: &Utf8Path, resolved: &ResolvedConfig) -> Value {
    let icons = &resolved.icons;
    let licenses = &resolved.licenses;
    json!({
        "icons": {
            "accent": icons.palette.accent.to_string(),
            "assets_dir": rooted(repo_root, &icons.assets_dir).as_str(),
            "foreground": icons.palette.foreground.to_string(),
            "packager": icons.packager,
            "primary": icons.palette.primary.to_string(),
        },
        "licenses": {
            "app_dir": rooted(repo_root, &licenses.app_dir).as_str(),
            "cargo": licenses.cargo,
            "cargo_metadata": licenses
                .cargo_metadata
                .as_deref()
                .map(|p| rooted(repo_root, p).into_string()),
            "exclude": licenses.exclude,
            "node_root": rooted(repo_root, &licenses.node_root).as_str(),
            "output": rooted(repo_root, &licenses.output).as_str(),
        },
        "repo_root": repo_root.as_str(),
    })
}

/// Write text, creating parent directories.
pub fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_resolves_to_repo_root() {
        let root = Utf8Path::new("/work/repo");
        assert_eq!(rooted(root, Utf8Path::new(".")), "/work/repo");
        assert_eq!(rooted(root, Utf8Path::new("app")), "/work/repo/app");
        assert_eq!(rooted(root, Utf8Path::new("/abs/out.txt")), "/abs/out.txt");
    }

    #[test]
    fn blank_config_text_uses_defaults() {
        let resolved = load_config("\n  \n", Overrides::default()).expect("load");
        assert_eq!(resolved.icons.packager, "iconutil");
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let err = load_config("icons = 3", Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").starts_with("parse config: "));
    }

    #[test]
    fn explain_shows_resolved_values() {
        let resolved = load_config(
            "[licenses]\nexclude = [\"f11esync-*\"]",
            Overrides::default(),
        )
        .expect("load");
        let value = explain_config(Utf8Path::new("/work/repo"), &resolved);

        insta::assert_json_snapshot!(value, @r###"
        {
          "icons": {
            "accent": "#4093FF",
            "assets_dir": "/work/repo/app/assets",
            "foreground": "#FFFFFF",
            "packager": "iconutil",
            "primary": "#1677FF"
          },
          "licenses": {
            "app_dir": "/work/repo/app",
            "cargo": "cargo",
            "cargo_metadata": null,
            "exclude": [
              "f11esync-*"
            ],
            "node_root": "/work/repo",
            "output": "/work/repo/dist/THIRD_PARTY_LICENSES.txt"
          },
          "repo_root": "/work/repo"
        }
        "###);
    }
}
