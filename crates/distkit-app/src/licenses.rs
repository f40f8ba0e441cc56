//! The `licenses` use case: collect dependency metadata and write the notice.
//!
//! Two failure boundaries: each ecosystem source is downgraded to a warning
//! inside the report, and any error composing the report is downgraded to a
//! placeholder file. Only failing to write the output file is fatal.

use crate::config::{load_config, rooted, write_text_file};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use distkit_licenses::{
    CargoMetadataCommand, CargoMetadataFile, DependencySource, Exclusions, NodePackages,
    collect_dependency_set,
};
use distkit_render::{ReportSection, compose_report, placeholder_report};
use distkit_settings::{DistkitConfigV1, LicenseSettings, Overrides};

/// Input for the licenses use case.
#[derive(Debug)]
pub struct LicensesInput<'a> {
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if not found), or why it could not be read.
    pub config_text: anyhow::Result<String>,
    pub overrides: Overrides,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LicensesOutput {
    pub path: Utf8PathBuf,
    /// Set when the placeholder was written instead of a full report.
    pub placeholder: bool,
}

/// Compose the full license notice.
pub fn generate_report(repo_root: &Utf8Path, settings: &LicenseSettings) -> anyhow::Result<String> {
    let exclusions = Exclusions::new(&settings.exclude).context("compile exclude globs")?;

    let rust: Box<dyn DependencySource> = match &settings.cargo_metadata {
        Some(path) => Box::new(CargoMetadataFile::new(rooted(repo_root, path))),
        None => Box::new(CargoMetadataCommand::new(
            settings.cargo.clone(),
            rooted(repo_root, &settings.app_dir),
        )),
    };
    let node = NodePackages::new(rooted(repo_root, &settings.node_root));

    let sources: [&dyn DependencySource; 2] = [rust.as_ref(), &node];
    let sections: Vec<ReportSection> = sources
        .into_iter()
        .map(|source| {
            let set = collect_dependency_set(source, &exclusions);
            match set.unavailable {
                Some(reason) => ReportSection::unavailable(set.ecosystem, reason),
                None => ReportSection::new(set.ecosystem, set.records),
            }
        })
        .collect();

    Ok(compose_report(&sections))
}

/// Write the license notice, falling back to a placeholder when composition fails.
pub fn run_licenses(input: LicensesInput<'_>) -> anyhow::Result<LicensesOutput> {
    let resolved = input
        .config_text
        .and_then(|text| load_config(&text, input.overrides.clone()));

    let output = match &resolved {
        Ok(cfg) => cfg.licenses.output.clone(),
        Err(_) => {
            distkit_settings::resolve_config(DistkitConfigV1::default(), input.overrides)
                .context("resolve default output path")?
                .licenses
                .output
        }
    };
    let path = rooted(input.repo_root, &output);

    let composed = resolved.and_then(|cfg| generate_report(input.repo_root, &cfg.licenses));
    let (text, placeholder) = match composed {
        Ok(text) => (text, false),
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "license report failed; writing placeholder");
            (placeholder_report(&format!("{err:#}")), true)
        }
    };

    write_text_file(&path, &text)?;
    tracing::info!(%path, placeholder, "wrote license notice");
    Ok(LicensesOutput { path, placeholder })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::read_config_text;
    use distkit_test_util::{NodeProject, cargo_metadata_json, utf8_root, write_file};
    use serde_json::json;
    use tempfile::TempDir;

    const NO_CARGO: &str = "[licenses]\ncargo = \"distkit-no-such-cargo\"\n";

    fn run(root: &Utf8Path, config_text: &str, overrides: Overrides) -> LicensesOutput {
        run_licenses(LicensesInput {
            repo_root: root,
            config_text: Ok(config_text.to_string()),
            overrides,
        })
        .expect("run licenses")
    }

    #[test]
    fn both_sources_unavailable_still_writes_a_report() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        let out = run(&root, NO_CARGO, Overrides::default());

        assert_eq!(out.path, root.join("dist/THIRD_PARTY_LICENSES.txt"));
        assert!(!out.placeholder);
        let text = std::fs::read_to_string(&out.path).expect("read report");
        assert!(text.contains("=== Rust (Cargo) ===\nName | Version | License | Repository/Source\n"));
        assert!(text.contains(
            "=== Node (TS/Bun) - direct dependencies ===\nName | Version | License | Repository\n"
        ));
        assert_eq!(text.matches("[warn] ").count(), 2);
        assert!(text.contains("[warn] Rust dependency inventory failed: failed to run distkit-no-such-cargo metadata --format-version=1"));
        assert!(text.contains("[warn] Node dependency inventory failed: read "));
        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn uninstalled_node_dependency_renders_a_bare_row() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        NodeProject::new(&root).manifest(json!({"dependencies": {"left-pad": "1.0.0"}}));

        let out = run(&root, NO_CARGO, Overrides::default());

        let text = std::fs::read_to_string(&out.path).expect("read report");
        let node: Vec<&str> = text
            .lines()
            .skip_while(|l| !l.starts_with("=== Node"))
            .collect();
        assert_eq!(
            node,
            vec![
                "=== Node (TS/Bun) - direct dependencies ===",
                "Name     | Version | License | Repository",
                "left-pad |         |         |",
            ]
        );
    }

    #[test]
    fn captured_metadata_and_exclusions_are_applied() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("target/metadata.json"), &cargo_metadata_json());
        NodeProject::new(&root)
            .manifest(json!({"dependencies": {"f11esync-proto": "workspace:*", "ws": "^8"}}))
            .installed(
                "ws",
                json!({"version": "8.16.0", "license": "MIT", "repository": "websockets/ws"}),
            );
        let overrides = Overrides {
            cargo_metadata: Some("target/metadata.json".into()),
            output: Some("out/NOTICE.txt".into()),
            ..Overrides::default()
        };

        let out = run(&root, "[licenses]\nexclude = [\"f11esync-*\", \"syn\"]\n", overrides);

        assert_eq!(out.path, root.join("out/NOTICE.txt"));
        let text = std::fs::read_to_string(&out.path).expect("read report");
        let body: Vec<&str> = text.lines().skip(5).collect();
        insta::assert_debug_snapshot!(body, @r###"
        [
            "=== Rust (Cargo) ===",
            "Name      | Version | License           | Repository/Source                                    ",
            "anyhow    | 1.0.102 | MIT OR Apache-2.0 | https://github.com/dtolnay/anyhow                    ",
            "Inflector | 0.11.4  |                   | registry+https://github.com/rust-lang/crates.io-index",
            "serde     | 1.0.228 | MIT OR Apache-2.0 | https://github.com/serde-rs/serde                    ",
            "",
            "=== Node (TS/Bun) - direct dependencies ===",
            "Name | Version | License | Repository   ",
            "ws   | 8.16.0  | MIT     | websockets/ws",
        ]
        "###);
    }

    #[test]
    fn invalid_config_writes_placeholder() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        let out = run(&root, "[licenses]\nexclude = [\"a[\"]\n", Overrides::default());

        assert!(out.placeholder);
        assert_eq!(out.path, root.join("dist/THIRD_PARTY_LICENSES.txt"));
        let text = std::fs::read_to_string(&out.path).expect("read report");
        assert!(text.starts_with("THIRD_PARTY_LICENSES\n\n"));
        assert!(text.contains("\n\n[error] resolve config: invalid licenses.exclude glob: a["));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn placeholder_honors_output_override() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let overrides = Overrides {
            output: Some("custom/licenses.txt".into()),
            ..Overrides::default()
        };

        let out = run(&root, "schema = \"nope\"", overrides);

        assert!(out.placeholder);
        assert!(root.join("custom/licenses.txt").is_file());
    }

    #[test]
    fn unreadable_config_writes_placeholder() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("distkit.toml/nested"), "");

        let out = run_licenses(LicensesInput {
            repo_root: &root,
            config_text: read_config_text(&root.join("distkit.toml")),
            overrides: Overrides::default(),
        })
        .expect("run licenses");

        assert!(out.placeholder);
        assert_eq!(out.path, root.join("dist/THIRD_PARTY_LICENSES.txt"));
        let text = std::fs::read_to_string(&out.path).expect("read report");
        assert!(text.contains(&format!("\n\n[error] read config: {}", root.join("distkit.toml"))));
    }

    #[test]
    fn unwritable_output_is_fatal() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("blocker"), "file, not a directory");
        let overrides = Overrides {
            output: Some("blocker/licenses.txt".into()),
            ..Overrides::default()
        };

        let err = run_licenses(LicensesInput {
            repo_root: &root,
            config_text: Ok(NO_CARGO.to_string()),
            overrides,
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("blocker"));
    }
}
