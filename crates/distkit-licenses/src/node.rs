//! Direct Node dependencies from `package.json` and `node_modules`.

use crate::{DependencySource, SourceError};
use camino::{Utf8Path, Utf8PathBuf};
use distkit_types::{DependencyRecord, Ecosystem, sort_records};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageManifest {
    #[serde(default)]
    dependencies: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    dev_dependencies: Option<BTreeMap<String, Value>>,
}

fn read_json(path: &Utf8Path) -> Result<Value, SourceError> {
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SourceError::Parse {
        what: path.to_string(),
        source,
    })
}

/// A `repository` field is either a URL string or `{ "url": ... }`.
pub fn normalize_repository(repo: &Value) -> Option<String> {
    match repo {
        Value::String(url) => Some(url.clone()),
        Value::Object(map) => map.get("url").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

fn string_field(pkg: &Value, key: &str) -> Option<String> {
    pkg.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Record for one installed package; an absent install yields only the name.
fn installed_record(root: &Utf8Path, name: &str) -> Result<DependencyRecord, SourceError> {
    let path = root.join("node_modules").join(name).join("package.json");
    if !path.is_file() {
        tracing::debug!(%name, %path, "package not installed");
        return Ok(DependencyRecord::named(name));
    }

    let pkg = read_json(&path)?;
    Ok(DependencyRecord {
        name: name.to_string(),
        version: string_field(&pkg, "version"),
        license: string_field(&pkg, "license"),
        repository: pkg.get("repository").and_then(normalize_repository),
        source: None,
    })
}

/// Reads the project's `package.json` and each dependency's installed metadata.
#[derive(Clone, Debug)]
pub struct NodePackages {
    pub root: Utf8PathBuf,
}

impl NodePackages {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Direct dependency names: `dependencies` merged with `devDependencies`.
    fn direct_dependencies(&self) -> Result<Vec<String>, SourceError> {
        let path = self.root.join("package.json");
        let manifest: PackageManifest =
            serde_json::from_value(read_json(&path)?).map_err(|source| SourceError::Parse {
                what: path.to_string(),
                source,
            })?;

        let mut names = manifest.dependencies.unwrap_or_default();
        names.extend(manifest.dev_dependencies.unwrap_or_default());
        Ok(names.into_keys().collect())
    }
}

impl DependencySource for NodePackages {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Node
    }

    fn collect(&self) -> Result<Vec<DependencyRecord>, SourceError> {
        let mut records = self
            .direct_dependencies()?
            .iter()
            .map(|name| installed_record(&self.root, name))
            .collect::<Result<Vec<_>, _>>()?;
        sort_records(&mut records);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use distkit_test_util::{NodeProject, utf8_root};
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn uninstalled_dependency_is_a_bare_row() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        NodeProject::new(&root).manifest(json!({"dependencies": {"left-pad": "1.0.0"}}));

        let records = NodePackages::new(&root).collect().expect("collect");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].to_row(), vec!["left-pad", "", "", ""]);
    }

    #[test]
    fn merges_dev_dependencies_and_reads_installed_metadata() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        NodeProject::new(&root)
            .manifest(json!({
                "dependencies": {"socket.io-client": "^4.7.0", "React": "^18"},
                "devDependencies": {"@types/node": "^20", "typescript": "^5"}
            }))
            .installed(
                "socket.io-client",
                json!({"version": "4.7.5", "license": "MIT", "repository": {"type": "git", "url": "git+https://github.com/socketio/socket.io-client.git"}}),
            )
            .installed(
                "@types/node",
                json!({"version": "20.11.0", "license": "MIT", "repository": "https://github.com/DefinitelyTyped/DefinitelyTyped"}),
            )
            .installed(
                "typescript",
                json!({"version": "5.4.2", "license": {"type": "Apache-2.0"}}),
            );

        let records = NodePackages::new(&root).collect().expect("collect");
        let rows: Vec<Vec<String>> = records.iter().map(DependencyRecord::to_row).collect();
        assert_eq!(
            rows,
            vec![
                vec![
                    "@types/node",
                    "20.11.0",
                    "MIT",
                    "https://github.com/DefinitelyTyped/DefinitelyTyped"
                ],
                vec!["React", "", "", ""],
                vec![
                    "socket.io-client",
                    "4.7.5",
                    "MIT",
                    "git+https://github.com/socketio/socket.io-client.git"
                ],
                // Non-string license objects are dropped.
                vec!["typescript", "5.4.2", "", ""],
            ]
        );
    }

    #[test]
    fn missing_manifest_is_a_read_error() {
        let tmp = TempDir::new().expect("temp dir");
        let err = NodePackages::new(utf8_root(&tmp)).collect().unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }), "{err:?}");
        assert!(err.to_string().contains("package.json"));
    }

    #[test]
    fn malformed_installed_metadata_fails_the_source() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        NodeProject::new(&root).manifest(json!({"dependencies": {"broken": "1"}}));
        let pkg_dir = root.join("node_modules").join("broken");
        std::fs::create_dir_all(&pkg_dir).expect("create dir");
        std::fs::write(pkg_dir.join("package.json"), "{").expect("write");

        let err = NodePackages::new(&root).collect().unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn manifest_without_dependency_tables_is_empty() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        NodeProject::new(&root).manifest(json!({"name": "f11esync", "dependencies": null}));

        assert!(NodePackages::new(&root).collect().expect("collect").is_empty());
    }

    #[test]
    fn repository_normalization() {
        assert_eq!(
            normalize_repository(&json!("https://x.test/a")),
            Some("https://x.test/a".to_string())
        );
        assert_eq!(
            normalize_repository(&json!({"url": "https://x.test/b"})),
            Some("https://x.test/b".to_string())
        );
        assert_eq!(normalize_repository(&json!({"type": "git"})), None);
        assert_eq!(normalize_repository(&json!(7)), None);
    }
}
