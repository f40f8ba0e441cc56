//! Rust dependencies from `cargo metadata --format-version=1`.

use crate::{DependencySource, SourceError};
use camino::{Utf8Path, Utf8PathBuf};
use distkit_types::{DependencyRecord, Ecosystem, sort_records};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::process::Command;

#[derive(Debug, Default, Deserialize)]
struct CargoMetadata {
    #[serde(default)]
    packages: Option<Vec<CargoPackage>>,
    #[serde(default)]
    workspace_members: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct CargoPackage {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    license: Option<String>,
    #[serde(default)]
    repository: Option<String>,
    #[serde(default)]
    source: Option<String>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

/// Parse cargo metadata JSON into third-party records.
///
/// Workspace members are first-party and dropped. Blank output (a workspace
/// with nothing to report) yields no records.
pub fn parse_cargo_metadata(json: &str) -> Result<Vec<DependencyRecord>, SourceError> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }

    let meta: CargoMetadata = serde_json::from_str(json).map_err(|source| SourceError::Parse {
        what: "cargo metadata".to_string(),
        source,
    })?;

    let members: BTreeSet<String> = meta.workspace_members.unwrap_or_default().into_iter().collect();

    let mut records: Vec<DependencyRecord> = meta
        .packages
        .unwrap_or_default()
        .into_iter()
        .filter(|p| p.id.as_ref().is_none_or(|id| !members.contains(id)))
        .map(|p| DependencyRecord {
            name: p.name.unwrap_or_default(),
            version: non_empty(p.version),
            license: non_empty(p.license),
            repository: non_empty(p.repository),
            source: non_empty(p.source),
        })
        .collect();

    sort_records(&mut records);
    Ok(records)
}

/// Runs `cargo metadata` in a manifest directory.
#[derive(Clone, Debug)]
pub struct CargoMetadataCommand {
    pub cargo: String,
    pub manifest_dir: Utf8PathBuf,
}

impl CargoMetadataCommand {
    pub fn new(cargo: impl Into<String>, manifest_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            cargo: cargo.into(),
            manifest_dir: manifest_dir.into(),
        }
    }

    fn command_line(&self) -> String {
        format!("{} metadata --format-version=1", self.cargo)
    }
}

impl DependencySource for CargoMetadataCommand {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Rust
    }

    fn collect(&self) -> Result<Vec<DependencyRecord>, SourceError> {
        tracing::debug!(dir = %self.manifest_dir, cargo = %self.cargo, "running cargo metadata");

        let output = Command::new(&self.cargo)
            .current_dir(&self.manifest_dir)
            .args(["metadata", "--format-version=1"])
            .output()
            .map_err(|source| SourceError::Spawn {
                command: self.command_line(),
                source,
            })?;

        if !output.status.success() {
            return Err(SourceError::ToolFailed {
                command: self.command_line(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_cargo_metadata(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Reads previously captured `cargo metadata` output from a file.
#[derive(Clone, Debug)]
pub struct CargoMetadataFile {
    pub path: Utf8PathBuf,
}

impl CargoMetadataFile {
    pub fn new(path: impl AsRef<Utf8Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DependencySource for CargoMetadataFile {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Rust
    }

    fn collect(&self) -> Result<Vec<DependencyRecord>, SourceError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        parse_cargo_metadata(&text)
    }
}
