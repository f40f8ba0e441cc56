//! Shared test utilities for the distkit workspace.
//!
//! This crate exists because both library crates and the CLI integration
//! tests build the same on-disk fixtures (cargo metadata captures, Node
//! project trees), and `#[cfg(test)]` helpers cannot be shared across crates.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// UTF-8 view of a temporary directory.
pub fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
}

/// Write `contents` to `path`, creating parent directories.
pub fn write_file(path: &Utf8Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent");
    }
    std::fs::write(path, contents).expect("write file");
}

/// A captured `cargo metadata --format-version=1` document.
///
/// Contains one workspace member (`app`) and five third-party packages,
/// including two versions of `syn`, a mixed-case name, and a package with no
/// repository or license.
pub fn cargo_metadata_value() -> Value {
    json!({
        "packages": [
            {
                "id": "path+file:///work/app#0.3.0",
                "name": "app",
                "version": "0.3.0",
                "license": null,
                "repository": null,
                "source": null
            },
            {
                "id": "registry+https://github.com/rust-lang/crates.io-index#syn@2.0.87",
                "name": "syn",
                "version": "2.0.87",
                "license": "MIT OR Apache-2.0",
                "repository": "https://github.com/dtolnay/syn",
                "source": "registry+https://github.com/rust-lang/crates.io-index"
            },
            {
                "id": "registry+https://github.com/rust-lang/crates.io-index#serde@1.0.228",
                "name": "serde",
                "version": "1.0.228",
                "license": "MIT OR Apache-2.0",
                "repository": "https://github.com/serde-rs/serde",
                "source": "registry+https://github.com/rust-lang/crates.io-index"
            },
            {
                "id": "registry+https://github.com/rust-lang/crates.io-index#Inflector@0.11.4",
                "name": "Inflector",
                "version": "0.11.4",
                "license": null,
                "repository": null,
                "source": "registry+https://github.com/rust-lang/crates.io-index"
            },
            {
                "id": "registry+https://github.com/rust-lang/crates.io-index#syn@1.0.109",
                "name": "syn",
                "version": "1.0.109",
                "license": "MIT OR Apache-2.0",
                "repository": "https://github.com/dtolnay/syn",
                "source": "registry+https://github.com/rust-lang/crates.io-index"
            },
            {
                "id": "registry+https://github.com/rust-lang/crates.io-index#anyhow@1.0.102",
                "name": "anyhow",
                "version": "1.0.102",
                "license": "MIT OR Apache-2.0",
                "repository": "https://github.com/dtolnay/anyhow",
                "source": "registry+https://github.com/rust-lang/crates.io-index"
            }
        ],
        "workspace_members": ["path+file:///work/app#0.3.0"],
        "version": 1
    })
}

/// [`cargo_metadata_value`] serialized as the tool prints it.
pub fn cargo_metadata_json() -> String {
    serde_json::to_string(&cargo_metadata_value()).expect("serialize metadata")
}

/// Builder for a Node project tree: `package.json` plus installed packages.
pub struct NodeProject {
    root: Utf8PathBuf,
}

impl NodeProject {
    pub fn new(root: &Utf8Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Write the project's `package.json`.
    pub fn manifest(&self, manifest: Value) -> &Self {
        write_file(&self.root.join("package.json"), &manifest.to_string());
        self
    }

    /// Write `node_modules/<name>/package.json`.
    pub fn installed(&self, name: &str, metadata: Value) -> &Self {
        let path = self
            .root
            .join("node_modules")
            .join(name)
            .join("package.json");
        write_file(&path, &metadata.to_string());
        self
    }
}
