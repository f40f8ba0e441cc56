use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Package ecosystem a dependency record was collected from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Rust,
    Node,
}

impl Ecosystem {
    /// Human-readable name used in warnings.
    pub fn label(self) -> &'static str {
        match self {
            Ecosystem::Rust => "Rust",
            Ecosystem::Node => "Node",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One third-party package as reported by its ecosystem's metadata tool.
///
/// `source` is only populated for Rust packages (registry or git source of a
/// crate); Node packages may additionally lack a version when the package is
/// declared but not installed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl DependencyRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Repository URL, falling back to the package source.
    pub fn origin(&self) -> Option<&str> {
        self.repository.as_deref().or(self.source.as_deref())
    }

    /// The four report cells: name, version, license, repository/source.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.version.clone().unwrap_or_default(),
            self.license.clone().unwrap_or_default(),
            self.origin().unwrap_or_default().to_string(),
        ]
    }
}

/// Case-insensitive name order, ties broken by version.
pub fn compare_records(a: &DependencyRecord, b: &DependencyRecord) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.version.cmp(&b.version))
}

/// Sort records into report order.
pub fn sort_records(records: &mut [DependencyRecord]) {
    records.sort_by(compare_records);
}
