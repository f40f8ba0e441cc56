//! Dependency metadata sources for the third-party license notice.
//!
//! Each ecosystem is read through a [`DependencySource`]. Sources spawn the
//! host package tooling or read its files and may fail;
//! [`collect_dependency_set`] is the failure boundary that turns any source
//! error into an "unavailable" marker so the report can still be written.

#![forbid(unsafe_code)]

mod cargo;
mod error;
mod node;

use distkit_types::{DependencyRecord, Ecosystem};
use globset::{Glob, GlobSet, GlobSetBuilder};

pub use cargo::{CargoMetadataCommand, CargoMetadataFile, parse_cargo_metadata};
pub use error::SourceError;
pub use node::{NodePackages, normalize_repository};

/// One ecosystem's metadata tool.
pub trait DependencySource {
    fn ecosystem(&self) -> Ecosystem;

    /// Third-party records in report order.
    fn collect(&self) -> Result<Vec<DependencyRecord>, SourceError>;
}

/// Package-name globs removed from every ecosystem's records.
#[derive(Clone, Debug)]
pub struct Exclusions {
    set: GlobSet,
}

impl Exclusions {
    pub fn new(patterns: &[String]) -> Result<Self, globset::Error> {
        let mut builder = GlobSetBuilder::new();
        for p in patterns {
            builder.add(Glob::new(p)?);
        }
        Ok(Self {
            set: builder.build()?,
        })
    }

    pub fn none() -> Self {
        Self {
            set: GlobSet::empty(),
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.set.is_match(name)
    }
}

impl Default for Exclusions {
    fn default() -> Self {
        Self::none()
    }
}

/// Records collected from one ecosystem, or why they are unavailable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DependencySet {
    pub ecosystem: Ecosystem,
    pub records: Vec<DependencyRecord>,
    /// Set when the source failed; `records` is then empty.
    pub unavailable: Option<String>,
}

/// Collect one ecosystem's records. Never fails: source errors are logged and
/// recorded as an unavailable set.
pub fn collect_dependency_set(
    source: &dyn DependencySource,
    exclusions: &Exclusions,
) -> DependencySet {
    let ecosystem = source.ecosystem();
    match source.collect() {
        Ok(mut records) => {
            let before = records.len();
            records.retain(|r| !exclusions.is_excluded(&r.name));
            tracing::debug!(
                %ecosystem,
                collected = before,
                excluded = before - records.len(),
                "collected dependency set"
            );
            DependencySet {
                ecosystem,
                records,
                unavailable: None,
            }
        }
        Err(err) => {
            let reason = err.to_string();
            tracing::warn!(%ecosystem, error = %reason, "dependency inventory unavailable");
            DependencySet {
                ecosystem,
                records: Vec::new(),
                unavailable: Some(reason),
            }
        }
    }
}
