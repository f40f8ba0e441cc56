use distkit_types::{DependencyRecord, Ecosystem};

/// One ecosystem's block in the license notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportSection {
    pub ecosystem: Ecosystem,
    pub records: Vec<DependencyRecord>,
    /// Why the inventory is missing, if the source failed.
    pub warning: Option<String>,
}

impl ReportSection {
    pub fn new(ecosystem: Ecosystem, records: Vec<DependencyRecord>) -> Self {
        Self {
            ecosystem,
            records,
            warning: None,
        }
    }

    pub fn unavailable(ecosystem: Ecosystem, reason: impl Into<String>) -> Self {
        Self {
            ecosystem,
            records: Vec::new(),
            warning: Some(reason.into()),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.ecosystem {
            Ecosystem::Rust => "=== Rust (Cargo) ===",
            Ecosystem::Node => "=== Node (TS/Bun) - direct dependencies ===",
        }
    }

    pub fn header(&self) -> [&'static str; 4] {
        let origin = match self.ecosystem {
            Ecosystem::Rust => "Repository/Source",
            Ecosystem::Node => "Repository",
        };
        ["Name", "Version", "License", origin]
    }

    /// Header row followed by one row per record.
    pub fn rows(&self) -> Vec<Vec<String>> {
        let header = self.header().iter().map(|c| c.to_string()).collect();
        std::iter::once(header)
            .chain(self.records.iter().map(DependencyRecord::to_row))
            .collect()
    }
}
