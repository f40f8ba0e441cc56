use crate::{ReportSection, render_table};

const TITLE: &str = "THIRD_PARTY_LICENSES";

const PREAMBLE: [&str; 2] = [
    "This file lists the third-party dependencies bundled into distributed binaries and their licenses, for compliance.",
    "See each project's repository or release page for full license texts and authoritative details.",
];

const PLACEHOLDER_NOTE: &str = "Generating the third-party license list failed; this placeholder was written so packaging can continue.";

/// Compose the license notice from per-ecosystem sections.
///
/// The result never has trailing whitespace beyond a single final newline.
pub fn compose_report(sections: &[ReportSection]) -> String {
    let mut lines: Vec<String> = vec![TITLE.to_string(), String::new()];
    lines.extend(PREAMBLE.iter().map(|l| l.to_string()));
    lines.push(String::new());

    for section in sections {
        lines.push(section.title().to_string());
        lines.push(render_table(&section.rows()));
        if let Some(reason) = &section.warning {
            lines.push(String::new());
            lines.push(format!(
                "[warn] {} dependency inventory failed: {reason}",
                section.ecosystem
            ));
        }
        lines.push(String::new());
    }

    let mut out = lines.join("\n").trim_end().to_string();
    out.push('\n');
    out
}

/// Stand-in notice written when the report could not be composed.
pub fn placeholder_report(message: &str) -> String {
    format!("{TITLE}\n\n{PLACEHOLDER_NOTE}\n\n[error] {message}\n")
}
