//! Rendering for the third-party license notice.

#![forbid(unsafe_code)]

mod model;
mod report;
mod table;

pub use model::ReportSection;
pub use report::{compose_report, placeholder_report};
pub use table::render_table;
