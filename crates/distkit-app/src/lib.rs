//! Use case orchestration for distkit.
//!
//! This crate provides the application layer: use cases that coordinate the
//! settings, icon, license-source, and render layers. The CLI crate depends on
//! this and only handles argument parsing, logging setup, and exit codes.

#![forbid(unsafe_code)]

mod config;
mod icons;
mod licenses;

pub use config::{explain_config, load_config, read_config_text, rooted, write_text_file};
pub use icons::{IconsInput, run_icons};
pub use licenses::{LicensesInput, LicensesOutput, generate_report, run_licenses};
