//! Stable DTOs and constants shared across the distkit workspace.
//!
//! This crate is intentionally boring:
//! - RGBA colors and the glyph palette
//! - dependency records for the license report
//! - fixed icon size tables and output file names

#![forbid(unsafe_code)]

pub mod color;
pub mod deps;
pub mod sizes;

pub use color::{ColorParseError, Palette, Rgba};
pub use deps::{DependencyRecord, Ecosystem, compare_records, sort_records};
