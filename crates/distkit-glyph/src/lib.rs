//! Pure glyph rasterization (no IO).
//!
//! Input: an edge length and a palette.
//! Output: an in-memory RGBA raster, plus helpers to derive smaller sizes and
//! fingerprint rasters for determinism checks.

#![forbid(unsafe_code)]

mod canvas;
mod fingerprint;
mod glyph;

pub use fingerprint::fingerprint;
pub use glyph::{TrayIcon, downscale, render_glyph, render_tray_icon};

pub use image::RgbaImage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlyphError {
    #[error("glyph size must be at least 1 pixel")]
    ZeroSize,
}
