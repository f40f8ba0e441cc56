use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use distkit_glyph::{RgbaImage, downscale};
use distkit_types::sizes::iconset_entries;
use image::ImageFormat;

pub(crate) fn save_png(img: &RgbaImage, path: &Utf8Path) -> anyhow::Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("write png: {path}"))
}

/// Write every iconset entry of `base` into `dir`.
///
/// Any pre-existing directory is removed first so stale sizes never leak into
/// the packaged container. Returns the written paths in write order.
pub fn build_icon_set(base: &RgbaImage, dir: &Utf8Path) -> anyhow::Result<Vec<Utf8PathBuf>> {
    if dir.exists() {
        std::fs::remove_dir_all(dir).with_context(|| format!("remove stale iconset: {dir}"))?;
    }
    std::fs::create_dir_all(dir).with_context(|| format!("create iconset: {dir}"))?;

    let mut written = Vec::new();
    for entry in iconset_entries() {
        let path = dir.join(entry.file_name());
        save_png(&downscale(base, entry.pixels()), &path)?;
        written.push(path);
    }

    tracing::debug!(%dir, files = written.len(), "wrote iconset");
    Ok(written)
}
