//! Icon asset adapters: write the iconset, package ICNS, encode ICO, and
//! emit tray templates.
//!
//! This crate does filesystem IO and spawns the ICNS packager. Rasters come
//! from `distkit-glyph`; nothing here draws.

#![forbid(unsafe_code)]

mod ico;
mod iconset;
mod packager;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use distkit_glyph::{render_glyph, render_tray_icon};
use distkit_types::Palette;
use distkit_types::sizes::{
    BASE_SIZE, ICON_ICNS, ICON_ICO, ICON_PNG, ICONSET_DIR, TRAY_PNG, TRAY_PNG_2X, TRAY_SIZE,
};

pub use ico::build_multi_size_container;
pub use iconset::build_icon_set;
pub use packager::{IconPackager, Iconutil, PackagerError};

/// Paths of every artifact a successful run leaves in the assets directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconOutputs {
    pub icon_png: Utf8PathBuf,
    pub icns: Utf8PathBuf,
    pub ico: Utf8PathBuf,
    pub tray_png: Utf8PathBuf,
    pub tray_png_2x: Utf8PathBuf,
}

impl IconOutputs {
    fn under(dir: &Utf8Path) -> Self {
        Self {
            icon_png: dir.join(ICON_PNG),
            icns: dir.join(ICON_ICNS),
            ico: dir.join(ICON_ICO),
            tray_png: dir.join(TRAY_PNG),
            tray_png_2x: dir.join(TRAY_PNG_2X),
        }
    }

    /// Paths in the order they are reported to the user.
    pub fn paths(&self) -> [&Utf8Path; 5] {
        [
            &self.icon_png,
            &self.icns,
            &self.ico,
            &self.tray_png,
            &self.tray_png_2x,
        ]
    }
}

/// Removes a directory when dropped, ignoring errors.
struct RemoveDirOnDrop(Utf8PathBuf);

impl Drop for RemoveDirOnDrop {
    fn drop(&mut self) {
        if self.0.exists()
            && let Err(err) = std::fs::remove_dir_all(&self.0)
        {
            tracing::debug!(dir = %self.0, %err, "could not remove temporary directory");
        }
    }
}

/// Render and write every icon artifact into `assets_dir`.
///
/// All outputs are first written to a private staging directory inside
/// `assets_dir` and moved into place only after every step succeeded, so a
/// failed run leaves previously generated assets untouched. The iconset
/// directory and the staging directory are removed on success and failure.
pub fn generate_icons(
    assets_dir: &Utf8Path,
    palette: &Palette,
    packager: &dyn IconPackager,
) -> anyhow::Result<IconOutputs> {
    std::fs::create_dir_all(assets_dir)
        .with_context(|| format!("create assets directory: {assets_dir}"))?;

    let staging = tempfile::Builder::new()
        .prefix(".distkit-icons-")
        .tempdir_in(assets_dir)
        .with_context(|| format!("create staging directory in {assets_dir}"))?;
    let stage_dir = Utf8Path::from_path(staging.path())
        .context("staging directory path is not UTF-8")?
        .to_path_buf();
    let staged = IconOutputs::under(&stage_dir);

    let base = render_glyph(BASE_SIZE, palette).context("render base glyph")?;
    iconset::save_png(&base, &staged.icon_png)?;

    let iconset_dir = assets_dir.join(ICONSET_DIR);
    let _iconset_guard = RemoveDirOnDrop(iconset_dir.clone());
    build_icon_set(&base, &iconset_dir).context("build iconset")?;
    packager
        .package(&iconset_dir, &staged.icns)
        .context("package icns")?;

    build_multi_size_container(&base, &staged.ico).context("build ico")?;

    let tray = render_tray_icon(TRAY_SIZE).context("render tray icon")?;
    iconset::save_png(&tray.x2, &staged.tray_png_2x)?;
    iconset::save_png(&tray.x1, &staged.tray_png)?;

    let outputs = IconOutputs::under(assets_dir);
    for (from, to) in staged.paths().into_iter().zip(outputs.paths()) {
        std::fs::rename(from, to).with_context(|| format!("move {from} to {to}"))?;
        tracing::info!(path = %to, "wrote icon asset");
    }

    Ok(outputs)
}
