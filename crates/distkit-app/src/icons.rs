//! The `icons` use case: render the glyph and write every platform asset.

use crate::config::rooted;
use anyhow::Context;
use camino::Utf8Path;
use distkit_icons::{IconOutputs, IconPackager, Iconutil, generate_icons};
use distkit_settings::IconSettings;

/// Input for the icons use case.
#[derive(Clone, Debug)]
pub struct IconsInput<'a> {
    pub repo_root: &'a Utf8Path,
    pub settings: &'a IconSettings,
}

/// Generate the icon assets with the configured packager program.
pub fn run_icons(input: IconsInput<'_>) -> anyhow::Result<IconOutputs> {
    let packager = Iconutil::new(&input.settings.packager);
    run_icons_with(input, &packager)
}

fn run_icons_with(input: IconsInput<'_>, packager: &dyn IconPackager) -> anyhow::Result<IconOutputs> {
    let assets_dir = rooted(input.repo_root, &input.settings.assets_dir);
    tracing::debug!(%assets_dir, packager = %input.settings.packager, "generating icons");
    generate_icons(&assets_dir, &input.settings.palette, packager)
        .with_context(|| format!("generate icons in {assets_dir}"))
}
