use anyhow::Context;
use camino::Utf8Path;
use distkit_glyph::{RgbaImage, downscale};
use distkit_types::sizes::ICO_SIZES;
use image::ExtendedColorType;
use image::codecs::ico::{IcoEncoder, IcoFrame};
use std::io::BufWriter;

/// Write a multi-resolution `.ico` with one PNG-compressed frame per
/// [`ICO_SIZES`] entry, each resampled from `base`.
pub fn build_multi_size_container(base: &RgbaImage, out: &Utf8Path) -> anyhow::Result<()> {
    let frames = ICO_SIZES
        .iter()
        .map(|&size| {
            let frame = downscale(base, size);
            IcoFrame::as_png(frame.as_raw(), size, size, ExtendedColorType::Rgba8)
                .with_context(|| format!("encode {size}x{size} ico frame"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let file = std::fs::File::create(out).with_context(|| format!("create ico: {out}"))?;
    IcoEncoder::new(BufWriter::new(file))
        .encode_images(&frames)
        .with_context(|| format!("write ico: {out}"))?;

    tracing::debug!(%out, frames = frames.len(), "wrote ico");
    Ok(())
}
