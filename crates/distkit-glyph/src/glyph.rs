use crate::GlyphError;
use crate::canvas::{Bounds, fill_disc, fill_rect, fill_rounded_rect};
use distkit_types::{Palette, Rgba};
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, Pixel, RgbaImage};

/// Peak alpha of the top highlight.
const HIGHLIGHT_ALPHA: f64 = 40.0;

/// `f` of the edge length `s`, rounded half to even.
fn frac(s: f64, f: f64) -> i32 {
    (s * f).round_ties_even() as i32
}

fn px(c: Rgba) -> image::Rgba<u8> {
    image::Rgba(c.to_array())
}

/// Draw the brand glyph at `size` x `size`.
///
/// Layers, bottom to top: rounded tile in `primary`, a white top-light
/// gradient masked to the tile, the "F11" wordmark in `foreground`, and the
/// accent dot. Pure and deterministic: equal inputs give equal pixels.
pub fn render_glyph(size: u32, palette: &Palette) -> Result<RgbaImage, GlyphError> {
    if size == 0 {
        return Err(GlyphError::ZeroSize);
    }

    let s = size as f64;
    let edge = size as i32;
    let mut img = RgbaImage::from_pixel(size, size, px(Rgba::TRANSPARENT));

    let radius = frac(s, 0.22);
    let inset = frac(s, 0.06);
    let tile = Bounds {
        x0: inset,
        y0: inset,
        x1: edge - inset,
        y1: edge - inset,
    };

    fill_rounded_rect(&mut img, tile, radius, px(palette.primary));

    // A fully transparent tile has no shape to light.
    if palette.primary.a > 0 {
        let mut mask = GrayImage::new(size, size);
        fill_rounded_rect(&mut mask, tile, radius, Luma([255]));
        apply_highlight(&mut img, &mask);
    }

    draw_wordmark(&mut img, s, px(palette.foreground));

    let dot_r = frac(s, 0.055);
    fill_disc(
        &mut img,
        frac(s, 0.78),
        frac(s, 0.77),
        dot_r,
        px(palette.accent),
    );

    Ok(img)
}

/// Composite a white vertical fade, strongest at the top row, through `mask`.
fn apply_highlight(img: &mut RgbaImage, mask: &GrayImage) {
    let s = img.height() as f64;
    for y in 0..img.height() {
        let t = (1.0 - (y as f64 / (s * 0.95))).max(0.0);
        let alpha = (HIGHLIGHT_ALPHA * t * t) as u32;
        if alpha == 0 {
            continue;
        }
        for x in 0..img.width() {
            let m = mask.get_pixel(x, y).0[0] as u32;
            let a = (alpha * m + 127) / 255;
            if a == 0 {
                continue;
            }
            img.get_pixel_mut(x, y)
                .blend(&image::Rgba([0xFF, 0xFF, 0xFF, a as u8]));
        }
    }
}

/// "F" plus two "1" bars, all built from axis-aligned rectangles.
fn draw_wordmark(img: &mut RgbaImage, s: f64, fg: image::Rgba<u8>) {
    let stroke = frac(s, 0.10).max(2);
    let pad = frac(s, 0.22);
    let top_y = pad;
    let mid_y = pad + frac(s, 0.18);
    let base_y = pad + frac(s, 0.52);
    let left_x = pad;
    let bar_h = base_y - top_y + stroke;

    fill_rect(img, Bounds::at(left_x, top_y, stroke, bar_h), fg);
    fill_rect(img, Bounds::at(left_x, top_y, frac(s, 0.44), stroke), fg);
    fill_rect(img, Bounds::at(left_x, mid_y, frac(s, 0.34), stroke), fg);

    for x in [frac(s, 0.62), frac(s, 0.76)] {
        fill_rect(img, Bounds::at(x, top_y, stroke, bar_h), fg);
    }
}

/// High-quality (Lanczos3) resample to `size` x `size`.
pub fn downscale(img: &RgbaImage, size: u32) -> RgbaImage {
    if img.width() == size && img.height() == size {
        return img.clone();
    }
    imageops::resize(img, size, size, FilterType::Lanczos3)
}

/// Monochrome template icon at two pixel densities.
#[derive(Clone, Debug)]
pub struct TrayIcon {
    /// `size` x `size`.
    pub x1: RgbaImage,
    /// `2 * size` x `2 * size`.
    pub x2: RgbaImage,
}

/// Draw the tray template at 2x natively and derive 1x by downscaling it.
pub fn render_tray_icon(size: u32) -> Result<TrayIcon, GlyphError> {
    let x2 = render_glyph(size.saturating_mul(2), &Palette::tray())?;
    let x1 = downscale(&x2, size);
    Ok(TrayIcon { x1, x2 })
}
