//! Shape fills on top of `imageproc`, with inclusive corner coordinates.

use imageproc::drawing::{Canvas, draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

/// Inclusive pixel bounds: both corners are painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    /// Box anchored at `(x, y)` spanning `w` and `h` extra pixels.
    pub fn at(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x + w,
            y1: y + h,
        }
    }
}

pub(crate) fn fill_rect<C: Canvas>(canvas: &mut C, b: Bounds, color: C::Pixel) {
    if b.x1 < b.x0 || b.y1 < b.y0 {
        return;
    }
    let rect = Rect::at(b.x0, b.y0).of_size((b.x1 - b.x0 + 1) as u32, (b.y1 - b.y0 + 1) as u32);
    draw_filled_rect_mut(canvas, rect, color);
}

/// Rectangle with quarter-circle corners; the radius is clamped to half the
/// shorter side.
pub(crate) fn fill_rounded_rect<C: Canvas>(
    canvas: &mut C,
    b: Bounds,
    radius: i32,
    color: C::Pixel,
) {
    let r = radius
        .min((b.x1 - b.x0) / 2)
        .min((b.y1 - b.y0) / 2)
        .max(0);

    fill_rect(
        canvas,
        Bounds {
            x0: b.x0 + r,
            x1: b.x1 - r,
            ..b
        },
        color,
    );
    fill_rect(
        canvas,
        Bounds {
            y0: b.y0 + r,
            y1: b.y1 - r,
            ..b
        },
        color,
    );

    if r == 0 {
        return;
    }
    for center in [
        (b.x0 + r, b.y0 + r),
        (b.x1 - r, b.y0 + r),
        (b.x0 + r, b.y1 - r),
        (b.x1 - r, b.y1 - r),
    ] {
        draw_filled_circle_mut(canvas, center, r, color);
    }
}

pub(crate) fn fill_disc<C: Canvas>(canvas: &mut C, cx: i32, cy: i32, r: i32, color: C::Pixel) {
    draw_filled_circle_mut(canvas, (cx, cy), r.max(0), color);
}
