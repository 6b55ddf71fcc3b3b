use crate::font::handle::FontHandle;
use crate::foundation::core::Rgba8;
use crate::render::{canvas::Canvas, composite::over_straight};

/// Coverage at or above this value counts as ink; anything below is left untouched.
pub const INK_THRESHOLD: u8 = 128;

/// Draw one line of `text` with its line box's top-left corner at `(x, y)`.
///
/// Glyph coverage is thresholded into a binary mask and `color` is composited over the
/// canvas wherever the mask is set. Pixels outside the canvas are clipped.
pub fn draw_text(canvas: &mut Canvas, font: &FontHandle, text: &str, x: i32, y: i32, color: Rgba8) {
    let baseline = y + font.ascent();
    let (cw, ch) = (canvas.width() as i32, canvas.height() as i32);
    let mut pen = x as f32;

    for c in text.chars() {
        let glyph = font.rasterize(c);
        let gx = pen.round() as i32 + glyph.left;
        let gy = baseline + glyph.top;
        let gw = glyph.width as usize;

        for (i, &cov) in glyph.coverage.iter().enumerate() {
            if cov < INK_THRESHOLD {
                continue;
            }
            let px = gx + (i % gw) as i32;
            let py = gy + (i / gw) as i32;
            if px < 0 || py < 0 || px >= cw || py >= ch {
                continue;
            }
            let (px, py) = (px as u32, py as u32);
            let dst = canvas.pixel(px, py);
            canvas.set_pixel(px, py, over_straight(dst, color));
        }
        pen += glyph.advance;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/draw.rs"]
mod tests;
