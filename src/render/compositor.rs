use crate::foundation::{
    core::{BLACK, Rgba8, WHITE},
    error::TextFxResult,
    math::content_color,
};
use crate::layout::engine::LayoutResult;
use crate::render::{
    blur::gaussian_blur,
    canvas::Canvas,
    composite::composite_over,
    draw::draw_text,
};

/// Offset of the drop shadow in the shadowed style.
pub const SHADOW_OFFSET: i32 = 2;
/// Translucent cyan used for the glow layers.
pub const GLOW_COLOR: Rgba8 = [0, 255, 255, 50];
/// Opaque cyan drawn over the glow.
pub const NEON_COLOR: Rgba8 = [0, 255, 255, 255];
/// Blur applied to successive glow layers, strongest first.
pub const GLOW_BLUR_SIGMAS: [f32; 3] = [2.0, 1.0, 0.0];

/// How wrapped lines are put onto a fresh canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// White text, left-aligned, on a transparent background.
    Plain,
    /// Centered white text with a black drop shadow on an opaque background.
    Shadowed {
        /// Background RGB.
        background: [u8; 3],
    },
    /// Cyan text over three blurred translucent copies of itself.
    Glow,
}

impl TextStyle {
    /// Shadowed style whose background is derived from the content hash of `text`.
    pub fn shadowed_for(text: &str) -> Self {
        Self::Shadowed {
            background: content_color(text),
        }
    }
}

/// Draw every line of `layout` onto a new canvas of the layout's size.
#[tracing::instrument(skip(layout), fields(lines = layout.lines.len()))]
pub fn compose(layout: &LayoutResult, style: TextStyle) -> TextFxResult<Canvas> {
    let (w, h) = (layout.canvas_width, layout.canvas_height);
    match style {
        TextStyle::Plain => {
            let mut canvas = Canvas::new(w, h);
            draw_lines(&mut canvas, layout, 0, 0, WHITE);
            Ok(canvas)
        }
        TextStyle::Shadowed { background } => {
            let [r, g, b] = background;
            let mut canvas = Canvas::filled(w, h, [r, g, b, 255]);
            let widths = layout.line_widths();
            for ((idx, line), line_width) in layout.lines.iter().enumerate().zip(widths) {
                let x = (w as i32 - line_width as i32) / 2;
                let y = layout.line_top(idx);
                draw_text(
                    &mut canvas,
                    &layout.font,
                    line,
                    x + SHADOW_OFFSET,
                    y + SHADOW_OFFSET,
                    BLACK,
                );
                draw_text(&mut canvas, &layout.font, line, x, y, WHITE);
            }
            Ok(canvas)
        }
        TextStyle::Glow => {
            let mut canvas = Canvas::new(w, h);
            for (idx, line) in layout.lines.iter().enumerate() {
                let y = layout.line_top(idx);
                for sigma in GLOW_BLUR_SIGMAS {
                    let mut glow = Canvas::new(w, h);
                    draw_text(&mut glow, &layout.font, line, 0, y, GLOW_COLOR);
                    let glow = gaussian_blur(&glow, sigma)?;
                    composite_over(&mut canvas, &glow)?;
                }
                draw_text(&mut canvas, &layout.font, line, 0, y, NEON_COLOR);
            }
            Ok(canvas)
        }
    }
}

/// Draw all lines left-aligned with the first line's top at `(x, y)`.
pub fn draw_lines(canvas: &mut Canvas, layout: &LayoutResult, x: i32, y: i32, color: Rgba8) {
    for (idx, line) in layout.lines.iter().enumerate() {
        draw_text(canvas, &layout.font, line, x, y + layout.line_top(idx), color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
