use crate::font::handle::FontHandle;

/// Sample string spanning an ascender and a descender, used for line height.
pub const LINE_SAMPLE: &str = "Ay";

/// Pixel extent of a text run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextExtent {
    /// Horizontal extent covering both glyph ink and pen advance.
    pub width: u32,
    /// Tight vertical ink extent.
    pub height: u32,
}

/// Measure `text` as a single line.
///
/// Width spans the union of ink and advance boxes, so trailing spaces widen the run.
/// Height is the tight ink box, ascender to descender. Empty text measures zero.
pub fn measure(text: &str, font: &FontHandle) -> TextExtent {
    let mut pen = 0.0f32;
    let mut x0 = 0i32;
    let mut x1 = 0i32;
    let mut ink_y: Option<(i32, i32)> = None;

    for ch in text.chars() {
        let (advance, bounds) = font.glyph_box(ch);
        if let Some((gx0, gy0, gx1, gy1)) = bounds {
            let origin = pen.round() as i32;
            x0 = x0.min(origin + gx0);
            x1 = x1.max(origin + gx1);
            ink_y = Some(match ink_y {
                None => (gy0, gy1),
                Some((a, b)) => (a.min(gy0), b.max(gy1)),
            });
        }
        pen += advance;
    }
    x1 = x1.max(pen.ceil() as i32);

    TextExtent {
        width: (x1 - x0).max(0) as u32,
        height: ink_y.map(|(a, b)| (b - a).max(0) as u32).unwrap_or(0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/font/metrics.rs"]
mod tests;
