use crate::font::{
    handle::FontHandle,
    metrics::{LINE_SAMPLE, measure},
    resolve::FontResolver,
};

/// Horizontal padding added to the widest line.
pub const PAD_X: u32 = 20;
/// Vertical padding added below the last line.
pub const PAD_Y: u32 = 20;
/// Minimum canvas width.
pub const MIN_WIDTH: u32 = 100;
/// Minimum canvas height.
pub const MIN_HEIGHT: u32 = 20;

/// Wrapped lines plus the canvas geometry needed to draw them.
#[derive(Debug)]
pub struct LayoutResult {
    /// Wrapped lines, top to bottom. Never empty.
    pub lines: Vec<String>,
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Vertical distance between consecutive line origins.
    pub line_height: u32,
    /// Font the lines were measured with.
    pub font: FontHandle,
    /// Wrap width that produced `lines`.
    pub wrap_width: u32,
}

impl LayoutResult {
    /// Pixel width of each line, in line order.
    pub fn line_widths(&self) -> Vec<u32> {
        self.lines
            .iter()
            .map(|l| measure(l, &self.font).width)
            .collect()
    }

    /// Top edge of line `idx` when lines start at `y = 0`.
    pub fn line_top(&self, idx: usize) -> i32 {
        (idx as u32 * self.line_height) as i32
    }
}

/// First-pass sizing derived from text length and unwrapped width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeEstimate {
    /// Wrap width, floored at [`MIN_WIDTH`].
    pub wrap_width: u32,
    /// Estimated canvas height, floored at [`MIN_HEIGHT`].
    pub height: u32,
    /// Chosen font pixel size.
    pub font_size: u32,
}

/// Font pixel size for a text of `chars` code points. Longer text gets a smaller font.
pub fn font_size_for(chars: usize) -> u32 {
    if chars < 100 {
        14
    } else if chars < 200 {
        12
    } else {
        10
    }
}

/// Wrap width for a text of `chars` code points whose unwrapped width is `full_width`.
pub fn wrap_width_for(chars: usize, full_width: u32) -> u32 {
    if chars > 500 {
        800
    } else if chars > 200 {
        600
    } else if full_width > 400 {
        400
    } else {
        full_width
    }
}

/// Greedy word wrap at `target_width`.
///
/// Each word is measured with one trailing space. A word opens a new line only when it would
/// overflow a non-empty line, so a single overlong word keeps a line to itself.
pub fn wrap_words(text: &str, target_width: u32, font: &FontHandle) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_width = 0u32;

    for word in text.split_whitespace() {
        let word_width = measure(&format!("{word} "), font).width;
        if !current.is_empty() && current_width + word_width > target_width {
            lines.push(current.join(" "));
            current.clear();
            current_width = 0;
        }
        current.push(word);
        current_width += word_width;
    }
    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    lines
}

/// First-pass sizing: wrap width and an estimated height for `text` set in `font`.
///
/// `font_size` is the nominal size the font was resolved at; the estimate uses it for line
/// spacing even when the resolved font could not honor it.
pub fn estimate_size(text: &str, font: &FontHandle, font_size: u32) -> SizeEstimate {
    let chars = text.chars().count();
    let full_width = measure(text, font).width;
    let target = wrap_width_for(chars, full_width);

    let line_count = wrap_words(text, target, font).len();
    let spacing = font_size as f64 * 1.5;
    let height = (line_count as f64 * spacing) as u32 + PAD_Y;

    SizeEstimate {
        wrap_width: target.max(MIN_WIDTH),
        height: height.max(MIN_HEIGHT),
        font_size,
    }
}

/// Lay out `text` for rendering.
///
/// Never fails: empty or whitespace-only text yields a single empty line at the minimum size.
#[tracing::instrument(skip(text, fonts), fields(chars = text.chars().count()))]
pub fn layout_text(text: &str, fonts: &FontResolver) -> LayoutResult {
    let font_size = font_size_for(text.chars().count());
    let font = fonts.resolve(font_size);
    let estimate = estimate_size(text, &font, font_size);

    let mut lines = wrap_words(text, estimate.wrap_width, &font);
    if lines.is_empty() {
        lines.push(String::new());
    }

    let max_line_width = lines
        .iter()
        .map(|l| measure(l, &font).width)
        .max()
        .unwrap_or(0);
    let sample_height = measure(LINE_SAMPLE, &font).height;
    let line_height = (sample_height as f64 * 1.5) as u32;

    let canvas_width = (max_line_width + PAD_X).max(MIN_WIDTH);
    let canvas_height = (line_height * lines.len() as u32 + PAD_Y).max(MIN_HEIGHT);

    tracing::debug!(
        lines = lines.len(),
        canvas_width,
        canvas_height,
        line_height,
        wrap_width = estimate.wrap_width,
        "layout complete"
    );

    LayoutResult {
        lines,
        canvas_width,
        canvas_height,
        line_height,
        font,
        wrap_width: estimate.wrap_width,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
