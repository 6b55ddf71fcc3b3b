use std::path::PathBuf;

use crate::font::builtin;

/// Rasterized coverage of one glyph, positioned relative to the pen and baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphRaster {
    /// Offset of the bitmap's left edge from the pen position.
    pub left: i32,
    /// Offset of the bitmap's top edge from the baseline (negative is above).
    pub top: i32,
    /// Bitmap width in pixels.
    pub width: u32,
    /// Bitmap height in pixels.
    pub height: u32,
    /// Row-major coverage, 0-255 per pixel.
    pub coverage: Vec<u8>,
    /// Horizontal pen advance in pixels.
    pub advance: f32,
}

impl GlyphRaster {
    /// Tight `(x0, y0, x1, y1)` bounds of non-zero coverage, relative to pen and baseline.
    ///
    /// Returns `None` for blank glyphs such as spaces.
    pub fn ink_bounds(&self) -> Option<(i32, i32, i32, i32)> {
        let w = self.width as usize;
        let mut bounds: Option<(i32, i32, i32, i32)> = None;
        for (i, &c) in self.coverage.iter().enumerate() {
            if c == 0 {
                continue;
            }
            let x = self.left + (i % w) as i32;
            let y = self.top + (i / w) as i32;
            bounds = Some(match bounds {
                None => (x, y, x + 1, y + 1),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x + 1), y1.max(y + 1)),
            });
        }
        bounds
    }
}

/// Where a [`FontHandle`] came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// An outline font file loaded from disk.
    File(PathBuf),
    /// The built-in bitmap font.
    Builtin,
}

/// A font ready to rasterize at a fixed pixel size.
///
/// Handles are created per request by [`FontResolver::resolve`](crate::FontResolver::resolve)
/// and owned by the resulting layout.
pub struct FontHandle {
    kind: FontKind,
}

enum FontKind {
    Outline {
        font: fontdue::Font,
        px: f32,
        path: PathBuf,
    },
    Builtin,
}

impl std::fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontHandle")
            .field("source", &self.source())
            .field("pixel_size", &self.pixel_size())
            .finish()
    }
}

impl FontHandle {
    pub(crate) fn outline(font: fontdue::Font, px: f32, path: PathBuf) -> Self {
        Self {
            kind: FontKind::Outline { font, px, path },
        }
    }

    /// The built-in 5x7 bitmap font. Its size is fixed.
    pub fn builtin() -> Self {
        Self {
            kind: FontKind::Builtin,
        }
    }

    /// Origin of the loaded font data.
    pub fn source(&self) -> FontSource {
        match &self.kind {
            FontKind::Outline { path, .. } => FontSource::File(path.clone()),
            FontKind::Builtin => FontSource::Builtin,
        }
    }

    /// Effective pixel size. For the built-in font this is its fixed cell height.
    pub fn pixel_size(&self) -> f32 {
        match &self.kind {
            FontKind::Outline { px, .. } => *px,
            FontKind::Builtin => builtin::CELL_HEIGHT as f32,
        }
    }

    /// Distance from the top of a line box to the baseline, in whole pixels.
    pub fn ascent(&self) -> i32 {
        match &self.kind {
            FontKind::Outline { font, px, .. } => font
                .horizontal_line_metrics(*px)
                .map(|m| m.ascent.round() as i32)
                .unwrap_or_else(|| (*px * 0.8).round() as i32),
            FontKind::Builtin => builtin::ASCENT,
        }
    }

    /// Rasterize a single character.
    pub fn rasterize(&self, ch: char) -> GlyphRaster {
        match &self.kind {
            FontKind::Outline { font, px, .. } => {
                let (metrics, coverage) = font.rasterize(ch, *px);
                GlyphRaster {
                    left: metrics.xmin,
                    top: -(metrics.ymin + metrics.height as i32),
                    width: metrics.width as u32,
                    height: metrics.height as u32,
                    coverage,
                    advance: metrics.advance_width,
                }
            }
            FontKind::Builtin => builtin::glyph(ch),
        }
    }

    /// Ink box and advance of a character without keeping its bitmap.
    ///
    /// Returns `(advance, bounds)` where bounds follow [`GlyphRaster::ink_bounds`].
    pub fn glyph_box(&self, ch: char) -> (f32, Option<(i32, i32, i32, i32)>) {
        match &self.kind {
            FontKind::Outline { font, px, .. } => {
                let m = font.metrics(ch, *px);
                if m.width == 0 || m.height == 0 {
                    return (m.advance_width, None);
                }
                let top = -(m.ymin + m.height as i32);
                (
                    m.advance_width,
                    Some((m.xmin, top, m.xmin + m.width as i32, top + m.height as i32)),
                )
            }
            FontKind::Builtin => {
                let g = builtin::glyph(ch);
                (g.advance, g.ink_bounds())
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/font/handle.rs"]
mod tests;
