use std::path::{Path, PathBuf};

use crate::font::handle::FontHandle;

/// Well-known font files, tried in order.
pub const SYSTEM_FONT_PATHS: &[&str] = &[
    "C:\\Windows\\Fonts\\arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
];

/// Locates a usable font for each request.
///
/// Resolution never fails: when no candidate file exists or parses, the built-in bitmap font
/// is returned instead. Nothing is cached between calls.
#[derive(Clone, Debug)]
pub struct FontResolver {
    candidates: Vec<PathBuf>,
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::with_candidates(SYSTEM_FONT_PATHS.iter().map(PathBuf::from))
    }
}

impl FontResolver {
    /// Resolver over an explicit candidate list.
    pub fn with_candidates(candidates: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            candidates: candidates.into_iter().collect(),
        }
    }

    /// Resolver that only ever yields the built-in font.
    pub fn builtin_only() -> Self {
        Self::with_candidates([])
    }

    /// Try `path` before the existing candidates.
    pub fn prefer(mut self, path: impl Into<PathBuf>) -> Self {
        self.candidates.insert(0, path.into());
        self
    }

    /// Ordered candidate list.
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Load the first usable candidate at `pixel_size`.
    pub fn resolve(&self, pixel_size: u32) -> FontHandle {
        for path in &self.candidates {
            if !path.is_file() {
                continue;
            }
            match load_outline(path) {
                Ok(font) => {
                    tracing::debug!(path = %path.display(), pixel_size, "resolved font");
                    return FontHandle::outline(font, pixel_size as f32, path.clone());
                }
                Err(err) => {
                    tracing::debug!(path = %path.display(), %err, "skipping unusable font");
                }
            }
        }
        tracing::debug!(pixel_size, "no font file usable, falling back to built-in font");
        FontHandle::builtin()
    }
}

fn load_outline(path: &Path) -> anyhow::Result<fontdue::Font> {
    let bytes = std::fs::read(path)?;
    let settings = fontdue::FontSettings {
        collection_index: 0,
        ..fontdue::FontSettings::default()
    };
    fontdue::Font::from_bytes(bytes, settings).map_err(|e| anyhow::anyhow!(e))
}

#[cfg(test)]
#[path = "../../tests/unit/font/resolve.rs"]
mod tests;
