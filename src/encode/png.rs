use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};

use crate::foundation::error::TextFxResult;
use crate::render::canvas::Canvas;

/// Encode `canvas` as an 8-bit RGBA PNG.
#[tracing::instrument(skip(canvas), fields(width = canvas.width(), height = canvas.height()))]
pub fn encode_png(canvas: &Canvas) -> TextFxResult<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out).write_image(
        canvas.data(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgba8,
    )?;
    tracing::debug!(bytes = out.len(), "encoded png");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
