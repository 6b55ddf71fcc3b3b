use std::collections::HashMap;

use ::gif::{DisposalMethod, Encoder, Frame, Repeat};

use crate::foundation::{
    core::FrameTiming,
    error::{TextFxError, TextFxResult},
};
use crate::render::canvas::Canvas;

/// Palette slot reserved for transparent pixels.
pub const TRANSPARENT_INDEX: u8 = 255;
/// Pixels with alpha below this map to [`TRANSPARENT_INDEX`].
pub const ALPHA_CUTOFF: u8 = 64;

const MAX_COLORS: usize = 255;
const NEUQUANT_SAMPLE_FACTOR: i32 = 10;

/// One frame reduced to a 256-entry palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct IndexedFrame {
    /// 256 RGB triples; slot 255 is never used by opaque pixels.
    pub palette: Vec<u8>,
    /// One palette index per pixel.
    pub indices: Vec<u8>,
}

/// Reduce `canvas` to at most 255 opaque colors plus the transparent slot.
///
/// Frames with few colors keep them exactly; others go through NeuQuant.
pub(crate) fn quantize(canvas: &Canvas) -> IndexedFrame {
    let pixels = canvas.data();
    let opaque = |px: &[u8]| px[3] >= ALPHA_CUTOFF;

    let mut exact = HashMap::<[u8; 3], u8>::new();
    let mut palette = Vec::with_capacity(MAX_COLORS * 3);
    let mut overflow = false;
    for px in pixels.chunks_exact(4).filter(|px| opaque(px)) {
        let rgb = [px[0], px[1], px[2]];
        if exact.contains_key(&rgb) {
            continue;
        }
        if exact.len() == MAX_COLORS {
            overflow = true;
            break;
        }
        exact.insert(rgb, exact.len() as u8);
        palette.extend_from_slice(&rgb);
    }

    let indices: Vec<u8> = if overflow {
        let samples: Vec<u8> = pixels
            .chunks_exact(4)
            .filter(|px| opaque(px))
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect();
        let nq = color_quant::NeuQuant::new(NEUQUANT_SAMPLE_FACTOR, MAX_COLORS, &samples);
        palette = nq.color_map_rgb();
        pixels
            .chunks_exact(4)
            .map(|px| {
                if opaque(px) {
                    nq.index_of(&[px[0], px[1], px[2], 255]) as u8
                } else {
                    TRANSPARENT_INDEX
                }
            })
            .collect()
    } else {
        pixels
            .chunks_exact(4)
            .map(|px| {
                if opaque(px) {
                    exact
                        .get(&[px[0], px[1], px[2]])
                        .copied()
                        .unwrap_or(TRANSPARENT_INDEX)
                } else {
                    TRANSPARENT_INDEX
                }
            })
            .collect()
    };

    palette.resize(256 * 3, 0);
    IndexedFrame { palette, indices }
}

/// Logical screen size as GIF header fields. Both sides must fit in 16 bits.
pub(crate) fn check_gif_size(width: u32, height: u32) -> TextFxResult<(u16, u16)> {
    match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(TextFxError::encoding(format!(
            "{width}x{height} exceeds the GIF size limit"
        ))),
    }
}

/// Encode `frames` as an infinitely looping GIF with a uniform delay.
///
/// Every frame gets its own palette, is cleared to the background before the next one,
/// and marks [`TRANSPARENT_INDEX`] as transparent.
#[tracing::instrument(skip(frames), fields(frames = frames.len()))]
pub fn encode_gif(frames: &[Canvas], timing: FrameTiming) -> TextFxResult<Vec<u8>> {
    let first = frames
        .first()
        .ok_or_else(|| TextFxError::encoding("cannot encode a GIF with zero frames"))?;
    let (width, height) = (first.width(), first.height());
    if let Some((idx, bad)) = frames
        .iter()
        .enumerate()
        .find(|(_, f)| f.width() != width || f.height() != height)
    {
        return Err(TextFxError::encoding(format!(
            "frame {idx} is {}x{}, expected {width}x{height}",
            bad.width(),
            bad.height()
        )));
    }
    let (gw, gh) = check_gif_size(width, height)?;

    let mut out = Vec::new();
    {
        let mut encoder = Encoder::new(&mut out, gw, gh, &[])?;
        encoder.set_repeat(Repeat::Infinite)?;
        for canvas in frames {
            let indexed = quantize(canvas);
            let mut frame = Frame::from_palette_pixels(
                gw,
                gh,
                indexed.indices,
                indexed.palette,
                Some(TRANSPARENT_INDEX),
            );
            frame.delay = timing.delay_centis();
            frame.dispose = DisposalMethod::Background;
            encoder.write_frame(&frame)?;
        }
    }
    tracing::debug!(bytes = out.len(), "encoded gif");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
