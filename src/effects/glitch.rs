//! Glitch animation: corrupted ghost copies, tearing bands, scanlines and bloom.

use std::ops::Range;

use rand::Rng;

use crate::foundation::{
    core::{FrameIndex, FrameTiming, Rgba8, WHITE},
    error::TextFxResult,
};
use crate::layout::engine::LayoutResult;
use crate::render::{
    blur::gaussian_blur, canvas::Canvas, composite::blend_in_place, draw::draw_text,
};

/// Frames in one glitch loop.
pub const GLITCH_FRAMES: u32 = 20;
/// Per-frame delay of the glitch loop.
pub const GLITCH_DELAY_MS: u32 = 50;
/// Extra canvas size around the text, split evenly between both sides.
pub const GLITCH_PADDING: u32 = 30;

/// Code point ranges the corruption marks are drawn from (end exclusive).
pub const COMBINING_MARK_RANGES: [Range<u32>; 3] =
    [0x0300..0x036F, 0x1DC0..0x1DFF, 0x20D0..0x20FF];

const LAYER_TINTS: [Rgba8; 3] = [[255, 0, 0, 80], [0, 255, 255, 80], [255, 0, 255, 80]];
const LAYER_OFFSETS: [(i32, i32); 3] = [(-2, -1), (2, 1), (-1, 2)];
const LAYER_INTENSITIES: [f64; 3] = [0.2, 0.3, 0.4];

const BAND_COUNT: u32 = 5;
const SCANLINE_SCALE: f32 = 0.9;
const BLOOM_SIGMA: f32 = 1.0;
const BLOOM_MIX: f32 = 0.3;

/// Timing of the glitch animation.
pub fn glitch_timing() -> FrameTiming {
    FrameTiming {
        frames: GLITCH_FRAMES,
        delay_ms: GLITCH_DELAY_MS,
    }
}

fn mark_count() -> u32 {
    COMBINING_MARK_RANGES.iter().map(|r| r.end - r.start).sum()
}

/// Pick one combining mark uniformly from [`COMBINING_MARK_RANGES`].
pub fn random_mark<R: Rng>(rng: &mut R) -> char {
    let mut idx = rng.random_range(0..mark_count());
    for range in COMBINING_MARK_RANGES {
        let len = range.end - range.start;
        if idx < len {
            return char::from_u32(range.start + idx).unwrap_or('\u{0300}');
        }
        idx -= len;
    }
    '\u{0300}'
}

/// Follow every character of `text` with `int(r * 5 * intensity) + 1` random combining marks.
pub fn corrupt_text<R: Rng>(text: &str, intensity: f64, rng: &mut R) -> String {
    let mut out = String::with_capacity(text.len() * 8);
    for ch in text.chars() {
        out.push(ch);
        let count = (rng.random::<f64>() * 5.0 * intensity) as usize + 1;
        for _ in 0..count {
            out.push(random_mark(rng));
        }
    }
    out
}

/// Time parameter of `frame`.
fn frame_time(frame: FrameIndex) -> f64 {
    f64::from(frame.0) * 0.2
}

/// Extra corruption applied to all three layers at time `t`, in `[0, 0.4]`.
pub fn intensity_modifier(t: f64) -> f64 {
    (t.sin() + 1.0) * 0.2
}

/// Offset of ghost layer `layer` (0, 1 or 2) at time `t`, relative to the clean line.
pub(crate) fn layer_offset(t: f64, layer: usize) -> (i32, i32) {
    let (bx, by) = LAYER_OFFSETS[layer];
    let phase = t + layer as f64;
    (bx + (phase.sin() * 2.0) as i32, by + (phase.cos() * 2.0) as i32)
}

/// First darkened row of `frame`. Alternates between rows 2 and 0.
pub fn scanline_start(frame: FrameIndex) -> u32 {
    (2 + 2 * (frame.0 % 2)) % 4
}

/// Render one frame of the glitch loop.
///
/// The canvas is the layout size plus [`GLITCH_PADDING`]. All randomness is drawn from `rng`.
pub fn glitch_frame<R: Rng>(
    layout: &LayoutResult,
    frame: FrameIndex,
    rng: &mut R,
) -> TextFxResult<Canvas> {
    let half = (GLITCH_PADDING / 2) as i32;
    let mut canvas = Canvas::new(
        layout.canvas_width + GLITCH_PADDING,
        layout.canvas_height + GLITCH_PADDING,
    );
    let t = frame_time(frame);
    let boost = intensity_modifier(t);

    for (idx, line) in layout.lines.iter().enumerate() {
        let y = layout.line_top(idx) + half;
        let ghosts = LAYER_INTENSITIES.map(|base| corrupt_text(line, base + boost, &mut *rng));

        draw_text(&mut canvas, &layout.font, line, half, y, WHITE);
        for (layer, (ghost, tint)) in ghosts.iter().zip(LAYER_TINTS).enumerate() {
            let (dx, dy) = layer_offset(t, layer);
            draw_text(&mut canvas, &layout.font, ghost, half + dx, y + dy, tint);
        }
    }

    tear_bands(&mut canvas, layout.canvas_height, t, rng);
    darken_scanlines(&mut canvas, frame);
    bloom(canvas)
}

// Band positions follow the unpadded text height; rows past the canvas are clipped.
fn tear_bands<R: Rng>(canvas: &mut Canvas, text_height: u32, t: f64, rng: &mut R) {
    let h = f64::from(text_height);
    let rows = i64::from(canvas.height());
    for k in 0..BAND_COUNT {
        let k = f64::from(k);
        let y = ((t + k * 1.5).sin() * h / 3.0 + h / 2.0) as i64;
        let band: i64 = rng.random_range(1..=3);
        let shift = ((t * 2.0 + k).sin() * 8.0) as i64;

        let start = y.max(0);
        let end = (y + band).min(rows);
        for row in start..end {
            roll_row(canvas.row_mut(row as u32), shift);
        }
    }
}

/// Circular shift of a pixel row; positive `shift` moves pixels right.
fn roll_row(row: &mut [u8], shift: i64) {
    let width = (row.len() / 4) as i64;
    if width == 0 {
        return;
    }
    let by = shift.rem_euclid(width) as usize * 4;
    row.rotate_right(by);
}

fn darken_scanlines(canvas: &mut Canvas, frame: FrameIndex) {
    for y in (scanline_start(frame)..canvas.height()).step_by(4) {
        for v in canvas.row_mut(y) {
            *v = (f32::from(*v) * SCANLINE_SCALE) as u8;
        }
    }
}

fn bloom(mut canvas: Canvas) -> TextFxResult<Canvas> {
    let blurred = gaussian_blur(&canvas, BLOOM_SIGMA)?;
    blend_in_place(&mut canvas, &blurred, BLOOM_MIX)?;
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/glitch.rs"]
mod tests;
