use std::f64::consts::{PI, TAU};

use crate::foundation::core::{FrameIndex, FrameTiming};
use crate::render::canvas::Canvas;

/// Frames in one loop of the scrolling gradient.
pub const ANIMATED_GRADIENT_FRAMES: u32 = 30;
/// Per-frame delay of the scrolling gradient.
pub const ANIMATED_GRADIENT_DELAY_MS: u32 = 50;

/// Timing of the scrolling gradient animation.
pub fn animated_gradient_timing() -> FrameTiming {
    FrameTiming {
        frames: ANIMATED_GRADIENT_FRAMES,
        delay_ms: ANIMATED_GRADIENT_DELAY_MS,
    }
}

/// RGB color of every column for a canvas `width` pixels wide.
///
/// Column `x` sits at phase `x / width * 2pi + phase_shift`; the three channels are the same
/// sine wave a third of a turn apart, scaled into `1..=255`.
pub fn gradient_colors(width: u32, phase_shift: f64) -> Vec<[u8; 3]> {
    let w = f64::from(width.max(1));
    (0..width)
        .map(|x| {
            let phase = f64::from(x) / w * TAU + phase_shift;
            [
                channel(phase),
                channel(phase + 2.0 * PI / 3.0),
                channel(phase + 4.0 * PI / 3.0),
            ]
        })
        .collect()
}

fn channel(phase: f64) -> u8 {
    (phase.sin() * 127.0 + 128.0) as u8
}

/// Recolor every ink pixel with its column's gradient color. Alpha is left alone.
pub fn apply_gradient(canvas: &mut Canvas, phase_shift: f64) {
    let colors = gradient_colors(canvas.width(), phase_shift);
    for y in 0..canvas.height() {
        for (px, rgb) in canvas.row_mut(y).chunks_exact_mut(4).zip(&colors) {
            if px[3] > 0 {
                px[..3].copy_from_slice(rgb);
            }
        }
    }
}

/// Phase shift of `frame` in a loop of `frames`.
///
/// The frame index wraps, so frame `frames` shifts exactly like frame 0.
pub fn frame_phase(frame: FrameIndex, frames: u32) -> f64 {
    let frames = frames.max(1);
    TAU * f64::from(frame.0 % frames) / f64::from(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/gradient.rs"]
mod tests;
