use crate::foundation::error::{TextFxError, TextFxResult};

/// Straight (non-premultiplied) RGBA8 color.
pub type Rgba8 = [u8; 4];

/// Fully transparent black.
pub const TRANSPARENT: Rgba8 = [0, 0, 0, 0];
/// Opaque white.
pub const WHITE: Rgba8 = [255, 255, 255, 255];
/// Opaque black.
pub const BLACK: Rgba8 = [0, 0, 0, 255];

/// 0-based index of a frame inside an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u32);

/// Frame count and per-frame delay of an animated effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTiming {
    /// Number of frames in one loop.
    pub frames: u32,
    /// Delay between frames in milliseconds.
    pub delay_ms: u32,
}

impl FrameTiming {
    /// Create a validated timing with at least one frame.
    pub fn new(frames: u32, delay_ms: u32) -> TextFxResult<Self> {
        if frames == 0 {
            return Err(TextFxError::validation("frame count must be > 0"));
        }
        Ok(Self { frames, delay_ms })
    }

    /// Iterate the frame indices of one loop in playback order.
    pub fn indices(self) -> impl Iterator<Item = FrameIndex> {
        (0..self.frames).map(FrameIndex)
    }

    /// GIF delays are expressed in centiseconds.
    pub fn delay_centis(self) -> u16 {
        let cs = (self.delay_ms + 5) / 10;
        cs.min(u32::from(u16::MAX)) as u16
    }
}

/// How multi-frame effects schedule their frames.
///
/// Frames never depend on each other, so both modes produce identical output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameThreading {
    /// Render frames one after another on the calling thread.
    #[default]
    Sequential,
    /// Render frames on the rayon pool, collected in frame order.
    Parallel,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
