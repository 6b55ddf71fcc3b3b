use crate::foundation::{
    core::{Rgba8, TRANSPARENT},
    error::{TextFxError, TextFxResult},
    math::{premultiply, unpremultiply},
};

/// Straight-alpha RGBA8 pixel buffer.
///
/// Alpha separates ink from background: effects recolor pixels with `alpha > 0` and leave
/// fully transparent pixels alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, TRANSPARENT)
    }

    /// Canvas where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: color.repeat(len),
        }
    }

    /// Wrap an existing RGBA8 buffer.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> TextFxResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| TextFxError::validation("canvas size overflow"))?;
        if data.len() != expected {
            return Err(TextFxError::validation(format!(
                "canvas buffer is {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    /// Pixel at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Overwrite the pixel at `(x, y)`. Panics when out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgba8) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Mutable bytes of row `y`.
    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = self.offset(0, y);
        let end = start + (self.width as usize) * 4;
        &mut self.data[start..end]
    }

    /// Number of pixels with non-zero alpha.
    pub fn ink_pixels(&self) -> usize {
        self.data.chunks_exact(4).filter(|px| px[3] > 0).count()
    }

    pub(crate) fn to_premultiplied(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&premultiply([px[0], px[1], px[2], px[3]]));
        }
        out
    }

    pub(crate) fn from_premultiplied(width: u32, height: u32, premul: &[u8]) -> Self {
        let mut data = Vec::with_capacity(premul.len());
        for px in premul.chunks_exact(4) {
            data.extend_from_slice(&unpremultiply([px[0], px[1], px[2], px[3]]));
        }
        Self {
            width,
            height,
            data,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
