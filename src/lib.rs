//! TextFX renders short text as stylized images.
//!
//! A request flows through four stages:
//!
//! - [`layout_text`] picks a font size, wraps the text and sizes the canvas
//! - [`compose`] draws the wrapped lines onto a [`Canvas`] in a [`TextStyle`]
//! - an [`Effect`] recolors the canvas or renders it as an animation loop
//! - [`encode_png`] / [`encode_gif`] produce the bytes
//!
//! [`Renderer`] runs the whole pipeline and [`Service`] exposes it over HTTP.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod effects;
pub(crate) mod encode;
pub(crate) mod font;
pub(crate) mod layout;
pub(crate) mod render;
pub(crate) mod service;

pub use crate::foundation::core::{
    BLACK, FrameIndex, FrameThreading, FrameTiming, Rgba8, TRANSPARENT, WHITE,
};
pub use crate::foundation::error::{TextFxError, TextFxResult};
pub use crate::foundation::math::content_color;

pub use crate::font::handle::{FontHandle, FontSource, GlyphRaster};
pub use crate::font::metrics::{LINE_SAMPLE, TextExtent, measure};
pub use crate::font::resolve::{FontResolver, SYSTEM_FONT_PATHS};

pub use crate::layout::engine::{
    LayoutResult, MIN_HEIGHT, MIN_WIDTH, PAD_X, PAD_Y, SizeEstimate, estimate_size,
    font_size_for, layout_text, wrap_width_for, wrap_words,
};

pub use crate::render::blur::gaussian_blur;
pub use crate::render::canvas::Canvas;
pub use crate::render::composite::{blend_in_place, composite_over, over_straight};
pub use crate::render::compositor::{
    GLOW_BLUR_SIGMAS, GLOW_COLOR, NEON_COLOR, SHADOW_OFFSET, TextStyle, compose, draw_lines,
};
pub use crate::render::draw::{INK_THRESHOLD, draw_text};

pub use crate::effects::glitch::{
    COMBINING_MARK_RANGES, GLITCH_DELAY_MS, GLITCH_FRAMES, GLITCH_PADDING, corrupt_text,
    glitch_frame, glitch_timing, intensity_modifier, random_mark, scanline_start,
};
pub use crate::effects::gradient::{
    ANIMATED_GRADIENT_DELAY_MS, ANIMATED_GRADIENT_FRAMES, animated_gradient_timing,
    apply_gradient, frame_phase, gradient_colors,
};
pub use crate::effects::pipeline::{RenderOptions, RenderedEffect, Renderer};
pub use crate::effects::rainbow::{apply_rainbow, hue_at, rainbow_color, wave_at};
pub use crate::effects::{Effect, FILENAME_TEXT_CHARS};

pub use crate::encode::gif::{ALPHA_CUTOFF, TRANSPARENT_INDEX, encode_gif};
pub use crate::encode::png::encode_png;
pub use crate::encode::{EncodedImage, ImageFormat};

pub use crate::service::config::{DEFAULT_HOST, DEFAULT_PORT, ServiceConfig};
pub use crate::service::router::{
    DEFAULT_TEXT, ServiceResponse, index, route, route_with_rng, text_param,
};
pub use crate::service::server::Service;
