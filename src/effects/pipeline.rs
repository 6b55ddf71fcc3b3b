use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;

use crate::effects::{
    Effect,
    glitch::{GLITCH_PADDING, glitch_frame, glitch_timing},
    gradient,
    rainbow::apply_rainbow,
};
use crate::encode::{
    EncodedImage,
    gif::{check_gif_size, encode_gif},
    png::encode_png,
};
use crate::font::resolve::FontResolver;
use crate::foundation::{
    core::{FrameIndex, FrameThreading, FrameTiming},
    error::{TextFxError, TextFxResult},
};
use crate::layout::engine::{LayoutResult, layout_text};
use crate::render::{
    canvas::Canvas,
    compositor::{TextStyle, compose},
};

/// Knobs for a [`Renderer`].
#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    /// Font lookup used for every request.
    pub fonts: FontResolver,
    /// Frame scheduling for animated effects.
    pub threading: FrameThreading,
    /// Worker threads for [`FrameThreading::Parallel`]. `None` uses rayon's default.
    pub threads: Option<usize>,
    /// Frames in one animated gradient loop. `None` uses [`ANIMATED_GRADIENT_FRAMES`].
    ///
    /// [`ANIMATED_GRADIENT_FRAMES`]: gradient::ANIMATED_GRADIENT_FRAMES
    pub gradient_frames: Option<u32>,
}

/// Pixels produced by one effect, before encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderedEffect {
    /// A single canvas.
    Still(Canvas),
    /// Frames in playback order.
    Animation {
        /// Rendered frames, all the same size.
        frames: Vec<Canvas>,
        /// Frame count and delay.
        timing: FrameTiming,
    },
}

impl RenderedEffect {
    /// All canvases, one for a still.
    pub fn frames(&self) -> &[Canvas] {
        match self {
            Self::Still(canvas) => std::slice::from_ref(canvas),
            Self::Animation { frames, .. } => frames,
        }
    }
}

/// Runs layout, compositing, effect transforms and encoding for each request.
///
/// Holds no per-request state, so one renderer can serve many threads.
#[derive(Debug)]
pub struct Renderer {
    fonts: FontResolver,
    gradient_timing: FrameTiming,
    pool: Option<rayon::ThreadPool>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            fonts: FontResolver::default(),
            gradient_timing: gradient::animated_gradient_timing(),
            pool: None,
        }
    }
}

impl Renderer {
    /// Build a renderer, creating a worker pool when frames render in parallel.
    pub fn new(opts: RenderOptions) -> TextFxResult<Self> {
        let gradient_timing = match opts.gradient_frames {
            Some(frames) => FrameTiming::new(frames, gradient::ANIMATED_GRADIENT_DELAY_MS)?,
            None => gradient::animated_gradient_timing(),
        };
        let pool = match opts.threading {
            FrameThreading::Sequential => None,
            FrameThreading::Parallel => Some(build_thread_pool(opts.threads)?),
        };
        Ok(Self {
            fonts: opts.fonts,
            gradient_timing,
            pool,
        })
    }

    /// Frame count and delay of the animated gradient.
    pub fn gradient_timing(&self) -> FrameTiming {
        self.gradient_timing
    }

    /// Frame scheduling in use.
    pub fn threading(&self) -> FrameThreading {
        if self.pool.is_some() {
            FrameThreading::Parallel
        } else {
            FrameThreading::Sequential
        }
    }

    /// Lay out `text` with this renderer's fonts.
    pub fn layout(&self, text: &str) -> LayoutResult {
        layout_text(text, &self.fonts)
    }

    /// Render `effect` for `text` to unencoded canvases.
    ///
    /// Animated effects draw one seed per frame from `rng` up front, so the result is the same
    /// whether frames run sequentially or in parallel. Animations too large for a GIF fail
    /// with [`TextFxError::Encoding`] before any frame is drawn.
    #[tracing::instrument(skip(self, text, rng), fields(chars = text.chars().count()))]
    pub fn render_frames<R: Rng>(
        &self,
        effect: Effect,
        text: &str,
        rng: &mut R,
    ) -> TextFxResult<RenderedEffect> {
        let layout = self.layout(text);
        let rendered = match effect {
            Effect::Basic => {
                RenderedEffect::Still(compose(&layout, TextStyle::shadowed_for(text))?)
            }
            Effect::Neon => RenderedEffect::Still(compose(&layout, TextStyle::Glow)?),
            Effect::Gradient => {
                let mut canvas = compose(&layout, TextStyle::Plain)?;
                gradient::apply_gradient(&mut canvas, 0.0);
                RenderedEffect::Still(canvas)
            }
            Effect::RainbowWave => {
                let mut canvas = compose(&layout, TextStyle::Plain)?;
                apply_rainbow(&mut canvas);
                RenderedEffect::Still(canvas)
            }
            Effect::AnimatedGradient => {
                let timing = self.gradient_timing;
                check_gif_size(layout.canvas_width, layout.canvas_height)?;
                let base = compose(&layout, TextStyle::Plain)?;
                let frames = self.render_animation(timing, rng, |frame, _| {
                    let mut canvas = base.clone();
                    gradient::apply_gradient(
                        &mut canvas,
                        gradient::frame_phase(frame, timing.frames),
                    );
                    Ok(canvas)
                })?;
                RenderedEffect::Animation { frames, timing }
            }
            Effect::Glitch => {
                let timing = glitch_timing();
                check_gif_size(
                    layout.canvas_width + GLITCH_PADDING,
                    layout.canvas_height + GLITCH_PADDING,
                )?;
                let frames = self.render_animation(timing, rng, |frame, frame_rng| {
                    glitch_frame(&layout, frame, frame_rng)
                })?;
                RenderedEffect::Animation { frames, timing }
            }
        };
        tracing::debug!(frames = rendered.frames().len(), "effect rendered");
        Ok(rendered)
    }

    /// Render and encode `effect` for `text`, drawing randomness from `rng`.
    pub fn render_with_rng<R: Rng>(
        &self,
        effect: Effect,
        text: &str,
        rng: &mut R,
    ) -> TextFxResult<EncodedImage> {
        let bytes = match self.render_frames(effect, text, rng)? {
            RenderedEffect::Still(canvas) => encode_png(&canvas)?,
            RenderedEffect::Animation { frames, timing } => encode_gif(&frames, timing)?,
        };
        Ok(EncodedImage {
            bytes,
            format: effect.format(),
            filename: effect.filename(text),
        })
    }

    /// Render and encode `effect` for `text` with the thread-local generator.
    pub fn render(&self, effect: Effect, text: &str) -> TextFxResult<EncodedImage> {
        self.render_with_rng(effect, text, &mut rand::rng())
    }

    fn render_animation<R, F>(
        &self,
        timing: FrameTiming,
        rng: &mut R,
        render_frame: F,
    ) -> TextFxResult<Vec<Canvas>>
    where
        R: Rng,
        F: Fn(FrameIndex, &mut StdRng) -> TextFxResult<Canvas> + Sync,
    {
        let jobs: Vec<(FrameIndex, u64)> = timing
            .indices()
            .map(|frame| (frame, rng.random::<u64>()))
            .collect();
        let run = |&(frame, seed): &(FrameIndex, u64)| {
            let mut frame_rng = StdRng::seed_from_u64(seed);
            render_frame(frame, &mut frame_rng)
        };

        match &self.pool {
            Some(pool) => pool.install(|| jobs.par_iter().map(run).collect()),
            None => jobs.iter().map(run).collect(),
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> TextFxResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(TextFxError::validation(
            "frame threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| TextFxError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pipeline.rs"]
mod tests;
