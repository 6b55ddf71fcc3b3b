pub(crate) mod glitch;
pub(crate) mod gradient;
pub(crate) mod pipeline;
pub(crate) mod rainbow;

use crate::encode::ImageFormat;
use crate::foundation::core::FrameTiming;

/// Longest text prefix used in a download name, in characters.
pub const FILENAME_TEXT_CHARS: usize = 30;

/// Every image TextFX can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Centered white text with a drop shadow on a text-derived background.
    Basic,
    /// Static horizontal RGB gradient.
    Gradient,
    /// Gradient scrolling through one full turn.
    AnimatedGradient,
    /// Cyan text with a blurred glow.
    Neon,
    /// Rainbow hue with a sine-modulated chroma field.
    RainbowWave,
    /// Corrupted, tearing, scanlined text.
    Glitch,
}

impl Effect {
    /// All effects in endpoint order.
    pub const ALL: [Effect; 6] = [
        Effect::Gradient,
        Effect::AnimatedGradient,
        Effect::Neon,
        Effect::RainbowWave,
        Effect::Glitch,
        Effect::Basic,
    ];

    /// HTTP path serving this effect.
    pub fn route(self) -> &'static str {
        match self {
            Self::Basic => "/api/v1/basic",
            Self::Gradient => "/api/v1/gradient-text",
            Self::AnimatedGradient => "/api/v1/gradient-text.gif",
            Self::Neon => "/api/v1/neon",
            Self::RainbowWave => "/api/v1/rainbow-wave",
            Self::Glitch => "/api/v1/glitch.gif",
        }
    }

    /// Effect served at `path`, if any.
    pub fn from_route(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.route() == path)
    }

    /// One-line description for the endpoint index.
    pub fn description(self) -> &'static str {
        match self {
            Self::Basic => "Generate centered shadowed text on a background derived from the text",
            Self::Gradient => "Generate static RGB gradient text on transparent background",
            Self::AnimatedGradient => "Generate animated scrolling RGB gradient text effect (GIF)",
            Self::Neon => "Generate text with neon glow effect",
            Self::RainbowWave => "Generate text with rainbow wave pattern",
            Self::Glitch => "Generate animated glitch text effect (GIF)",
        }
    }

    /// Output container.
    pub fn format(self) -> ImageFormat {
        if self.timing().is_some() {
            ImageFormat::Gif
        } else {
            ImageFormat::Png
        }
    }

    /// Frame count and delay for animated effects, `None` for stills.
    pub fn timing(self) -> Option<FrameTiming> {
        match self {
            Self::AnimatedGradient => Some(gradient::animated_gradient_timing()),
            Self::Glitch => Some(glitch::glitch_timing()),
            Self::Basic | Self::Gradient | Self::Neon | Self::RainbowWave => None,
        }
    }

    /// Leading part of the download name.
    pub fn file_prefix(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Gradient | Self::AnimatedGradient => "gradient",
            Self::Neon => "neon",
            Self::RainbowWave => "rainbow",
            Self::Glitch => "glitch",
        }
    }

    /// Download name for `text`: `<prefix>_<first 30 chars>.<ext>`.
    pub fn filename(self, text: &str) -> String {
        let head: String = text.chars().take(FILENAME_TEXT_CHARS).collect();
        format!(
            "{}_{}.{}",
            self.file_prefix(),
            head,
            self.format().extension()
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/mod.rs"]
mod tests;
