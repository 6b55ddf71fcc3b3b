/// Convenience result type used across TextFX.
pub type TextFxResult<T> = Result<T, TextFxError>;

/// Top-level error taxonomy used by the rendering core.
///
/// Layout never produces an error: empty or malformed text degrades to a minimal image.
#[derive(thiserror::Error, Debug)]
pub enum TextFxError {
    /// Invalid caller-provided parameters (frame counts, buffer shapes).
    #[error("validation error: {0}")]
    Validation(String),

    /// No usable font, including the built-in fallback.
    #[error("resource error: {0}")]
    Resource(String),

    /// Image encoding failed or was handed inconsistent frames.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TextFxError {
    /// Build a [`TextFxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TextFxError::Resource`] value.
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }

    /// Build a [`TextFxError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }
}

impl From<image::ImageError> for TextFxError {
    fn from(err: image::ImageError) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<gif::EncodingError> for TextFxError {
    fn from(err: gif::EncodingError) -> Self {
        Self::Encoding(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
