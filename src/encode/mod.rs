pub(crate) mod gif;
pub(crate) mod png;

/// Container format of an encoded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Single-frame lossless RGBA.
    Png,
    /// Paletted, looped animation.
    Gif,
}

impl ImageFormat {
    /// MIME type served for this format.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Gif => "image/gif",
        }
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Gif => "gif",
        }
    }
}

/// Encoded bytes plus what a client needs to save them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    /// Encoded file contents.
    pub bytes: Vec<u8>,
    /// Format of `bytes`.
    pub format: ImageFormat,
    /// Suggested download name, including extension.
    pub filename: String,
}

impl EncodedImage {
    /// MIME type of `bytes`.
    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }
}
