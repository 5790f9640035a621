//! Error types for color parsing and image loading.
//!
//! "Not enough data" outcomes of role assignment and palette generation are
//! not errors; they are expressed as `Option::None` and an empty
//! [`GeneratedPalettes`](crate::GeneratedPalettes) respectively.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while parsing a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a 6-digit hex color (with or without a leading `#`).
    #[error("invalid color format: {input:?}")]
    InvalidColorFormat {
        /// The rejected input, as given.
        input: String,
    },
}

impl ColorError {
    pub(crate) fn invalid(input: &str) -> Self {
        Self::InvalidColorFormat {
            input: input.to_string(),
        }
    }
}

/// Errors produced while obtaining a pixel buffer for extraction.
///
/// Once a valid buffer exists, extraction itself cannot fail.
#[derive(Debug, Error)]
pub enum ImageLoadError {
    /// The image bytes could not be decoded.
    #[error("failed to decode image")]
    Decode {
        /// Underlying decoder error.
        #[from]
        source: image::ImageError,
    },
    /// The image file could not be read.
    #[error("failed to read image file {}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The image has no pixels.
    #[error("image has zero area ({width}x{height})")]
    EmptyImage {
        /// Reported width.
        width: u32,
        /// Reported height.
        height: u32,
    },
    /// A raw RGBA buffer does not match its declared dimensions.
    #[error("rgba buffer holds {actual} bytes, expected {expected}")]
    BufferSize {
        /// `width * height * 4`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_message_quotes_input() {
        let err = ColorError::invalid("#12");
        assert_eq!(err.to_string(), "invalid color format: \"#12\"");
    }

    #[test]
    fn buffer_size_message() {
        let err = ImageLoadError::BufferSize {
            expected: 16,
            actual: 12,
        };
        assert_eq!(err.to_string(), "rgba buffer holds 12 bytes, expected 16");
    }
}
