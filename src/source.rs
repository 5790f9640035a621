//! Loading pixel buffers for extraction.
//!
//! Extraction works on decoded [`RgbaImage`] buffers. These helpers turn
//! encoded image bytes, files on disk, or raw RGBA data (e.g. from a browser
//! canvas) into such buffers.

use std::fs;
use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::error::ImageLoadError;
use crate::extract::{ExtractionOptions, SampledColor, extract_colors};

/// Decodes PNG, JPEG or any other format enabled in `image`.
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, ImageLoadError> {
    let image = image::load_from_memory(bytes)?.into_rgba8();
    ensure_non_empty(image)
}

/// Reads and decodes an image file.
pub fn open_image(path: &Path) -> Result<RgbaImage, ImageLoadError> {
    let bytes = fs::read(path).map_err(|source| ImageLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read image file");
    decode_image(&bytes)
}

/// Wraps a raw RGBA8 buffer of `width * height * 4` bytes.
pub fn from_raw_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<RgbaImage, ImageLoadError> {
    if width == 0 || height == 0 {
        return Err(ImageLoadError::EmptyImage { width, height });
    }

    let expected = width as usize * height as usize * 4;
    let actual = data.len();
    RgbaImage::from_raw(width, height, data).ok_or(ImageLoadError::BufferSize { expected, actual })
}

/// Decodes `bytes` and extracts its dominant colors.
pub fn extract_colors_from_bytes(
    bytes: &[u8],
    options: &ExtractionOptions,
) -> Result<Vec<SampledColor>, ImageLoadError> {
    let image = decode_image(bytes)?;
    Ok(extract_colors(&image, options))
}

fn ensure_non_empty(image: RgbaImage) -> Result<RgbaImage, ImageLoadError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageLoadError::EmptyImage { width, height });
    }
    Ok(image)
}
