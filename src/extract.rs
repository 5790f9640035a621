//! Dominant color extraction from decoded RGBA pixel buffers.
//!
//! The extractor works in five steps:
//!
//! 1. Downscale so the longer side is at most [`ExtractionOptions::max_dimension`].
//! 2. Drop pixels rejected by the [`PixelFilter`]s (transparent, near-white, near-black).
//! 3. Quantize the remaining pixels into buckets on a fixed grid, accumulating
//!    per-bucket channel sums and hit counts.
//! 4. Rank buckets by hit count and average each candidate bucket.
//! 5. Greedily keep candidates that are far enough from every color kept so far.
//!
//! # Example
//!
//! ```
//! use brand_palette::{ExtractionOptions, extract_colors};
//! use image::RgbaImage;
//!
//! let image = RgbaImage::from_pixel(4, 4, image::Rgba([242, 101, 34, 255]));
//! let colors = extract_colors(&image, &ExtractionOptions::default());
//!
//! assert_eq!(colors.len(), 1);
//! assert_eq!(colors[0].hex.to_string(), "#F26522");
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

use image::RgbaImage;
use image::imageops::{self, FilterType};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::color::{HexColor, HslColor};

// ============================================================================
// ExtractionOptions
// ============================================================================

/// Tuning knobs for [`DominantColorExtractor`].
///
/// Serializes to camelCase JSON; missing fields take their defaults.
///
/// ```json
/// { "count": 8, "maxDimension": 150, "bucketSize": 24, "minDistance": 40.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractionOptions {
    /// Maximum number of colors returned.
    pub count: usize,
    /// Longer side of the sampled image, in pixels. `0` disables downscaling.
    pub max_dimension: u32,
    /// Pixels with alpha below this value are ignored.
    pub alpha_threshold: u8,
    /// Pixels with luma below this value are treated as ink and ignored.
    pub luma_min: f64,
    /// Pixels with luma above this value are treated as paper and ignored.
    pub luma_max: f64,
    /// Grid step used to quantize each channel.
    pub bucket_size: u8,
    /// Number of ranked buckets considered per requested color.
    pub candidate_factor: usize,
    /// Minimum RGB distance between two returned colors.
    pub min_distance: f64,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            count: 8,
            max_dimension: 150,
            alpha_threshold: 128,
            luma_min: 10.0,
            luma_max: 245.0,
            bucket_size: 24,
            candidate_factor: 4,
            min_distance: 40.0,
        }
    }
}

impl ExtractionOptions {
    /// Sets the number of colors to return.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the sampling size bound. `0` samples at native resolution.
    pub fn with_max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    /// Sets the minimum distance between returned colors.
    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Serializes the options to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Pixel Filters
// ============================================================================

/// Decides whether a pixel takes part in quantization.
///
/// Every filter added to a [`DominantColorExtractor`] must allow a pixel for
/// it to be counted.
pub trait PixelFilter: Send + Sync {
    /// Returns true if the `[r, g, b, a]` pixel should be counted.
    fn is_allowed(&self, rgba: [u8; 4]) -> bool;
}

/// Rejects translucent pixels and pixels close to white or black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundFilter {
    /// Minimum alpha for a pixel to count.
    pub alpha_threshold: u8,
    /// Lowest accepted luma.
    pub luma_min: f64,
    /// Highest accepted luma.
    pub luma_max: f64,
}

impl BackgroundFilter {
    /// Copies the thresholds out of `options`.
    pub fn from_options(options: &ExtractionOptions) -> Self {
        Self {
            alpha_threshold: options.alpha_threshold,
            luma_min: options.luma_min,
            luma_max: options.luma_max,
        }
    }
}

impl PixelFilter for BackgroundFilter {
    fn is_allowed(&self, [r, g, b, a]: [u8; 4]) -> bool {
        if a < self.alpha_threshold {
            return false;
        }
        let luma = luma(r, g, b);
        luma >= self.luma_min && luma <= self.luma_max
    }
}

/// Rec. 601 luma in 0-255 space.
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
}

// ============================================================================
// SampledColor
// ============================================================================

/// A representative color found in an image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SampledColor {
    /// Mean color of the bucket.
    pub hex: HexColor,
    /// Number of sampled pixels that fell into the bucket.
    pub count: u32,
    /// HSL decomposition of `hex`.
    pub hsl: HslColor,
}

impl SampledColor {
    /// Creates a sample, deriving its HSL from `hex`.
    pub fn new(hex: HexColor, count: u32) -> Self {
        Self {
            hex,
            count,
            hsl: hex.to_hsl(),
        }
    }
}

// ============================================================================
// DominantColorExtractor
// ============================================================================

#[derive(Debug, Default)]
struct Bucket {
    red: u64,
    green: u64,
    blue: u64,
    count: u32,
}

impl Bucket {
    fn add(&mut self, r: u8, g: u8, b: u8) {
        self.red += u64::from(r);
        self.green += u64::from(g);
        self.blue += u64::from(b);
        self.count += 1;
    }

    fn mean(&self) -> HexColor {
        let count = u64::from(self.count);
        let avg = |sum: u64| ((sum + count / 2) / count) as u8;
        HexColor::from_rgb(avg(self.red), avg(self.green), avg(self.blue))
    }
}

/// Extracts a ranked, deduplicated list of dominant colors.
///
/// Extraction holds no state between calls, so one extractor may be shared
/// across threads, or one built per image.
pub struct DominantColorExtractor {
    options: ExtractionOptions,
    filters: Vec<Box<dyn PixelFilter>>,
}

impl DominantColorExtractor {
    /// Creates an extractor with a [`BackgroundFilter`] derived from `options`.
    pub fn new(options: ExtractionOptions) -> Self {
        let background = BackgroundFilter::from_options(&options);
        Self {
            options,
            filters: vec![Box::new(background)],
        }
    }

    /// Adds a filter; pixels must pass every filter to be counted.
    pub fn add_filter(mut self, filter: impl PixelFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Options this extractor was built with.
    pub fn options(&self) -> &ExtractionOptions {
        &self.options
    }

    /// Runs extraction on a decoded image.
    ///
    /// Returns an empty list when no pixel survives filtering.
    pub fn extract(&self, image: &RgbaImage) -> Vec<SampledColor> {
        let options = &self.options;
        if options.count == 0 || image.width() == 0 || image.height() == 0 {
            return Vec::new();
        }

        let sampled = downscale(image, options.max_dimension);
        let buckets = self.quantize(&sampled);
        if buckets.is_empty() {
            debug!(
                width = image.width(),
                height = image.height(),
                "no pixels survived filtering"
            );
            return Vec::new();
        }

        let candidates = buckets
            .iter()
            .take(options.candidate_factor.max(1).saturating_mul(options.count))
            .map(|bucket| SampledColor::new(bucket.mean(), bucket.count));

        let mut kept: Vec<SampledColor> = Vec::with_capacity(options.count.min(buckets.len()));
        for candidate in candidates {
            let too_close = kept
                .iter()
                .any(|existing| existing.hex.distance(candidate.hex) < options.min_distance);
            if too_close {
                trace!(color = %candidate.hex, "dropping near-duplicate candidate");
                continue;
            }
            kept.push(candidate);
            if kept.len() >= options.count {
                break;
            }
        }

        debug!(
            buckets = buckets.len(),
            colors = kept.len(),
            "extracted dominant colors"
        );
        kept
    }

    /// Groups allowed pixels into grid buckets, ranked by hit count.
    ///
    /// Buckets with equal counts keep first-seen order.
    fn quantize(&self, image: &RgbaImage) -> Vec<Bucket> {
        let step = u32::from(self.options.bucket_size.max(1));
        let grid = |c: u8| (2 * u32::from(c) + step) / (2 * step);

        let mut index: HashMap<[u32; 3], usize> = HashMap::new();
        let mut buckets: Vec<Bucket> = Vec::new();
        let mut filtered = 0usize;

        for pixel in image.pixels() {
            let rgba = pixel.0;
            if !self.filters.iter().all(|f| f.is_allowed(rgba)) {
                filtered += 1;
                continue;
            }
            let [r, g, b, _] = rgba;
            let slot = *index.entry([grid(r), grid(g), grid(b)]).or_insert_with(|| {
                buckets.push(Bucket::default());
                buckets.len() - 1
            });
            buckets[slot].add(r, g, b);
        }

        trace!(filtered, buckets = buckets.len(), "quantized pixels");
        buckets.sort_by(|a, b| b.count.cmp(&a.count));
        buckets
    }
}

/// Extracts dominant colors with a default-configured extractor.
pub fn extract_colors(image: &RgbaImage, options: &ExtractionOptions) -> Vec<SampledColor> {
    DominantColorExtractor::new(options.clone()).extract(image)
}

/// Shrinks the image so its longer side fits `max_dimension`, keeping aspect ratio.
///
/// Resampling runs on premultiplied alpha so transparent pixels do not bleed
/// their (usually black) color into opaque neighbours.
fn downscale(image: &RgbaImage, max_dimension: u32) -> Cow<'_, RgbaImage> {
    let (width, height) = image.dimensions();
    if max_dimension == 0 || width.max(height) <= max_dimension {
        return Cow::Borrowed(image);
    }

    let ratio = f64::from(max_dimension) / f64::from(width.max(height));
    let scaled_w = ((f64::from(width) * ratio).round() as u32).max(1);
    let scaled_h = ((f64::from(height) * ratio).round() as u32).max(1);
    trace!(width, height, scaled_w, scaled_h, "downscaling before sampling");

    let resized = imageops::resize(&premultiply(image), scaled_w, scaled_h, FilterType::Triangle);
    Cow::Owned(unpremultiply(resized))
}

fn premultiply(image: &RgbaImage) -> RgbaImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let scale = |c: u8| ((u32::from(c) * u32::from(a) + 127) / 255) as u8;
        pixel.0 = [scale(r), scale(g), scale(b), a];
    }
    out
}

fn unpremultiply(mut image: RgbaImage) -> RgbaImage {
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            pixel.0 = [0, 0, 0, 0];
            continue;
        }
        let alpha = u32::from(a);
        let scale = |c: u8| ((u32::from(c) * 255 + alpha / 2) / alpha).min(255) as u8;
        pixel.0 = [scale(r), scale(g), scale(b), a];
    }
    image
}

// ============================================================================
// Tests
// ============================================================================
