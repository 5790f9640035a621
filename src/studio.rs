//! End-to-end flow: reference images to role suggestion to brand palettes.
//!
//! # Example
//!
//! ```
//! use brand_palette::{BrandRecord, ExtractionOptions, Locale, studio};
//! use image::{Rgba, RgbaImage};
//!
//! let logo = RgbaImage::from_fn(30, 30, |_, y| match y / 10 {
//!     0 => Rgba([43, 26, 84, 255]),
//!     1 => Rgba([42, 172, 226, 255]),
//!     _ => Rgba([242, 101, 34, 255]),
//! });
//!
//! let mut brand = BrandRecord::new("Acme");
//! let suggestion =
//!     studio::suggest_from_images(&[logo], &ExtractionOptions::default(), Locale::English);
//! if let Some(suggestion) = suggestion {
//!     brand.apply_suggestion(suggestion);
//! }
//! assert!(brand.is_complete());
//! ```

use std::num::NonZeroUsize;
use std::panic;
use std::thread;

use image::RgbaImage;
use tracing::debug;

use crate::brand::BrandRecord;
use crate::color::Locale;
use crate::extract::{ExtractionOptions, SampledColor, extract_colors};
use crate::generator::{GeneratedPalettes, generate_palettes};
use crate::roles::{RoleSuggestion, assign_roles};

/// Extracts every image in parallel, keeping input order.
///
/// Uses at most one worker thread per available core.
pub fn extract_all(images: &[RgbaImage], options: &ExtractionOptions) -> Vec<Vec<SampledColor>> {
    let workers = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    extract_with_workers(images, options, workers)
}

fn extract_with_workers(
    images: &[RgbaImage],
    options: &ExtractionOptions,
    workers: usize,
) -> Vec<Vec<SampledColor>> {
    let workers = workers.clamp(1, images.len().max(1));
    if workers == 1 {
        return images.iter().map(|image| extract_colors(image, options)).collect();
    }

    let chunk_size = images.len().div_ceil(workers);
    debug!(images = images.len(), workers, chunk_size, "extracting in parallel");

    thread::scope(|scope| {
        let handles: Vec<_> = images
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|image| extract_colors(image, options))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    })
}

/// Suggests brand roles from a set of reference images.
///
/// Returns `None` when the images do not hold two usable chromatic colors.
pub fn suggest_from_images(
    images: &[RgbaImage],
    options: &ExtractionOptions,
    locale: Locale,
) -> Option<RoleSuggestion> {
    let per_image = extract_all(images, options);
    debug!(
        images = images.len(),
        colors = per_image.iter().map(Vec::len).sum::<usize>(),
        "analyzed reference images"
    );
    assign_roles(&per_image, locale)
}

/// Builds a complete brand record for `client_name` from reference images.
pub fn brand_from_images(
    client_name: &str,
    images: &[RgbaImage],
    options: &ExtractionOptions,
    locale: Locale,
) -> Option<BrandRecord> {
    let suggestion = suggest_from_images(images, options, locale)?;
    let mut brand = BrandRecord::new(client_name);
    brand.apply_suggestion(suggestion);
    Some(brand)
}

/// Runs the whole flow. Returns an empty result when no roles could be assigned.
pub fn palettes_from_images(
    client_name: &str,
    images: &[RgbaImage],
    options: &ExtractionOptions,
    locale: Locale,
) -> GeneratedPalettes {
    brand_from_images(client_name, images, options, locale)
        .map(|brand| generate_palettes(&brand, locale))
        .unwrap_or_default()
}
