//! JavaScript bindings for browser front-ends.
//!
//! # Feature Flag
//!
//! This module is only available with the `wasm` feature enabled:
//!
//! ```toml
//! [dependencies]
//! brand-palette = { version = "0.1", features = ["wasm"] }
//! ```
//!
//! # Example (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { extractColors, suggestRoles, generatePalettes } from 'brand-palette';
//!
//! await init();
//!
//! const ctx = canvas.getContext('2d');
//! const { data } = ctx.getImageData(0, 0, canvas.width, canvas.height);
//! const colors = extractColors(new Uint8Array(data.buffer), canvas.width, canvas.height, 8);
//!
//! const roles = suggestRoles([colors], 'it');
//! if (roles) {
//!   brand.primary = roles.primary;
//!   brand.secondary = roles.secondary;
//!   brand.accent = roles.accent;
//! }
//!
//! const { palettes, swatches } = generatePalettes(brand, 'it');
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::brand::BrandRecord;
use crate::color::Locale;
use crate::extract::{ExtractionOptions, SampledColor, extract_colors};
use crate::generator::generate_palettes;
use crate::roles::assign_roles;
use crate::source::{extract_colors_from_bytes, from_raw_rgba};

// ============================================================================
// Helpers
// ============================================================================

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Failed to serialize result: {}", e)))
}

/// Parses `"it"`/`"en"`; `undefined` means the default locale.
fn parse_locale(locale: Option<String>) -> Result<Locale, JsError> {
    match locale {
        None => Ok(Locale::default()),
        Some(code) => Locale::from_code(&code)
            .ok_or_else(|| JsError::new(&format!("Unknown locale {:?}, expected \"it\" or \"en\"", code))),
    }
}

fn options_for(count: Option<usize>) -> ExtractionOptions {
    match count {
        Some(count) => ExtractionOptions::default().with_count(count),
        None => ExtractionOptions::default(),
    }
}

// ============================================================================
// Exports
// ============================================================================

/// Extracts dominant colors from canvas `ImageData` pixels (RGBA8).
///
/// # Arguments
///
/// * `rgba` - Raw pixel bytes, `width * height * 4` long
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `count` - Maximum number of colors (defaults to 8)
#[wasm_bindgen(js_name = "extractColors")]
pub fn extract_colors_js(
    rgba: Vec<u8>,
    width: u32,
    height: u32,
    count: Option<usize>,
) -> Result<JsValue, JsError> {
    let image = from_raw_rgba(width, height, rgba).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&extract_colors(&image, &options_for(count)))
}

/// Decodes an encoded image (PNG, JPEG, ...) and extracts its dominant colors.
#[wasm_bindgen(js_name = "extractColorsFromBytes")]
pub fn extract_colors_from_bytes_js(bytes: &[u8], count: Option<usize>) -> Result<JsValue, JsError> {
    let colors = extract_colors_from_bytes(bytes, &options_for(count))
        .map_err(|e| JsError::new(&format!("Failed to decode image: {}", e)))?;
    to_js(&colors)
}

/// Suggests brand roles from an array of per-image color lists.
///
/// Returns `null` when there are not enough chromatic colors.
#[wasm_bindgen(js_name = "suggestRoles")]
pub fn suggest_roles_js(colors_per_image: JsValue, locale: Option<String>) -> Result<JsValue, JsError> {
    let per_image: Vec<Vec<SampledColor>> = serde_wasm_bindgen::from_value(colors_per_image)
        .map_err(|e| JsError::new(&format!("Invalid color lists: {}", e)))?;

    match assign_roles(&per_image, parse_locale(locale)?) {
        Some(suggestion) => to_js(&suggestion),
        None => Ok(JsValue::NULL),
    }
}

/// Generates the four palette templates and the swatch list for a brand.
#[wasm_bindgen(js_name = "generatePalettes")]
pub fn generate_palettes_js(brand: JsValue, locale: Option<String>) -> Result<JsValue, JsError> {
    let brand: BrandRecord = serde_wasm_bindgen::from_value(brand)
        .map_err(|e| JsError::new(&format!("Invalid brand record: {}", e)))?;
    to_js(&generate_palettes(&brand, parse_locale(locale)?))
}

/// Returns the demo brand record.
#[wasm_bindgen(js_name = "demoBrand")]
pub fn demo_brand_js() -> Result<JsValue, JsError> {
    to_js(&BrandRecord::demo())
}
