//! brand-palette: brand color derivation for social media templates
//!
//! This crate extracts dominant colors from reference images, suggests
//! primary/secondary/accent brand roles from them, and expands a brand into
//! four ready-to-use palette templates plus a consolidated swatch list.
//!
//! # Example
//!
//! ```
//! use brand_palette::{BrandRecord, Locale, PaletteKind, PaletteGenerator};
//!
//! let brand = BrandRecord::demo();
//! let generated = PaletteGenerator::new(Locale::English).generate(&brand);
//!
//! let promo = generated.palette(PaletteKind::Promo).unwrap();
//! assert_eq!(promo.header_background.to_string(), "#2B1A54");
//! ```
//!
//! # Suggesting Roles
//!
//! Roles are suggested from the colors of one or more reference images
//! (logos, brand sheets, product photos):
//!
//! ```
//! use brand_palette::{ExtractionOptions, Locale, assign_roles, extract_colors};
//! use image::{Rgba, RgbaImage};
//!
//! let logo = RgbaImage::from_fn(40, 20, |x, _| {
//!     if x < 20 { Rgba([43, 26, 84, 255]) } else { Rgba([42, 172, 226, 255]) }
//! });
//!
//! let colors = extract_colors(&logo, &ExtractionOptions::default());
//! let roles = assign_roles(&[colors], Locale::English).unwrap();
//! assert_eq!(roles.primary.hex.to_string(), "#2B1A54");
//! ```
//!
//! # Color Utilities
//!
//! ```
//! use brand_palette::{color::ops, parse_hex};
//!
//! let blue = parse_hex("#2AACE2").unwrap();
//! let dark = ops::darken(blue, 25.0);
//! assert!(!ops::is_light(dark));
//! ```

#![warn(missing_docs)]

pub mod color;
pub mod studio;

mod brand;
mod error;
mod extract;
mod generator;
mod roles;
mod source;

#[cfg(feature = "wasm")]
mod wasm;

pub use brand::{BrandColor, BrandRecord};
pub use color::{
    HexColor, HslColor, Locale, color_name, hex_to_hsl, hsl_to_hex, hue_distance, parse_hex,
};
pub use error::{ColorError, ImageLoadError};
pub use extract::{
    BackgroundFilter, DominantColorExtractor, ExtractionOptions, PixelFilter, SampledColor,
    extract_colors, luma,
};
pub use generator::{
    AccentBlock, CLEAN_WHITE, COOL_WHITE, DerivedTones, GeneratedPalettes, PaletteGenerator,
    PaletteKind, PaletteSpec, SwatchEntry, TECH_WHITE, WARM_WHITE, generate_palettes,
};
pub use roles::{
    CHROMATIC_SATURATION, DEFAULT_ACCENT, RoleAssigner, RoleSuggestion, assign_roles,
    merge_sampled,
};
pub use source::{decode_image, extract_colors_from_bytes, from_raw_rgba, open_image};
