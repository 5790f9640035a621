//! Color representation and hex/HSL conversion.
//!
//! [`HexColor`] is the canonical form used everywhere in the crate. It always
//! formats as an uppercase, zero-padded `#RRGGBB` string. [`HslColor`] is the
//! derived representation used by the color operators and heuristics, with
//! hue in degrees `[0, 360)` and saturation/lightness in percent `[0, 100]`.

pub mod naming;
pub mod ops;

pub use naming::{Locale, color_name};
pub use ops::{blend, darken, is_light, lighten, set_lightness, set_saturation, text_on};

use std::fmt;
use std::str::FromStr;

use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

// ============================================================================
// HexColor
// ============================================================================

/// An opaque sRGB color whose wire form is `#RRGGBB`.
///
/// Construct one with [`HexColor::from_rgb`] or by parsing a string:
///
/// ```
/// use brand_palette::HexColor;
///
/// let purple: HexColor = "2b1a54".parse().unwrap();
/// assert_eq!(purple.to_string(), "#2B1A54");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Pure white, `#FFFFFF`.
    pub const WHITE: Self = Self::from_rgb(0xFF, 0xFF, 0xFF);

    /// Creates a color from 8-bit channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the `(r, g, b)` channels.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Converts to HSL using the standard max/min channel formulas.
    ///
    /// Achromatic colors (all channels equal) yield hue and saturation 0.
    pub fn to_hsl(self) -> HslColor {
        let rgb: Srgb<f64> = Srgb::new(self.r, self.g, self.b).into_format();
        let hsl: Hsl<palette::encoding::Srgb, f64> = rgb.into_color();

        HslColor {
            hue: hsl.hue.into_positive_degrees() % 360.0,
            saturation: hsl.saturation * 100.0,
            lightness: hsl.lightness * 100.0,
        }
    }

    /// Converts an HSL triple back to the nearest 8-bit color.
    ///
    /// Any hue is accepted and wrapped onto the color wheel. Saturation and
    /// lightness are clamped to `[0, 100]`.
    pub fn from_hsl(hsl: HslColor) -> Self {
        let hsl = Hsl::<palette::encoding::Srgb, f64>::new(
            hsl.hue,
            hsl.saturation.clamp(0.0, 100.0) / 100.0,
            hsl.lightness.clamp(0.0, 100.0) / 100.0,
        );
        let rgb: Srgb<f64> = hsl.into_color();

        Self {
            r: unit_to_channel(rgb.red),
            g: unit_to_channel(rgb.green),
            b: unit_to_channel(rgb.blue),
        }
    }

    /// Euclidean distance between two colors in RGB space.
    pub fn distance(self, other: Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

fn unit_to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_hex(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "jsonschema")]
impl schemars::JsonSchema for HexColor {
    fn schema_name() -> String {
        "HexColor".to_owned()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        <String as schemars::JsonSchema>::json_schema(generator)
    }
}

/// Parses a 6-digit hex color, case-insensitive, with an optional leading `#`.
pub fn parse_hex(input: &str) -> Result<HexColor, ColorError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::invalid(input));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::invalid(input))
    };

    Ok(HexColor::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

// ============================================================================
// HslColor
// ============================================================================

/// A color in HSL coordinates.
///
/// Hue is in degrees, saturation and lightness are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct HslColor {
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Saturation in percent, `[0, 100]`.
    pub saturation: f64,
    /// Lightness in percent, `[0, 100]`.
    pub lightness: f64,
}

impl HslColor {
    /// Creates a color from hue degrees and saturation/lightness percentages.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// Parses a hex string and converts it to HSL.
pub fn hex_to_hsl(hex: &str) -> Result<HslColor, ColorError> {
    parse_hex(hex).map(HexColor::to_hsl)
}

/// Converts an HSL triple to its canonical hex color.
pub fn hsl_to_hex(hsl: HslColor) -> HexColor {
    HexColor::from_hsl(hsl)
}

/// Circular distance between two hues, in degrees `[0, 180]`.
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    diff.min(360.0 - diff)
}

// ============================================================================
// Tests
// ============================================================================
