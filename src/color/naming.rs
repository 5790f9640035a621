//! Descriptive, localized color names.
//!
//! Names are built from a fixed lookup table: a hue family plus a lightness
//! modifier, or a lightness band for near-neutral colors. The table must not
//! change between releases, since suggested names are shown to users and
//! persisted with brand records.

use serde::{Deserialize, Serialize};

use super::HexColor;

/// Saturation below which a color is named as a neutral.
const NEUTRAL_SATURATION: f64 = 10.0;

/// Language used for generated names, labels and descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum Locale {
    /// Italian, the default.
    #[default]
    #[serde(rename = "it")]
    Italian,
    /// English.
    #[serde(rename = "en")]
    English,
}

impl Locale {
    /// Parses a language code, `"it"` or `"en"`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "it" => Some(Self::Italian),
            "en" => Some(Self::English),
            _ => None,
        }
    }
}

/// One of the eight named hue families, in hue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum HueFamily {
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Blue,
    Violet,
    Magenta,
}

/// Upper hue bound (exclusive) of each family. Red also covers `[345, 360)`.
const HUE_TABLE: [(f64, HueFamily); 8] = [
    (15.0, HueFamily::Red),
    (45.0, HueFamily::Orange),
    (70.0, HueFamily::Yellow),
    (165.0, HueFamily::Green),
    (195.0, HueFamily::Teal),
    (255.0, HueFamily::Blue),
    (290.0, HueFamily::Violet),
    (345.0, HueFamily::Magenta),
];

impl HueFamily {
    /// Buckets a hue in degrees. Values outside `[0, 360)` are wrapped first.
    pub fn from_hue(hue: f64) -> Self {
        let hue = hue.rem_euclid(360.0);
        HUE_TABLE
            .iter()
            .find(|(upper, _)| hue < *upper)
            .map(|(_, family)| *family)
            .unwrap_or(HueFamily::Red)
    }

    fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => match self {
                Self::Red => "Red",
                Self::Orange => "Orange",
                Self::Yellow => "Yellow",
                Self::Green => "Green",
                Self::Teal => "Teal",
                Self::Blue => "Blue",
                Self::Violet => "Violet",
                Self::Magenta => "Magenta",
            },
            Locale::Italian => match self {
                Self::Red => "Rosso",
                Self::Orange => "Arancione",
                Self::Yellow => "Giallo",
                Self::Green => "Verde",
                Self::Teal => "Turchese",
                Self::Blue => "Blu",
                Self::Violet => "Viola",
                Self::Magenta => "Magenta",
            },
        }
    }
}

fn neutral_label(lightness: f64, locale: Locale) -> &'static str {
    let band = if lightness > 85.0 {
        0
    } else if lightness > 60.0 {
        1
    } else if lightness > 30.0 {
        2
    } else {
        3
    };

    match locale {
        Locale::English => ["Off White", "Light Gray", "Gray", "Charcoal"][band],
        Locale::Italian => ["Bianco Sporco", "Grigio Chiaro", "Grigio", "Antracite"][band],
    }
}

fn lightness_modifier(lightness: f64, locale: Locale) -> Option<&'static str> {
    let index = if lightness < 25.0 {
        0
    } else if lightness < 40.0 {
        1
    } else if lightness > 80.0 {
        2
    } else {
        return None;
    };

    Some(match locale {
        Locale::English => ["Dark", "Deep", "Light"][index],
        Locale::Italian => ["Scuro", "Profondo", "Chiaro"][index],
    })
}

/// Returns a descriptive name such as `"Deep Violet"` or `"Blu Chiaro"`.
pub fn color_name(color: HexColor, locale: Locale) -> String {
    let hsl = color.to_hsl();
    if hsl.saturation < NEUTRAL_SATURATION {
        return neutral_label(hsl.lightness, locale).to_string();
    }

    let family = HueFamily::from_hue(hsl.hue).label(locale);
    match (lightness_modifier(hsl.lightness, locale), locale) {
        (None, _) => family.to_string(),
        (Some(modifier), Locale::English) => format!("{modifier} {family}"),
        (Some(modifier), Locale::Italian) => format!("{family} {modifier}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{HslColor, parse_hex};

    fn name(s: &str, locale: Locale) -> String {
        color_name(parse_hex(s).unwrap(), locale)
    }

    #[test]
    fn hue_family_boundaries() {
        assert_eq!(HueFamily::from_hue(0.0), HueFamily::Red);
        assert_eq!(HueFamily::from_hue(14.9), HueFamily::Red);
        assert_eq!(HueFamily::from_hue(15.0), HueFamily::Orange);
        assert_eq!(HueFamily::from_hue(45.0), HueFamily::Yellow);
        assert_eq!(HueFamily::from_hue(70.0), HueFamily::Green);
        assert_eq!(HueFamily::from_hue(165.0), HueFamily::Teal);
        assert_eq!(HueFamily::from_hue(195.0), HueFamily::Blue);
        assert_eq!(HueFamily::from_hue(255.0), HueFamily::Violet);
        assert_eq!(HueFamily::from_hue(290.0), HueFamily::Magenta);
        assert_eq!(HueFamily::from_hue(345.0), HueFamily::Red);
        assert_eq!(HueFamily::from_hue(359.9), HueFamily::Red);
        assert_eq!(HueFamily::from_hue(-10.0), HueFamily::Red);
    }

    #[test]
    fn brand_colors_get_stable_names() {
        // #2B1A54: hue ~258, lightness ~22
        assert_eq!(name("#2B1A54", Locale::English), "Dark Violet");
        assert_eq!(name("#2B1A54", Locale::Italian), "Viola Scuro");
        // #2AACE2: hue ~198, lightness ~53
        assert_eq!(name("#2AACE2", Locale::English), "Blue");
        // #F26522: hue ~20, lightness ~54
        assert_eq!(name("#F26522", Locale::Italian), "Arancione");
    }

    #[test]
    fn lightness_modifiers() {
        let deep = HexColor::from_hsl(HslColor::new(120.0, 60.0, 32.0));
        assert_eq!(color_name(deep, Locale::English), "Deep Green");

        let light = HexColor::from_hsl(HslColor::new(120.0, 60.0, 88.0));
        assert_eq!(color_name(light, Locale::Italian), "Verde Chiaro");
    }

    #[test]
    fn neutrals_use_lightness_bands() {
        assert_eq!(name("#FFFFFF", Locale::English), "Off White");
        assert_eq!(name("#B0B0B0", Locale::English), "Light Gray");
        assert_eq!(name("#808080", Locale::Italian), "Grigio");
        assert_eq!(name("#202020", Locale::Italian), "Antracite");
    }

    #[test]
    fn locale_from_code_rejects_unknown_languages() {
        assert_eq!(Locale::from_code("it"), Some(Locale::Italian));
        assert_eq!(Locale::from_code("en"), Some(Locale::English));
        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(Locale::from_code("EN"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn locale_serializes_as_language_code() {
        assert_eq!(serde_json::to_string(&Locale::English).unwrap(), "\"en\"");
        let locale: Locale = serde_json::from_str("\"it\"").unwrap();
        assert_eq!(locale, Locale::Italian);
    }
}
