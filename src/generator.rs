//! Expansion of a brand record into four social-media palette templates.
//!
//! Every template fills the same card layout (header, badge, left caption
//! region, right region with two accent blocks) with a different mix of the
//! brand colors and tones derived from them:
//!
//! | Kind            | Layout                                            |
//! |-----------------|---------------------------------------------------|
//! | `informational` | light neutral card for informative posts          |
//! | `directory`     | secondary-tinted light card for recurring series  |
//! | `carousel`      | neutral card that leaves room for photography     |
//! | `promo`         | dark high-contrast card with an accent CTA block  |
//!
//! Generation is a pure function of the [`BrandRecord`] and the [`Locale`]:
//! identical inputs produce identical output.
//!
//! # Example
//!
//! ```
//! use brand_palette::{BrandRecord, Locale, generate_palettes};
//!
//! let generated = generate_palettes(&BrandRecord::demo(), Locale::English);
//! assert_eq!(generated.palettes.len(), 4);
//! assert_eq!(generated.swatches.len(), 8);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::brand::{BrandColor, BrandRecord};
use crate::color::{HexColor, Locale, blend, darken, lighten, set_lightness, text_on};

/// Warm off-white used behind headers.
pub const WARM_WHITE: HexColor = HexColor::from_rgb(0xFF, 0xF5, 0xE0);
/// Neutral "tech" off-white used behind technical content.
pub const TECH_WHITE: HexColor = HexColor::from_rgb(0xF5, 0xF5, 0xF7);
/// Cooler off-white used for right-hand regions.
pub const COOL_WHITE: HexColor = HexColor::from_rgb(0xF0, 0xF1, 0xF4);
/// Near-white used behind photography.
pub const CLEAN_WHITE: HexColor = HexColor::from_rgb(0xF8, 0xF8, 0xFA);

// ============================================================================
// Output Types
// ============================================================================

/// Which of the four templates a [`PaletteSpec`] fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// Light neutral layout for informative posts.
    Informational,
    /// Secondary-tinted layout for recurring series ("rubriche").
    Directory,
    /// Neutral layout that leaves room for photography.
    Carousel,
    /// Dark high-contrast layout with an accent call to action.
    Promo,
}

impl PaletteKind {
    /// All kinds, in output order.
    pub const ALL: [PaletteKind; 4] = [
        PaletteKind::Informational,
        PaletteKind::Directory,
        PaletteKind::Carousel,
        PaletteKind::Promo,
    ];

    /// Display label shown on the card.
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Informational, _) => "Post",
            (Self::Directory, Locale::Italian) => "Rubriche",
            (Self::Directory, Locale::English) => "Series",
            (Self::Carousel, Locale::Italian) => "Carosello",
            (Self::Carousel, Locale::English) => "Carousel",
            (Self::Promo, _) => "Promo",
        }
    }
}

/// A colored block in the right region of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct AccentBlock {
    /// Block fill.
    pub background: HexColor,
    /// Text drawn on `background`.
    pub text: HexColor,
    /// Color name and hex, e.g. `"Wave Blue (#2AACE2)"`.
    pub name: String,
    /// Usage guidance for the color.
    pub description: String,
}

/// One fully resolved card template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PaletteSpec {
    /// Template variant, serialized as `type`.
    #[serde(rename = "type")]
    pub kind: PaletteKind,
    /// Localized display label, also used in export file names.
    pub label: String,
    /// Header strip fill.
    pub header_background: HexColor,
    /// Header title color.
    pub header_text: HexColor,
    /// Badge fill.
    pub badge_background: HexColor,
    /// Badge label color.
    pub badge_text: HexColor,
    /// Left region fill, named by the caption.
    pub left_background: HexColor,
    /// Left region text color.
    pub left_text: HexColor,
    /// Right region fill behind the accent blocks.
    pub right_background: HexColor,
    /// Caption naming the left background, e.g. `"Tech White (#F5F5F7)"`.
    pub caption_name: String,
    /// Usage guidance for the left background.
    pub caption_description: String,
    /// The two blocks shown in the right region.
    pub accents: [AccentBlock; 2],
}

impl PaletteSpec {
    /// File name (without extension) for an exported card.
    pub fn export_file_name(&self, client_name: &str) -> String {
        format!("Palette_{}_{}", self.label, underscore_whitespace(client_name))
    }
}

/// A named color in the consolidated swatch list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct SwatchEntry {
    /// Display name.
    pub name: String,
    /// The color.
    pub hex: HexColor,
}

impl SwatchEntry {
    /// Creates an entry.
    pub fn new(name: impl Into<String>, hex: HexColor) -> Self {
        Self {
            name: name.into(),
            hex,
        }
    }
}

/// The result of one generation call.
///
/// Empty when the brand record is missing a role.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct GeneratedPalettes {
    /// The four templates, in [`PaletteKind::ALL`] order.
    pub palettes: Vec<PaletteSpec>,
    /// The consolidated 8-entry swatch list.
    pub swatches: Vec<SwatchEntry>,
}

impl GeneratedPalettes {
    /// Returns true if nothing was generated.
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty() && self.swatches.is_empty()
    }

    /// Returns the palette of the given kind, if generated.
    pub fn palette(&self, kind: PaletteKind) -> Option<&PaletteSpec> {
        self.palettes.iter().find(|p| p.kind == kind)
    }

    /// File name (without extension) for the exported swatch list.
    pub fn swatch_file_name(client_name: &str) -> String {
        format!("Palette_Completa_{}", underscore_whitespace(client_name))
    }

    /// Serializes the result to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Replaces every run of whitespace with a single underscore.
fn underscore_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

// ============================================================================
// Derived Tones
// ============================================================================

/// Tones derived from the primary and secondary colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedTones {
    /// Secondary at 94% lightness ("Sky Light").
    pub secondary_very_light: HexColor,
    /// Secondary at 88% lightness.
    pub secondary_light: HexColor,
    /// Secondary darkened by 25 ("Dark Secondary").
    pub secondary_dark: HexColor,
    /// Secondary darkened by 35.
    pub secondary_darker: HexColor,
    /// Primary blended 55% toward secondary.
    pub mid_tone: HexColor,
    /// Mid tone darkened by 10 ("Mid Tone").
    pub mid_tone_dark: HexColor,
}

impl DerivedTones {
    /// Derives all tones from the two brand colors.
    pub fn new(primary: HexColor, secondary: HexColor) -> Self {
        let mid_tone = blend(primary, secondary, 0.55);
        Self {
            secondary_very_light: set_lightness(secondary, 94.0),
            secondary_light: set_lightness(secondary, 88.0),
            secondary_dark: darken(secondary, 25.0),
            secondary_darker: darken(secondary, 35.0),
            mid_tone,
            mid_tone_dark: darken(mid_tone, 10.0),
        }
    }
}

// ============================================================================
// Localized Copy
// ============================================================================

struct TemplateCopy {
    sky_light: &'static str,
    clean_white: &'static str,
    dark_brand: &'static str,
    mid_tone: &'static str,
    dark_secondary: &'static str,
    tech_white: &'static str,
    pure_white: &'static str,
    informational: [&'static str; 3],
    directory: [&'static str; 3],
    carousel: [&'static str; 3],
    promo: [&'static str; 3],
}

static ITALIAN: TemplateCopy = TemplateCopy {
    sky_light: "Sky Light",
    clean_white: "Clean White",
    dark_brand: "Dark Brand",
    mid_tone: "Mid Tone",
    dark_secondary: "Dark Secondary",
    tech_white: "Tech White",
    pure_white: "Bianco Puro",
    informational: [
        "Ambiente pulito e professionale: fa leggere bene testi tecnici e numeri, senza \"effetto volantino\". Ideale per post informativi e istituzionali.",
        "Colore primario per titoli, headline e badge. Conferisce autorevolezza e riconoscibilità del brand.",
        "Per icone, separatori, micro-CTA e dettagli grafici. Mantiene coerenza visiva con il brand.",
    ],
    directory: [
        "Evoca chiarezza e ordine: perfetto per contenuti \"spiegati bene\" e caroselli a più slide. Leggibilità massima.",
        "Testo principale: massima leggibilità e serietà su sfondo chiaro. Per titoli e body text.",
        "Solo per step, box informativi e highlight soft. Aggiunge profondità senza staccare dal tono.",
    ],
    carousel: [
        "Lascia spazio a foto reali (installazioni, team, prodotti) e fa risultare il contenuto \"vero\" e pulito. Massima versatilità.",
        "Dà autorevolezza a claim e messaggi di fiducia. Perfetto per headline su slide.",
        "Firma e micro-CTA: \"Scopri di più\", \"Contattaci\". Richiamo cromatico del brand.",
    ],
    promo: [
        "Massimo impatto e serietà. Perfetto per promo \"brevi e chiare\" con CTA diretta: incentivi, sconti, offerte.",
        "Per claim e testo: leggibilità immediata su sfondo scuro. Headline e body text sempre in bianco.",
        "Attira attenzione su prezzo, numero, \"Chiama ora\". Colore d'azione per conversioni.",
    ],
};

static ENGLISH: TemplateCopy = TemplateCopy {
    sky_light: "Sky Light",
    clean_white: "Clean White",
    dark_brand: "Dark Brand",
    mid_tone: "Mid Tone",
    dark_secondary: "Dark Secondary",
    tech_white: "Tech White",
    pure_white: "Pure White",
    informational: [
        "Clean, professional setting: technical copy and figures read well without a \"flyer effect\". Ideal for informative and institutional posts.",
        "Primary color for titles, headlines and badges. Lends authority and brand recognition.",
        "For icons, dividers, micro-CTAs and graphic details. Keeps the brand visually consistent.",
    ],
    directory: [
        "Conveys clarity and order: perfect for well-explained content and multi-slide carousels. Maximum legibility.",
        "Main text: maximum legibility and seriousness on a light background. For titles and body text.",
        "Only for steps, info boxes and soft highlights. Adds depth without breaking the tone.",
    ],
    carousel: [
        "Leaves room for real photos (installations, team, products) and keeps content genuine and clean. Maximum versatility.",
        "Gives authority to claims and trust messages. Perfect for slide headlines.",
        "Signature and micro-CTAs: \"Learn more\", \"Contact us\". A chromatic call-back to the brand.",
    ],
    promo: [
        "Maximum impact and seriousness. Perfect for short, clear promos with a direct CTA: incentives, discounts, offers.",
        "For claims and copy: instant legibility on a dark background. Headlines and body text always in white.",
        "Draws attention to price, number, \"Call now\". The action color for conversions.",
    ],
};

fn copy_for(locale: Locale) -> &'static TemplateCopy {
    match locale {
        Locale::Italian => &ITALIAN,
        Locale::English => &ENGLISH,
    }
}

fn labelled(name: &str, hex: HexColor) -> String {
    format!("{name} ({hex})")
}

// ============================================================================
// PaletteGenerator
// ============================================================================

/// Builds [`GeneratedPalettes`] from brand records.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteGenerator {
    locale: Locale,
}

impl PaletteGenerator {
    /// Creates a generator writing labels and descriptions in `locale`.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Generates the four templates and the swatch list.
    ///
    /// Returns an empty result if any of the three roles is missing.
    pub fn generate(&self, brand: &BrandRecord) -> GeneratedPalettes {
        let Some((primary, secondary, accent)) = brand.roles() else {
            debug!(client = %brand.client_name, "brand record incomplete, skipping palettes");
            return GeneratedPalettes::default();
        };

        let tones = DerivedTones::new(primary.hex, secondary.hex);
        let copy = copy_for(self.locale);
        let roles = Roles {
            primary,
            secondary,
            accent,
        };

        let palettes = vec![
            self.informational(&roles, copy),
            self.directory(&roles, &tones, copy),
            self.carousel(&roles, &tones, copy),
            self.promo(&roles, &tones, copy),
        ];

        let swatches = vec![
            SwatchEntry::new(&primary.name, primary.hex),
            SwatchEntry::new(copy.dark_secondary, tones.secondary_dark),
            SwatchEntry::new(copy.mid_tone, tones.mid_tone_dark),
            SwatchEntry::new(&secondary.name, secondary.hex),
            SwatchEntry::new(copy.sky_light, tones.secondary_very_light),
            SwatchEntry::new(&accent.name, accent.hex),
            SwatchEntry::new(copy.tech_white, TECH_WHITE),
            SwatchEntry::new(copy.pure_white, HexColor::WHITE),
        ];

        debug!(client = %brand.client_name, palettes = palettes.len(), "generated palettes");
        GeneratedPalettes { palettes, swatches }
    }

    fn informational(&self, roles: &Roles<'_>, copy: &TemplateCopy) -> PaletteSpec {
        let kind = PaletteKind::Informational;
        let [caption, first, second] = copy.informational;
        PaletteSpec {
            kind,
            label: kind.label(self.locale).to_string(),
            header_background: WARM_WHITE,
            header_text: roles.primary.hex,
            badge_background: roles.primary.hex,
            badge_text: HexColor::WHITE,
            left_background: TECH_WHITE,
            left_text: roles.primary.hex,
            right_background: COOL_WHITE,
            caption_name: labelled(copy.tech_white, TECH_WHITE),
            caption_description: caption.to_string(),
            accents: [
                AccentBlock {
                    background: roles.primary.hex,
                    text: HexColor::WHITE,
                    name: labelled(&roles.primary.name, roles.primary.hex),
                    description: first.to_string(),
                },
                brand_block(roles.secondary, second),
            ],
        }
    }

    fn directory(&self, roles: &Roles<'_>, tones: &DerivedTones, copy: &TemplateCopy) -> PaletteSpec {
        let kind = PaletteKind::Directory;
        let [caption, first, second] = copy.directory;
        let secondary = roles.secondary.hex;
        let badge = lighten(secondary, 10.0);
        PaletteSpec {
            kind,
            label: kind.label(self.locale).to_string(),
            header_background: secondary,
            header_text: text_on(secondary),
            badge_background: badge,
            badge_text: text_on(badge),
            left_background: tones.secondary_very_light,
            left_text: darken(roles.primary.hex, 5.0),
            right_background: tones.secondary_light,
            caption_name: labelled(copy.sky_light, tones.secondary_very_light),
            caption_description: caption.to_string(),
            accents: [
                AccentBlock {
                    background: roles.primary.hex,
                    text: HexColor::WHITE,
                    name: labelled(&roles.primary.name, roles.primary.hex),
                    description: first.to_string(),
                },
                AccentBlock {
                    background: tones.mid_tone_dark,
                    text: text_on(tones.mid_tone_dark),
                    name: labelled(copy.mid_tone, tones.mid_tone_dark),
                    description: second.to_string(),
                },
            ],
        }
    }

    fn carousel(&self, roles: &Roles<'_>, tones: &DerivedTones, copy: &TemplateCopy) -> PaletteSpec {
        let kind = PaletteKind::Carousel;
        let [caption, first, second] = copy.carousel;
        let secondary = roles.secondary.hex;
        PaletteSpec {
            kind,
            label: kind.label(self.locale).to_string(),
            header_background: WARM_WHITE,
            header_text: roles.primary.hex,
            badge_background: secondary,
            badge_text: text_on(secondary),
            left_background: CLEAN_WHITE,
            left_text: roles.primary.hex,
            right_background: COOL_WHITE,
            caption_name: labelled(copy.clean_white, CLEAN_WHITE),
            caption_description: caption.to_string(),
            accents: [
                AccentBlock {
                    background: tones.secondary_dark,
                    text: text_on(tones.secondary_dark),
                    name: labelled(copy.dark_secondary, tones.secondary_dark),
                    description: first.to_string(),
                },
                brand_block(roles.secondary, second),
            ],
        }
    }

    fn promo(&self, roles: &Roles<'_>, tones: &DerivedTones, copy: &TemplateCopy) -> PaletteSpec {
        let kind = PaletteKind::Promo;
        let [caption, first, second] = copy.promo;
        let primary = roles.primary.hex;
        let accent = roles.accent.hex;
        PaletteSpec {
            kind,
            label: kind.label(self.locale).to_string(),
            header_background: primary,
            header_text: text_on(primary),
            badge_background: accent,
            badge_text: text_on(accent),
            left_background: tones.secondary_dark,
            left_text: text_on(tones.secondary_dark),
            right_background: tones.secondary_darker,
            caption_name: labelled(copy.dark_brand, tones.secondary_dark),
            caption_description: caption.to_string(),
            accents: [
                AccentBlock {
                    background: HexColor::WHITE,
                    text: tones.secondary_dark,
                    name: labelled(copy.pure_white, HexColor::WHITE),
                    description: first.to_string(),
                },
                brand_block(roles.accent, second),
            ],
        }
    }
}

struct Roles<'a> {
    primary: &'a BrandColor,
    secondary: &'a BrandColor,
    accent: &'a BrandColor,
}

/// Accent block showing a brand color with contrasting text.
fn brand_block(color: &BrandColor, description: &str) -> AccentBlock {
    AccentBlock {
        background: color.hex,
        text: text_on(color.hex),
        name: labelled(&color.name, color.hex),
        description: description.to_string(),
    }
}

/// Generates palettes with a [`PaletteGenerator`] for `locale`.
pub fn generate_palettes(brand: &BrandRecord, locale: Locale) -> GeneratedPalettes {
    PaletteGenerator::new(locale).generate(brand)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{is_light, ops::TEXT_DARK, ops::TEXT_LIGHT, parse_hex};

    fn hex(s: &str) -> HexColor {
        parse_hex(s).unwrap()
    }

    #[test]
    fn demo_brand_produces_four_palettes_and_eight_swatches() {
        let generated = generate_palettes(&BrandRecord::demo(), Locale::Italian);
        assert_eq!(generated.palettes.len(), 4);
        assert_eq!(generated.swatches.len(), 8);

        let kinds: Vec<PaletteKind> = generated.palettes.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, PaletteKind::ALL);

        let labels: Vec<&str> = generated.palettes.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Post", "Rubriche", "Carosello", "Promo"]);
    }

    #[test]
    fn swatch_order_and_names() {
        let generated = generate_palettes(&BrandRecord::demo(), Locale::Italian);
        let secondary = hex("#2AACE2");
        let tones = DerivedTones::new(hex("#2B1A54"), secondary);

        let expected = [
            ("Termitalia Purple", hex("#2B1A54")),
            ("Dark Secondary", darken(secondary, 25.0)),
            ("Mid Tone", tones.mid_tone_dark),
            ("Wave Blue", secondary),
            ("Sky Light", set_lightness(secondary, 94.0)),
            ("Flame Orange", hex("#F26522")),
            ("Tech White", TECH_WHITE),
            ("Bianco Puro", HexColor::WHITE),
        ];
        let actual: Vec<(&str, HexColor)> = generated
            .swatches
            .iter()
            .map(|s| (s.name.as_str(), s.hex))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn generation_is_pure() {
        let brand = BrandRecord::demo();
        let first = generate_palettes(&brand, Locale::English);
        let second = generate_palettes(&brand, Locale::English);
        assert_eq!(first, second);
        assert_eq!(
            first.to_json_pretty().unwrap(),
            second.to_json_pretty().unwrap()
        );
    }

    #[test]
    fn incomplete_brand_yields_empty_result() {
        let mut brand = BrandRecord::demo();
        brand.secondary = None;
        let generated = generate_palettes(&brand, Locale::Italian);
        assert!(generated.is_empty());
        assert!(generated.palettes.is_empty());
        assert!(generated.swatches.is_empty());
    }

    #[test]
    fn derived_tones_follow_secondary() {
        let tones = DerivedTones::new(hex("#2B1A54"), hex("#2AACE2"));
        assert!((tones.secondary_very_light.to_hsl().lightness - 94.0).abs() < 0.5);
        assert!((tones.secondary_light.to_hsl().lightness - 88.0).abs() < 0.5);
        assert!(tones.secondary_darker.to_hsl().lightness < tones.secondary_dark.to_hsl().lightness);
        assert_eq!(tones.mid_tone, blend(hex("#2B1A54"), hex("#2AACE2"), 0.55));
        assert_eq!(tones.mid_tone_dark, darken(tones.mid_tone, 10.0));
    }

    #[test]
    fn template_assignments() {
        let generated = generate_palettes(&BrandRecord::demo(), Locale::Italian);
        let tones = DerivedTones::new(hex("#2B1A54"), hex("#2AACE2"));

        let post = generated.palette(PaletteKind::Informational).unwrap();
        assert_eq!(post.header_background, WARM_WHITE);
        assert_eq!(post.badge_text, HexColor::WHITE);
        assert_eq!(post.caption_name, "Tech White (#F5F5F7)");
        assert_eq!(post.accents[0].name, "Termitalia Purple (#2B1A54)");
        assert_eq!(post.accents[1].name, "Wave Blue (#2AACE2)");

        let directory = generated.palette(PaletteKind::Directory).unwrap();
        assert_eq!(directory.header_background, hex("#2AACE2"));
        assert_eq!(directory.left_background, tones.secondary_very_light);
        assert_eq!(directory.right_background, tones.secondary_light);
        assert_eq!(directory.accents[1].background, tones.mid_tone_dark);

        let carousel = generated.palette(PaletteKind::Carousel).unwrap();
        assert_eq!(carousel.left_background, CLEAN_WHITE);
        assert_eq!(carousel.accents[0].background, tones.secondary_dark);
        assert_eq!(
            carousel.accents[0].name,
            format!("Dark Secondary ({})", tones.secondary_dark)
        );

        let promo = generated.palette(PaletteKind::Promo).unwrap();
        assert_eq!(promo.header_background, hex("#2B1A54"));
        assert_eq!(promo.badge_background, hex("#F26522"));
        assert_eq!(promo.left_background, tones.secondary_dark);
        assert_eq!(promo.right_background, tones.secondary_darker);
        assert_eq!(promo.accents[0].background, HexColor::WHITE);
        assert_eq!(promo.accents[0].name, "Bianco Puro (#FFFFFF)");
        assert_eq!(promo.accents[1].background, hex("#F26522"));
    }

    #[test]
    fn derived_text_colors_contrast_with_background() {
        let generated = generate_palettes(&BrandRecord::blank(), Locale::English);
        for palette in &generated.palettes {
            for (bg, text) in [
                (palette.badge_background, palette.badge_text),
                (palette.accents[1].background, palette.accents[1].text),
            ] {
                if text == TEXT_DARK || text == TEXT_LIGHT {
                    assert_eq!(text == TEXT_DARK, is_light(bg), "{:?}", palette.kind);
                }
            }
        }

        let promo = generated.palette(PaletteKind::Promo).unwrap();
        assert_eq!(promo.left_text, text_on(promo.left_background));
        assert_eq!(promo.header_text, text_on(promo.header_background));
    }

    #[test]
    fn english_locale_changes_copy_only() {
        let it = generate_palettes(&BrandRecord::demo(), Locale::Italian);
        let en = generate_palettes(&BrandRecord::demo(), Locale::English);

        assert_eq!(en.palettes[1].label, "Series");
        assert_eq!(en.swatches[7].name, "Pure White");
        for (a, b) in it.palettes.iter().zip(&en.palettes) {
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.header_background, b.header_background);
            assert_eq!(a.right_background, b.right_background);
            assert_eq!(a.accents[0].background, b.accents[0].background);
        }
    }

    #[test]
    fn export_file_names() {
        let generated = generate_palettes(&BrandRecord::demo(), Locale::Italian);
        assert_eq!(
            generated.palettes[2].export_file_name("BR Termitalia  s.r.l."),
            "Palette_Carosello_BR_Termitalia_s.r.l."
        );
        assert_eq!(
            GeneratedPalettes::swatch_file_name("Nome Cliente"),
            "Palette_Completa_Nome_Cliente"
        );
    }

    #[test]
    fn json_uses_type_tag() {
        let generated = generate_palettes(&BrandRecord::demo(), Locale::English);
        let json = serde_json::to_string(&generated.palettes[3]).unwrap();
        assert!(json.contains("\"type\":\"promo\""));
        assert!(json.contains("\"headerBackground\":\"#2B1A54\""));
    }
}
