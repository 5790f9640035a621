//! Assignment of extracted colors to brand roles.
//!
//! Colors from several reference images are merged, neutrals are discarded,
//! and each role is picked by its own score:
//!
//! - **primary**: dark, saturated and frequent.
//! - **secondary**: frequent and bright, with a bonus for staying within
//!   120° of the primary hue.
//! - **accent**: a warm, vivid color if one exists, otherwise the hue that
//!   contrasts most with the other two, otherwise a fixed warm default.
//!
//! Exact score ties go to the lexicographically smaller hex value so the
//! result never depends on input order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::brand::BrandColor;
use crate::color::{HexColor, Locale, color_name, hue_distance};
use crate::extract::SampledColor;

/// Saturation above which a color counts as chromatic.
pub const CHROMATIC_SATURATION: f64 = 12.0;

/// Accent used when no third chromatic color is available.
pub const DEFAULT_ACCENT: HexColor = HexColor::from_rgb(0xF2, 0x65, 0x22);

/// Primary/secondary/accent triple suggested from reference images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct RoleSuggestion {
    /// Dark, vivid anchor color.
    pub primary: BrandColor,
    /// Supporting color, usually brighter than the primary.
    pub secondary: BrandColor,
    /// Call-to-action color.
    pub accent: BrandColor,
}

/// Picks brand roles out of per-image color lists.
#[derive(Debug, Clone)]
pub struct RoleAssigner {
    locale: Locale,
    default_accent: HexColor,
}

impl Default for RoleAssigner {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl RoleAssigner {
    /// Creates an assigner that names colors in `locale`.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            default_accent: DEFAULT_ACCENT,
        }
    }

    /// Overrides the accent used when no suitable third color exists.
    pub fn with_default_accent(mut self, accent: HexColor) -> Self {
        self.default_accent = accent;
        self
    }

    /// Assigns roles, or returns `None` when fewer than two chromatic colors
    /// are available.
    pub fn assign<L: AsRef<[SampledColor]>>(&self, per_image: &[L]) -> Option<RoleSuggestion> {
        let merged = merge_sampled(per_image);
        let chromatic: Vec<&SampledColor> = merged
            .iter()
            .filter(|c| c.hsl.saturation > CHROMATIC_SATURATION)
            .collect();

        if merged.len() < 2 || chromatic.len() < 2 {
            debug!(
                merged = merged.len(),
                chromatic = chromatic.len(),
                "not enough chromatic colors to assign roles"
            );
            return None;
        }

        let primary = pick_primary(&chromatic);
        let secondary = pick_secondary(&chromatic, primary)?;
        let accent = pick_accent(&chromatic, primary, secondary).unwrap_or(self.default_accent);

        debug!(
            primary = %primary.hex,
            secondary = %secondary.hex,
            accent = %accent,
            "assigned brand roles"
        );

        Some(RoleSuggestion {
            primary: self.named(primary.hex),
            secondary: self.named(secondary.hex),
            accent: self.named(accent),
        })
    }

    fn named(&self, hex: HexColor) -> BrandColor {
        BrandColor::new(hex, color_name(hex, self.locale))
    }
}

/// Assigns roles with a default [`RoleAssigner`] for `locale`.
pub fn assign_roles<L: AsRef<[SampledColor]>>(
    per_image: &[L],
    locale: Locale,
) -> Option<RoleSuggestion> {
    RoleAssigner::new(locale).assign(per_image)
}

/// Unions colors across images by exact hex, summing counts.
///
/// The result keeps first-seen order.
pub fn merge_sampled<L: AsRef<[SampledColor]>>(per_image: &[L]) -> Vec<SampledColor> {
    let mut merged: Vec<SampledColor> = Vec::new();
    for color in per_image.iter().flat_map(|list| list.as_ref()) {
        match merged.iter_mut().find(|m| m.hex == color.hex) {
            Some(existing) => existing.count = existing.count.saturating_add(color.count),
            None => merged.push(*color),
        }
    }
    merged
}

fn pick_primary<'a>(chromatic: &[&'a SampledColor]) -> &'a SampledColor {
    let dark_and_vivid = chromatic
        .iter()
        .copied()
        .filter(|c| c.hsl.lightness < 55.0 && c.hsl.saturation > 20.0);

    best_by(dark_and_vivid, |c| {
        2.0 * f64::from(c.count) + 0.5 * c.hsl.saturation + 0.8 * (100.0 - c.hsl.lightness)
    })
    .or_else(|| best_by(chromatic.iter().copied(), |c| f64::from(c.count)))
    // `chromatic` holds at least two colors here.
    .unwrap_or(chromatic[0])
}

fn pick_secondary<'a>(
    chromatic: &[&'a SampledColor],
    primary: &SampledColor,
) -> Option<&'a SampledColor> {
    let others = chromatic.iter().copied().filter(|c| c.hex != primary.hex);

    best_by(others, |c| {
        let near_primary = if hue_distance(c.hsl.hue, primary.hsl.hue) < 120.0 {
            30.0
        } else {
            0.0
        };
        1.5 * f64::from(c.count) + 0.8 * c.hsl.saturation + 0.4 * c.hsl.lightness + near_primary
    })
}

fn pick_accent(
    chromatic: &[&SampledColor],
    primary: &SampledColor,
    secondary: &SampledColor,
) -> Option<HexColor> {
    let remaining: Vec<&SampledColor> = chromatic
        .iter()
        .copied()
        .filter(|c| c.hex != primary.hex && c.hex != secondary.hex)
        .collect();

    let warm = remaining.iter().copied().filter(|c| is_warm_accent(c));
    best_by(warm, |c| f64::from(c.count) + 1.2 * c.hsl.saturation)
        .or_else(|| {
            best_by(remaining.iter().copied(), |c| {
                hue_distance(c.hsl.hue, primary.hsl.hue) + hue_distance(c.hsl.hue, secondary.hsl.hue)
            })
        })
        .map(|c| c.hex)
}

fn is_warm_accent(color: &SampledColor) -> bool {
    let hsl = color.hsl;
    (hsl.hue <= 65.0 || hsl.hue >= 330.0)
        && hsl.saturation > 30.0
        && hsl.lightness > 30.0
        && hsl.lightness < 75.0
}

/// Returns the highest scoring color; exact ties go to the smaller hex.
fn best_by<'a>(
    colors: impl Iterator<Item = &'a SampledColor>,
    score: impl Fn(&SampledColor) -> f64,
) -> Option<&'a SampledColor> {
    colors
        .map(|c| (c, score(c)))
        .fold(None::<(&'a SampledColor, f64)>, |best, (c, s)| match best {
            Some((b, bs)) if bs > s || (bs == s && b.hex <= c.hex) => Some((b, bs)),
            _ => Some((c, s)),
        })
        .map(|(c, _)| c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{HslColor, parse_hex};

    fn sampled(hex: &str, count: u32) -> SampledColor {
        SampledColor::new(parse_hex(hex).unwrap(), count)
    }

    #[test]
    fn uniform_gray_is_insufficient() {
        let grays = vec![vec![sampled("#808080", 400)]];
        assert!(assign_roles(&grays, Locale::English).is_none());

        let several_grays = vec![vec![sampled("#808080", 400), sampled("#404040", 100), sampled("#C0C0C0", 50)]];
        assert!(assign_roles(&several_grays, Locale::English).is_none());
    }

    #[test]
    fn empty_input_is_insufficient() {
        let none: Vec<Vec<SampledColor>> = Vec::new();
        assert!(assign_roles(&none, Locale::Italian).is_none());

        let empty_lists: Vec<Vec<SampledColor>> = vec![Vec::new(), Vec::new()];
        assert!(assign_roles(&empty_lists, Locale::Italian).is_none());
    }

    #[test]
    fn single_chromatic_color_is_insufficient() {
        let lists = vec![vec![sampled("#2B1A54", 300), sampled("#808080", 500)]];
        assert!(assign_roles(&lists, Locale::English).is_none());
    }

    #[test]
    fn brand_triple_is_recovered() {
        let lists = vec![vec![
            sampled("#2B1A54", 500),
            sampled("#2AACE2", 300),
            sampled("#F26522", 100),
            sampled("#808080", 900),
        ]];
        let roles = assign_roles(&lists, Locale::English).unwrap();
        assert_eq!(roles.primary.hex.to_string(), "#2B1A54");
        assert_eq!(roles.secondary.hex.to_string(), "#2AACE2");
        assert_eq!(roles.accent.hex.to_string(), "#F26522");
        assert_eq!(roles.primary.name, "Dark Violet");
        assert_eq!(roles.accent.name, "Orange");
    }

    #[test]
    fn dark_and_bright_pair_gets_default_accent() {
        let lists = vec![vec![sampled("#2B1A54", 200), sampled("#2AACE2", 200)]];
        let roles = assign_roles(&lists, Locale::Italian).unwrap();
        assert_eq!(roles.primary.hex.to_string(), "#2B1A54");
        assert_eq!(roles.secondary.hex.to_string(), "#2AACE2");
        assert_eq!(roles.accent.hex, DEFAULT_ACCENT);
        assert_eq!(roles.accent.name, "Arancione");
    }

    #[test]
    fn custom_default_accent() {
        let lists = vec![vec![sampled("#2B1A54", 200), sampled("#2AACE2", 200)]];
        let gold = parse_hex("#D4A017").unwrap();
        let roles = RoleAssigner::new(Locale::English)
            .with_default_accent(gold)
            .assign(&lists)
            .unwrap();
        assert_eq!(roles.accent.hex, gold);
    }

    #[test]
    fn accent_falls_back_to_most_contrasting_hue() {
        let lists = vec![vec![
            sampled("#2B1A54", 500),
            sampled("#2AACE2", 300),
            sampled("#3CB371", 50),
            sampled("#20B2AA", 40),
        ]];
        let roles = assign_roles(&lists, Locale::English).unwrap();
        assert_eq!(roles.primary.hex.to_string(), "#2B1A54");
        assert_eq!(roles.secondary.hex.to_string(), "#2AACE2");
        assert_eq!(roles.accent.hex.to_string(), "#3CB371");
    }

    #[test]
    fn primary_falls_back_to_most_frequent() {
        // Both colors are too light to qualify as a primary.
        let lists = vec![vec![sampled("#F5A3C7", 100), sampled("#A3D5F5", 300)]];
        let roles = assign_roles(&lists, Locale::English).unwrap();
        assert_eq!(roles.primary.hex.to_string(), "#A3D5F5");
        assert_eq!(roles.secondary.hex.to_string(), "#F5A3C7");
    }

    #[test]
    fn merge_sums_counts_across_images() {
        let lists = vec![
            vec![sampled("#2B1A54", 10), sampled("#2AACE2", 5)],
            vec![sampled("#2AACE2", 7), sampled("#F26522", 3)],
        ];
        let merged = merge_sampled(&lists);
        let summary: Vec<(String, u32)> = merged.iter().map(|c| (c.hex.to_string(), c.count)).collect();
        assert_eq!(
            summary,
            [
                ("#2B1A54".to_string(), 10),
                ("#2AACE2".to_string(), 12),
                ("#F26522".to_string(), 3)
            ]
        );
    }

    #[test]
    fn merged_counts_change_the_primary() {
        let first = vec![sampled("#2B1A54", 100), sampled("#1B4D3E", 90), sampled("#2AACE2", 10)];
        let second = vec![sampled("#1B4D3E", 50)];

        let only_first = assign_roles(&[first.clone()], Locale::English).unwrap();
        assert_eq!(only_first.primary.hex.to_string(), "#2B1A54");

        let both = assign_roles(&[first, second], Locale::English).unwrap();
        assert_eq!(both.primary.hex.to_string(), "#1B4D3E");
    }

    #[test]
    fn ties_prefer_smaller_hex() {
        let hsl = HslColor::new(200.0, 60.0, 40.0);
        let a = SampledColor {
            hex: parse_hex("#3366AA").unwrap(),
            count: 10,
            hsl,
        };
        let b = SampledColor {
            hex: parse_hex("#3366AB").unwrap(),
            count: 10,
            hsl,
        };

        let forward = best_by([&a, &b].into_iter(), |c| f64::from(c.count));
        let backward = best_by([&b, &a].into_iter(), |c| f64::from(c.count));
        assert_eq!(forward.unwrap().hex, a.hex);
        assert_eq!(backward.unwrap().hex, a.hex);
    }

    #[test]
    fn result_is_independent_of_input_order() {
        let colors = vec![
            sampled("#2B1A54", 120),
            sampled("#2AACE2", 120),
            sampled("#F26522", 120),
            sampled("#E94B3C", 120),
        ];
        let mut reversed = colors.clone();
        reversed.reverse();

        assert_eq!(
            assign_roles(&[colors], Locale::English),
            assign_roles(&[reversed], Locale::English)
        );
    }
}
