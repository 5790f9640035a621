//! Derived-color operators working in HSL space.
//!
//! All operators take an already validated [`HexColor`] and are total.

use super::{HexColor, HslColor};

/// Lightness above which a color counts as light.
pub const LIGHT_THRESHOLD: f64 = 55.0;

/// Text color used on light backgrounds.
pub const TEXT_DARK: HexColor = HexColor::from_rgb(0x1A, 0x1A, 0x2E);

/// Text color used on dark backgrounds.
pub const TEXT_LIGHT: HexColor = HexColor::WHITE;

/// Raises lightness by `amount`, clamped at 100.
pub fn lighten(color: HexColor, amount: f64) -> HexColor {
    let hsl = color.to_hsl();
    with_lightness(hsl, (hsl.lightness + amount).min(100.0))
}

/// Lowers lightness by `amount`, clamped at 0.
pub fn darken(color: HexColor, amount: f64) -> HexColor {
    let hsl = color.to_hsl();
    with_lightness(hsl, (hsl.lightness - amount).max(0.0))
}

/// Replaces lightness with `lightness`, clamped to `[0, 100]`.
pub fn set_lightness(color: HexColor, lightness: f64) -> HexColor {
    with_lightness(color.to_hsl(), lightness.clamp(0.0, 100.0))
}

/// Replaces saturation with `saturation`, clamped to `[0, 100]`.
pub fn set_saturation(color: HexColor, saturation: f64) -> HexColor {
    let hsl = color.to_hsl();
    HexColor::from_hsl(HslColor {
        saturation: saturation.clamp(0.0, 100.0),
        ..hsl
    })
}

/// Interpolates hue, saturation and lightness independently.
///
/// `ratio = 0` yields `a`, `ratio = 1` yields `b`. Hue is interpolated
/// linearly, not along the shortest arc, so blending 350° with 10° passes
/// through 180°.
pub fn blend(a: HexColor, b: HexColor, ratio: f64) -> HexColor {
    let ha = a.to_hsl();
    let hb = b.to_hsl();
    let mix = |x: f64, y: f64| x * (1.0 - ratio) + y * ratio;

    HexColor::from_hsl(HslColor {
        hue: mix(ha.hue, hb.hue),
        saturation: mix(ha.saturation, hb.saturation),
        lightness: mix(ha.lightness, hb.lightness),
    })
}

/// Returns true when HSL lightness exceeds [`LIGHT_THRESHOLD`].
pub fn is_light(color: HexColor) -> bool {
    color.to_hsl().lightness > LIGHT_THRESHOLD
}

/// Picks a legible text color for the given background.
pub fn text_on(background: HexColor) -> HexColor {
    if is_light(background) {
        TEXT_DARK
    } else {
        TEXT_LIGHT
    }
}

fn with_lightness(hsl: HslColor, lightness: f64) -> HexColor {
    HexColor::from_hsl(HslColor { lightness, ..hsl })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_hex;

    fn hex(s: &str) -> HexColor {
        parse_hex(s).unwrap()
    }

    fn close(a: HexColor, b: HexColor) -> bool {
        let (ar, ag, ab) = a.to_rgb();
        let (br, bg, bb) = b.to_rgb();
        ar.abs_diff(br) <= 1 && ag.abs_diff(bg) <= 1 && ab.abs_diff(bb) <= 1
    }

    #[test]
    fn zero_amount_is_identity() {
        for s in ["#2B1A54", "#2AACE2", "#F26522", "#808080", "#000000", "#FFFFFF"] {
            let c = hex(s);
            assert!(close(lighten(c, 0.0), c), "{s}");
            assert!(close(darken(c, 0.0), c), "{s}");
        }
    }

    #[test]
    fn lighten_and_darken_clamp() {
        assert_eq!(lighten(hex("#000000"), 200.0), HexColor::WHITE);
        assert_eq!(lighten(hex("#2AACE2"), 200.0), HexColor::WHITE);
        assert_eq!(darken(hex("#2AACE2"), 200.0).to_string(), "#000000");
    }

    #[test]
    fn lighten_is_monotonic() {
        let base = hex("#2B1A54");
        let mut previous = base.to_hsl().lightness;
        for step in 1..=10 {
            let next = lighten(base, f64::from(step) * 8.0).to_hsl().lightness;
            assert!(next >= previous - 0.5, "step {step}: {next} < {previous}");
            previous = next;
        }

        let mut previous = base.to_hsl().lightness;
        for step in 1..=5 {
            let next = darken(base, f64::from(step) * 4.0).to_hsl().lightness;
            assert!(next <= previous + 0.5, "step {step}: {next} > {previous}");
            previous = next;
        }
    }

    #[test]
    fn darken_keeps_hue() {
        let base = hex("#2AACE2");
        let darker = darken(base, 25.0);
        let (h0, h1) = (base.to_hsl().hue, darker.to_hsl().hue);
        assert!((h0 - h1).abs() < 2.0, "{h0} vs {h1}");
        assert!(darker.to_hsl().lightness < base.to_hsl().lightness - 20.0);
    }

    #[test]
    fn set_lightness_and_saturation_are_absolute() {
        let sky = set_lightness(hex("#2AACE2"), 94.0);
        assert!((sky.to_hsl().lightness - 94.0).abs() < 0.5);

        let gray = set_saturation(hex("#2AACE2"), 0.0);
        let (r, g, b) = gray.to_rgb();
        assert_eq!((r, r), (g, b));

        assert_eq!(set_lightness(hex("#2AACE2"), 150.0), HexColor::WHITE);
        assert_eq!(set_lightness(hex("#2AACE2"), -5.0).to_string(), "#000000");
    }

    #[test]
    fn blend_endpoints_and_self() {
        let a = hex("#2B1A54");
        let b = hex("#2AACE2");
        assert!(close(blend(a, b, 0.0), a));
        assert!(close(blend(a, b, 1.0), b));
        for ratio in [0.0, 0.25, 0.55, 1.0] {
            assert!(close(blend(a, a, ratio), a));
        }
    }

    #[test]
    fn blend_hue_is_linear_across_zero() {
        // 350° and 10° meet at 180°, not at 0°.
        let a = HexColor::from_hsl(HslColor::new(350.0, 80.0, 50.0));
        let b = HexColor::from_hsl(HslColor::new(10.0, 80.0, 50.0));
        let mid = blend(a, b, 0.5).to_hsl();
        assert!((mid.hue - 180.0).abs() < 3.0, "hue {}", mid.hue);
    }

    #[test]
    fn text_on_matches_is_light() {
        for s in ["#FFFFFF", "#F5F5F7", "#2AACE2", "#2B1A54", "#F26522", "#000000", "#8C8C8C"] {
            let c = hex(s);
            let expected = if is_light(c) { TEXT_DARK } else { TEXT_LIGHT };
            assert_eq!(text_on(c), expected, "{s}");
        }
        assert_eq!(text_on(HexColor::WHITE), TEXT_DARK);
        assert_eq!(text_on(hex("#2B1A54")), TEXT_LIGHT);
    }
}
