// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use colorgrad::Gradient;

use super::HexColor;

pub const PALETTE_SIZE: usize = 5;

/// First stop is always `c1` and last stop is always `c2`, spelled exactly as given.
pub type Palette = [HexColor; PALETTE_SIZE];

/// Evenly spaced stops from `c1` to `c2`, interpolated in Oklab so the midpoints don't
/// go gray the way naive sRGB mixing does.
#[must_use]
pub fn derive_palette(c1: &HexColor, c2: &HexColor) -> Palette {
    type Number = f32;

    let result_gradient = colorgrad::GradientBuilder::new()
        .colors(&[c1.to_colorgrad(), c2.to_colorgrad()])
        .mode(colorgrad::BlendMode::Oklab)
        .build::<colorgrad::LinearGradient>();

    let last = PALETTE_SIZE - 1;
    let fraction = |index: usize| -> Number {
        #[allow(clippy::cast_precision_loss)]
        let it = index as Number / last as Number;
        it
    };

    std::array::from_fn(|index| match index {
        0 => c1.clone(),
        _ if index == last => c2.clone(),
        _ => match &result_gradient {
            Ok(gradient) => HexColor::from_colorgrad(&gradient.at(fraction(index))),
            Err(_) => lerp_srgb(c1, c2, fraction(index)),
        },
    })
}

fn lerp_srgb(c1: &HexColor, c2: &HexColor, t: f32) -> HexColor {
    let a = c1.to_colorgrad();
    let b = c2.to_colorgrad();
    HexColor::from_colorgrad(&colorgrad::Color::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        1.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Oklch, assert_eq2};

    fn hex(it: &str) -> HexColor { HexColor::try_parse(it).unwrap() }

    #[test]
    fn test_endpoints_are_exact() {
        let c1 = hex("#FF5F6D");
        let c2 = hex("#ffc371");
        let palette = derive_palette(&c1, &c2);
        assert_eq2!(palette.len(), PALETTE_SIZE);
        assert_eq2!(palette[0], c1);
        assert_eq2!(palette[4], c2);
    }

    #[test]
    fn test_same_color_gives_flat_palette() {
        let c = hex("#2193b0");
        let palette = derive_palette(&c, &c);
        for it in &palette {
            assert_eq2!(it.rgb(), c.rgb());
        }
    }

    #[test]
    fn test_lightness_is_monotonic_between_black_and_white() {
        let palette = derive_palette(&hex("#000000"), &hex("#ffffff"));
        let lightness = palette
            .iter()
            .map(|it| Oklch::from_hex(it).lightness)
            .collect::<Vec<_>>();
        for pair in lightness.windows(2) {
            assert!(pair[0] < pair[1], "{lightness:?}");
        }
        // Oklab L = 0.5 is #636363, darker than sRGB #808080.
        let mid = palette[2].rgb();
        assert!(mid[0] < 0x80);
        assert!(mid[0].abs_diff(0x63) <= 2, "{}", palette[2]);
    }

    #[test]
    fn test_middle_stops_are_lower_case() {
        let palette = derive_palette(&hex("#4A569D"), &hex("#DC2424"));
        for it in &palette[1..4] {
            assert_eq2!(it.as_str().to_ascii_lowercase(), it.as_str());
        }
    }

    #[test]
    fn test_srgb_fallback_midpoint() {
        let it = lerp_srgb(&hex("#000000"), &hex("#ffffff"), 0.5);
        let [red, green, blue] = it.rgb();
        assert!(red.abs_diff(128) <= 1 && red == green && green == blue);
    }
}
