// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Hue and lightness operations in OKLCH, the polar form of Oklab. Rotating hue here
//! keeps perceived lightness steady, which avoids the muddy results of rotating raw RGB
//! or HSL.
//!
//! More info: <https://bottosson.github.io/posts/oklab/>

use super::HexColor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Perceived lightness, `0.0..=1.0`.
    pub lightness: f32,
    pub chroma: f32,
    /// Degrees, `0.0..360.0`.
    pub hue: f32,
}

impl Oklch {
    #[must_use]
    pub fn from_hex(color: &HexColor) -> Self {
        let [lightness, a, b, _alpha] = color.to_colorgrad().to_oklaba();
        Self {
            lightness,
            chroma: a.hypot(b),
            hue: b.atan2(a).to_degrees().rem_euclid(360.0),
        }
    }

    /// Out of gamut results are clamped per channel.
    #[must_use]
    pub fn to_hex(&self) -> HexColor {
        let (sin, cos) = self.hue.to_radians().sin_cos();
        let color = colorgrad::Color::from_oklaba(
            self.lightness.clamp(0.0, 1.0),
            self.chroma * cos,
            self.chroma * sin,
            1.0,
        );
        HexColor::from_colorgrad(&color)
    }
}

/// Complementary is `180.0`, analogous is `30.0`.
#[must_use]
pub fn rotate_hue(color: &HexColor, degrees: f32) -> HexColor {
    let it = Oklch::from_hex(color);
    Oklch {
        hue: (it.hue + degrees).rem_euclid(360.0),
        ..it
    }
    .to_hex()
}

/// Subtract `amount` from lightness (absolute, not relative), clamped at black.
#[must_use]
pub fn darken(color: &HexColor, amount: f32) -> HexColor {
    let it = Oklch::from_hex(color);
    Oklch {
        lightness: (it.lightness - amount).clamp(0.0, 1.0),
        ..it
    }
    .to_hex()
}
