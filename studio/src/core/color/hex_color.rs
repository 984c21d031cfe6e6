// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};
use smallstr::SmallString;

/// `#rrggbb` is 7 bytes, so this never spills to the heap.
pub type StringHexColor = SmallString<[u8; 8]>;

/// An opaque sRGB color spelled as `#rrggbb`.
///
/// The original spelling is kept. A locked pair given as `#FFFFFF` renders as
/// `#FFFFFF` in CSS expressions, while colors produced by the sampler are always lower
/// case. Two values are equal only if their spelling is equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    text: StringHexColor,
    rgb: [u8; 3],
}

impl HexColor {
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHexColor`] if `input` is not `#` followed by exactly
    /// 6 hex digits (surrounding whitespace is ignored).
    pub fn try_parse(input: &str) -> Result<Self, ColorError> {
        let text = input.trim();
        let invalid = || ColorError::InvalidHexColor {
            input: input.to_string(),
        };

        let digits = text.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let parsed = colorgrad::Color::from_html(text).map_err(|_| invalid())?;
        let [red, green, blue, _] = parsed.to_rgba8();

        Ok(Self {
            text: text.into(),
            rgb: [red, green, blue],
        })
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        use std::fmt::Write as _;

        let mut text = StringHexColor::new();
        _ = write!(text, "#{red:02x}{green:02x}{blue:02x}");

        Self {
            text,
            rgb: [red, green, blue],
        }
    }

    /// Upper case spelling, eg: `#8BC6EC`. Used for the fixed mood anchors.
    #[must_use]
    pub fn from_rgb8_upper(red: u8, green: u8, blue: u8) -> Self {
        use std::fmt::Write as _;

        let mut text = StringHexColor::new();
        _ = write!(text, "#{red:02X}{green:02X}{blue:02X}");

        Self {
            text,
            rgb: [red, green, blue],
        }
    }

    /// Alpha is dropped, and channels outside `0.0..=1.0` are clamped.
    #[must_use]
    pub fn from_colorgrad(color: &colorgrad::Color) -> Self {
        let clamped = colorgrad::Color::new(
            color.r.clamp(0.0, 1.0),
            color.g.clamp(0.0, 1.0),
            color.b.clamp(0.0, 1.0),
            1.0,
        );
        let [red, green, blue, _] = clamped.to_rgba8();
        Self::from_rgb8(red, green, blue)
    }

    #[must_use]
    pub fn to_colorgrad(&self) -> colorgrad::Color {
        let [red, green, blue] = self.rgb;
        colorgrad::Color::from_rgba8(red, green, blue, 255)
    }

    #[must_use]
    pub fn as_str(&self) -> &str { self.text.as_str() }

    #[must_use]
    pub fn rgb(&self) -> [u8; 3] { self.rgb }

    /// Same channels, lower case spelling.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let [red, green, blue] = self.rgb;
        Self::from_rgb8(red, green, blue)
    }
}

/// Uniform over the whole 24 bit sRGB cube.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> HexColor {
    HexColor::from_rgb8(rng.random(), rng.random(), rng.random())
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::fmt::Debug for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "HexColor({})", self.text)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::try_parse(s) }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> { Self::try_parse(&value) }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self { value.text.to_string() }
}

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("🎨 '{input}' is not a #rrggbb hex color")]
    #[diagnostic(
        code(gradient_studio::color::invalid_hex),
        help("Use a '#' followed by 6 hex digits, eg: #8bc6ec")
    )]
    InvalidHexColor { input: String },

    #[error("🎨 '{input}' is not a color pair, expected <color>,<color>")]
    #[diagnostic(
        code(gradient_studio::color::invalid_pair),
        help("Separate the two colors with a comma, eg: #134e5e,#71b280")
    )]
    InvalidColorPair { input: String },

    #[error("🎨 '{input}' is not a mood")]
    #[diagnostic(
        code(gradient_studio::color::unknown_mood),
        help("Run `grad moods` to list the presets, or use `random`")
    )]
    UnknownMood { input: String },
}
