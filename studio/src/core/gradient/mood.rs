// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::ColorPair;
use crate::{ColorError, HexColor};

/// The word a user types to ask for no mood.
pub const RANDOM_MOOD: &str = "random";
pub const RANDOM_MOOD_LABEL: &str = "🎲 Random";

/// A named preset that swaps random sampling for exactly two fixed anchor colors.
///
/// "Random" is not a variant. It is `Option<Mood>::None` everywhere a mood is accepted.
///
/// More info:
/// - <https://docs.rs/strum_macros/latest/strum_macros/derive.EnumString.html>
/// - <https://docs.rs/strum_macros/latest/strum_macros/derive.EnumIter.html>
#[derive(
    Debug,
    Display,
    EnumString,
    EnumIter,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Calm,
    Energetic,
    Professional,
    Nature,
    Sunset,
    Ocean,
    Vibrant,
    Pastel,
    Dark,
    Neon,
    Earth,
}

impl Mood {
    fn anchor_rgb(self) -> [[u8; 3]; 2] {
        match self {
            Mood::Calm => [[0x8B, 0xC6, 0xEC], [0x95, 0x99, 0xE2]],
            Mood::Energetic => [[0xFF, 0x9A, 0x9E], [0xFA, 0xD0, 0xC4]],
            Mood::Professional => [[0x4A, 0x56, 0x9D], [0xDC, 0x24, 0x24]],
            Mood::Nature => [[0x13, 0x4E, 0x5E], [0x71, 0xB2, 0x80]],
            Mood::Sunset => [[0xFF, 0x5F, 0x6D], [0xFF, 0xC3, 0x71]],
            Mood::Ocean => [[0x21, 0x93, 0xB0], [0x6D, 0xD5, 0xED]],
            Mood::Vibrant => [[0xFF, 0x00, 0x80], [0xFF, 0x8C, 0x00]],
            Mood::Pastel => [[0xFF, 0xDE, 0xE9], [0xB5, 0xFF, 0xFC]],
            Mood::Dark => [[0x0F, 0x20, 0x27], [0x20, 0x3A, 0x43]],
            Mood::Neon => [[0x00, 0xF2, 0x60], [0x05, 0x75, 0xE6]],
            Mood::Earth => [[0x8B, 0x73, 0x55], [0x22, 0x8B, 0x22]],
        }
    }

    /// Always the same two colors in the same order, spelled in upper case.
    #[must_use]
    pub fn anchors(self) -> ColorPair {
        let [[r1, g1, b1], [r2, g2, b2]] = self.anchor_rgb();
        ColorPair::new(
            HexColor::from_rgb8_upper(r1, g1, b1),
            HexColor::from_rgb8_upper(r2, g2, b2),
        )
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Mood::Calm => "😌 Calm",
            Mood::Energetic => "⚡ Energetic",
            Mood::Professional => "💼 Professional",
            Mood::Nature => "🌿 Nature",
            Mood::Sunset => "🌅 Sunset",
            Mood::Ocean => "🌊 Ocean",
            Mood::Vibrant => "🌈 Vibrant",
            Mood::Pastel => "🎀 Pastel",
            Mood::Dark => "🌙 Dark",
            Mood::Neon => "🔆 Neon",
            Mood::Earth => "🌎 Earth",
        }
    }

    /// Parse a user choice where [`RANDOM_MOOD`] means no mood.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnknownMood`] for anything that isn't a preset name or
    /// `random`.
    pub fn parse_choice(input: &str) -> Result<Option<Mood>, ColorError> {
        let input = input.trim();
        if input.eq_ignore_ascii_case(RANDOM_MOOD) {
            return Ok(None);
        }
        Mood::from_str(input)
            .map(Some)
            .map_err(|_| ColorError::UnknownMood {
                input: input.to_string(),
            })
    }
}

/// Label for an optional mood, falling back to [`RANDOM_MOOD_LABEL`].
#[must_use]
pub fn mood_label(mood: Option<Mood>) -> &'static str {
    mood.map_or(RANDOM_MOOD_LABEL, Mood::label)
}

/// Name used in search, JSON and storage: the preset name or [`RANDOM_MOOD`].
#[must_use]
pub fn mood_name(mood: Option<Mood>) -> String {
    mood.map_or_else(|| RANDOM_MOOD.to_string(), |it| it.to_string())
}

/// All choices in menu order, starting with `random`.
#[must_use]
pub fn mood_choices() -> Vec<(String, &'static str)> {
    std::iter::once((RANDOM_MOOD.to_string(), RANDOM_MOOD_LABEL))
        .chain(Mood::iter().map(|it| (it.to_string(), it.label())))
        .collect()
}
