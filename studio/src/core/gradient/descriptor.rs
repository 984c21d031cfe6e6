// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer, ser::SerializeStruct};
use uuid::Uuid;

use super::{Angle, ColorPair, GradientMode, Mood, compose_expression, css_declaration,
            css_vendor_prefixed};
use crate::{Palette, contrast, derive_palette, is_accessible, relative_luminance};

/// One generated gradient. Immutable: regeneration replaces it wholesale, and the only
/// "change" allowed is [`GradientDescriptor::with_locked`], which returns a copy.
///
/// Everything derived from the colors (palette, contrast, luminance) is computed once
/// in [`GradientDescriptor::new`]. The CSS [`expression`](GradientDescriptor::expression)
/// is not stored at all, it is composed from `(colors, angle, mode)` on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDescriptor {
    id: Uuid,
    colors: ColorPair,
    angle: Angle,
    mode: GradientMode,
    mood: Option<Mood>,
    palette: Palette,
    contrast_ratio: f64,
    accessible: bool,
    luminance: (f64, f64),
    locked: bool,
    created_at: DateTime<Utc>,
}

impl GradientDescriptor {
    #[must_use]
    pub fn new(
        colors: ColorPair,
        angle: Angle,
        mode: GradientMode,
        mood: Option<Mood>,
        locked: bool,
    ) -> Self {
        Self::from_parts(Uuid::new_v4(), Utc::now(), colors, angle, mode, mood, locked)
    }

    /// Rebuild a descriptor that was persisted, keeping its identity.
    #[must_use]
    pub fn from_parts(
        id: Uuid,
        created_at: DateTime<Utc>,
        colors: ColorPair,
        angle: Angle,
        mode: GradientMode,
        mood: Option<Mood>,
        locked: bool,
    ) -> Self {
        let contrast_ratio = contrast(&colors.start, &colors.end);
        Self {
            id,
            palette: derive_palette(&colors.start, &colors.end),
            contrast_ratio,
            accessible: is_accessible(contrast_ratio),
            luminance: (
                relative_luminance(&colors.start),
                relative_luminance(&colors.end),
            ),
            colors,
            angle,
            mode,
            mood,
            locked,
            created_at,
        }
    }

    #[must_use]
    pub fn with_locked(&self, locked: bool) -> Self {
        Self {
            locked,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn expression(&self) -> String {
        compose_expression(self.mode, &self.colors, self.angle)
    }

    /// `background: <expression>;`
    #[must_use]
    pub fn css_declaration(&self) -> String { css_declaration(&self.expression()) }

    #[must_use]
    pub fn css_vendor_prefixed(&self) -> String { css_vendor_prefixed(&self.expression()) }

    #[must_use]
    pub fn favorite_key(&self) -> String { self.colors.favorite_key() }

    /// Contrast with 2 decimals, eg: `4.48`. This is the text search matches against.
    #[must_use]
    pub fn contrast_text(&self) -> String { format!("{:.2}", self.contrast_ratio) }

    #[must_use]
    pub fn id(&self) -> Uuid { self.id }

    #[must_use]
    pub fn colors(&self) -> &ColorPair { &self.colors }

    #[must_use]
    pub fn angle(&self) -> Angle { self.angle }

    #[must_use]
    pub fn mode(&self) -> GradientMode { self.mode }

    #[must_use]
    pub fn mood(&self) -> Option<Mood> { self.mood }

    #[must_use]
    pub fn palette(&self) -> &Palette { &self.palette }

    #[must_use]
    pub fn contrast_ratio(&self) -> f64 { self.contrast_ratio }

    #[must_use]
    pub fn accessible(&self) -> bool { self.accessible }

    /// Relative luminance of `(start, end)`.
    #[must_use]
    pub fn luminance(&self) -> (f64, f64) { self.luminance }

    #[must_use]
    pub fn locked(&self) -> bool { self.locked }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
}

/// Serialized output carries the computed `expression` next to the stored fields.
impl Serialize for GradientDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut it = serializer.serialize_struct("GradientDescriptor", 12)?;
        it.serialize_field("id", &self.id)?;
        it.serialize_field("colors", &self.colors)?;
        it.serialize_field("angle", &self.angle)?;
        it.serialize_field("mode", &self.mode)?;
        it.serialize_field("mood", &self.mood)?;
        it.serialize_field("expression", &self.expression())?;
        it.serialize_field("palette", &self.palette)?;
        it.serialize_field("contrast_ratio", &self.contrast_ratio)?;
        it.serialize_field("accessible", &self.accessible)?;
        it.serialize_field("luminance", &self.luminance)?;
        it.serialize_field("locked", &self.locked)?;
        it.serialize_field("created_at", &self.created_at)?;
        it.end()
    }
}
