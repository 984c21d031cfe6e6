// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::BTreeMap,
          fmt::{Display, Formatter},
          str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{ColorError, HexColor};

/// Start and end color of a gradient, in CSS order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorPair {
    pub start: HexColor,
    pub end: HexColor,
}

impl ColorPair {
    #[must_use]
    pub fn new(start: HexColor, end: HexColor) -> Self { Self { start, end } }

    /// `"<start>-<end>"`, the key favorites are stored under.
    #[must_use]
    pub fn favorite_key(&self) -> String { format!("{}-{}", self.start, self.end) }
}

impl Display for ColorPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

/// Parses `<color>,<color>`.
impl FromStr for ColorPair {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((start, end)) = s.split_once(',') else {
            return Err(ColorError::InvalidColorPair {
                input: s.to_string(),
            });
        };
        Ok(Self::new(start.parse()?, end.parse()?))
    }
}

/// Whole degrees in `0..360`. Only meaningful for linear gradients.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "u16", into = "u16")]
pub struct Angle(u16);

impl Angle {
    pub const FULL_TURN: u16 = 360;

    /// Wraps, so `450` becomes `90`.
    #[must_use]
    pub fn new(degrees: u16) -> Self { Self(degrees % Self::FULL_TURN) }

    /// Uniform over `0..360`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(0..Self::FULL_TURN))
    }

    #[must_use]
    pub fn degrees(self) -> u16 { self.0 }
}

impl From<u16> for Angle {
    fn from(value: u16) -> Self { Self::new(value) }
}

impl From<Angle> for u16 {
    fn from(value: Angle) -> Self { value.0 }
}

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

/// Slot index to the pair pinned there. Sparse. A slot is locked exactly when it has an
/// entry here.
pub type LockedSlots = BTreeMap<usize, ColorPair>;
