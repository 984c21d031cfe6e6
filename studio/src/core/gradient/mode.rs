// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The angle of a descriptor only shows up in the CSS for [`GradientMode::Linear`].
#[derive(
    Debug,
    Display,
    EnumString,
    EnumIter,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum GradientMode {
    #[default]
    Linear,
    Radial,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_parse_and_display() {
        assert_eq2!(GradientMode::from_str("linear").unwrap(), GradientMode::Linear);
        assert_eq2!(GradientMode::from_str("Radial").unwrap(), GradientMode::Radial);
        assert!(GradientMode::from_str("conic").is_err());
        assert_eq2!(GradientMode::Radial.to_string(), "radial");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&GradientMode::Radial).unwrap();
        assert_eq2!(json, "\"radial\"");
    }
}
