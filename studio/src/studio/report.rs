// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Plain text blocks built from a [`GradientDescriptor`], for the clipboard and share
//! targets.

use std::fmt::Write as _;

use crate::{GradientDescriptor, GradientMode, mood_label};

pub const APP_TITLE: &str = "Gradient Studio";
pub const RULE: &str = "────────────────────";

/// `4.48:1 ✅ Accessible` or `1.39:1 ⚠️ Low Contrast`.
#[must_use]
pub fn contrast_summary(gradient: &GradientDescriptor) -> String {
    let marker = if gradient.accessible() {
        "✅ Accessible"
    } else {
        "⚠️ Low Contrast"
    };
    format!("{}:1 {marker}", gradient.contrast_text())
}

/// CSS declaration wrapped in comments that list the colors and contrast.
#[must_use]
pub fn detailed_css_text(gradient: &GradientDescriptor) -> String {
    format!(
        "/* CSS Gradient */\n{}\n/* Colors: {} */\n/* Contrast Ratio: {} */",
        gradient.css_declaration(),
        gradient.colors(),
        contrast_summary(gradient),
    )
}

#[must_use]
pub fn analysis_text(gradient: &GradientDescriptor) -> String {
    let (luminance_start, luminance_end) = gradient.luminance();
    let wcag = if gradient.accessible() {
        "✅ WCAG Compliant"
    } else {
        "⚠️ Low Contrast"
    };
    let kind = match gradient.mode() {
        GradientMode::Linear => format!("linear ({}°)", gradient.angle()),
        GradientMode::Radial => "radial".to_string(),
    };

    let mut acc = String::new();
    _ = writeln!(acc, "🎨 Gradient Analysis:");
    _ = writeln!(acc, "{RULE}");
    _ = writeln!(acc, "Colors: {}", gradient.colors());
    _ = writeln!(acc, "Contrast: {}:1 {wcag}", gradient.contrast_text());
    _ = writeln!(acc, "Brightness: {luminance_start:.2} → {luminance_end:.2}");
    _ = writeln!(acc, "Mood: {}", mood_label(gradient.mood()));
    _ = writeln!(acc, "Type: {kind}");
    _ = writeln!(acc, "{RULE}");
    _ = writeln!(acc, "CSS:");
    _ = write!(acc, "{}", gradient.css_declaration());
    acc
}

#[must_use]
pub fn share_text(gradient: &GradientDescriptor, url: &str) -> String {
    let marker = if gradient.accessible() { "✅ Accessible" } else { "⚠️" };
    format!(
        "🎨 Beautiful Gradient from {APP_TITLE}:\n{}\nContrast: {}:1 {marker}\nGenerate your own at: {url}",
        gradient.colors(),
        gradient.contrast_text(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Angle, ColorPair, Mood, assert_eq2};

    fn black_white(mode: GradientMode) -> GradientDescriptor {
        GradientDescriptor::new(
            ColorPair::new("#000000".parse().unwrap(), "#FFFFFF".parse().unwrap()),
            Angle::new(135),
            mode,
            None,
            false,
        )
    }

    #[test]
    fn test_detailed_css_text() {
        assert_eq2!(
            detailed_css_text(&black_white(GradientMode::Linear)),
            "/* CSS Gradient */\n\
             background: linear-gradient(135deg, #000000, #FFFFFF);\n\
             /* Colors: #000000 → #FFFFFF */\n\
             /* Contrast Ratio: 21.00:1 ✅ Accessible */"
        );
    }

    #[test]
    fn test_analysis_text_linear() {
        assert_eq2!(
            analysis_text(&black_white(GradientMode::Linear)),
            "🎨 Gradient Analysis:\n\
             ────────────────────\n\
             Colors: #000000 → #FFFFFF\n\
             Contrast: 21.00:1 ✅ WCAG Compliant\n\
             Brightness: 0.00 → 1.00\n\
             Mood: 🎲 Random\n\
             Type: linear (135°)\n\
             ────────────────────\n\
             CSS:\n\
             background: linear-gradient(135deg, #000000, #FFFFFF);"
        );
    }

    #[test]
    fn test_analysis_text_radial_low_contrast_with_mood() {
        let it = GradientDescriptor::new(
            Mood::Dark.anchors(),
            Angle::new(10),
            GradientMode::Radial,
            Some(Mood::Dark),
            false,
        );
        let text = analysis_text(&it);
        assert!(text.contains("Type: radial\n"));
        assert!(text.contains("⚠️ Low Contrast"));
        assert!(text.contains("Mood: 🌙 Dark"));
        assert!(!text.contains("°"));
    }

    #[test]
    fn test_share_text() {
        assert_eq2!(
            share_text(&black_white(GradientMode::Radial), "https://example.com"),
            "🎨 Beautiful Gradient from Gradient Studio:\n\
             #000000 → #FFFFFF\n\
             Contrast: 21.00:1 ✅ Accessible\n\
             Generate your own at: https://example.com"
        );
    }
}
