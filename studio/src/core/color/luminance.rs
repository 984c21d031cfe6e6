// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! WCAG 2.x relative luminance and contrast ratio.
//!
//! More info:
//! - <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
//! - <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>

use super::HexColor;

/// Minimum ratio for body text under WCAG AA. A pair is accessible only when its ratio
/// is strictly greater than this.
pub const WCAG_AA_BODY_TEXT_RATIO: f64 = 4.5;

/// Colors of a freshly built pair that fall below this ratio get their second color
/// darkened once.
pub const MIN_VISUAL_SEPARATION_RATIO: f64 = 2.0;

/// Gamma corrected sRGB to linear, ITU-R BT.709 luma weights. Result is in `0.0..=1.0`.
#[must_use]
pub fn relative_luminance(color: &HexColor) -> f64 {
    let [red, green, blue] = color.rgb();
    0.2126 * linearize(red) + 0.7152 * linearize(green) + 0.0722 * linearize(blue)
}

fn linearize(channel: u8) -> f64 {
    let it = f64::from(channel) / 255.0;
    if it <= 0.039_28 {
        it / 12.92
    } else {
        ((it + 0.055) / 1.055).powf(2.4)
    }
}

/// `(L1 + 0.05) / (L2 + 0.05)` where `L1` is the lighter of the two. Symmetric, and
/// never less than `1.0`.
#[must_use]
pub fn contrast(c1: &HexColor, c2: &HexColor) -> f64 {
    let (lighter, darker) = {
        let a = relative_luminance(c1);
        let b = relative_luminance(c2);
        if a >= b { (a, b) } else { (b, a) }
    };
    (lighter + 0.05) / (darker + 0.05)
}

#[must_use]
pub fn is_accessible(contrast_ratio: f64) -> bool {
    contrast_ratio > WCAG_AA_BODY_TEXT_RATIO
}

/// Black on light backgrounds and white on dark ones. Used to label swatches.
#[must_use]
pub fn readable_text_color(background: &HexColor) -> HexColor {
    if relative_luminance(background) > 0.5 {
        HexColor::from_rgb8(0, 0, 0)
    } else {
        HexColor::from_rgb8(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn hex(it: &str) -> HexColor { HexColor::try_parse(it).unwrap() }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_black_and_white_is_max_ratio() {
        let ratio = contrast(&hex("#000000"), &hex("#FFFFFF"));
        assert!((ratio - 21.0).abs() < 1e-9);
        assert!(is_accessible(ratio));
    }

    #[test]
    fn test_same_color_is_ratio_one() {
        let ratio = contrast(&hex("#8bc6ec"), &hex("#8bc6ec"));
        assert!((ratio - 1.0).abs() < 1e-12);
        assert!(!is_accessible(ratio));
    }

    #[test_case("#000000", 0.0)]
    #[test_case("#ffffff", 1.0)]
    #[test_case("#ff0000", 0.2126)]
    #[test_case("#00ff00", 0.7152)]
    #[test_case("#0000ff", 0.0722)]
    #[test_case("#808080", 0.2159)]
    fn test_relative_luminance(input: &str, expected: f64) {
        assert_close(relative_luminance(&hex(input)), expected);
    }

    #[test_case("#777777", "#ffffff", 4.48)]
    #[test_case("#4a569d", "#dc2424", 1.39)]
    #[test_case("#0f2027", "#203a43", 1.39)]
    #[test_case("#134e5e", "#71b280", 3.68)]
    fn test_known_ratios(a: &str, b: &str, expected: f64) {
        assert_close(contrast(&hex(a), &hex(b)), expected);
    }

    #[test]
    fn test_contrast_is_symmetric_and_pure() {
        let a = hex("#ff5f6d");
        let b = hex("#ffc371");
        let first = contrast(&a, &b);
        assert_eq!(first, contrast(&b, &a));
        assert_eq!(first, contrast(&a, &b));
        assert!(first >= 1.0);
    }

    #[test]
    fn test_accessible_threshold_is_strict() {
        assert!(!is_accessible(4.5));
        assert!(is_accessible(4.500_001));
    }

    #[test]
    fn test_readable_text_color() {
        assert_eq!(readable_text_color(&hex("#fffde7")).as_str(), "#000000");
        assert_eq!(readable_text_color(&hex("#0f2027")).as_str(), "#ffffff");
    }
}
