// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The CSS template. Pure string formatting. Colors are validated [`HexColor`] values,
//! so nothing here needs escaping.
//!
//! [`HexColor`]: crate::HexColor

use super::{Angle, ColorPair, GradientMode};

pub const VENDOR_PREFIXES: [&str; 3] = ["-webkit-", "-moz-", "-o-"];

/// `linear-gradient(<angle>deg, <c1>, <c2>)` or
/// `radial-gradient(circle at center, <c1>, <c2>)`. The angle is ignored for radial.
#[must_use]
pub fn compose_expression(mode: GradientMode, colors: &ColorPair, angle: Angle) -> String {
    let ColorPair { start, end } = colors;
    match mode {
        GradientMode::Linear => format!("linear-gradient({angle}deg, {start}, {end})"),
        GradientMode::Radial => format!("radial-gradient(circle at center, {start}, {end})"),
    }
}

/// `background: <expression>;`
#[must_use]
pub fn css_declaration(expression: &str) -> String { format!("background: {expression};") }

/// The plain declaration followed by one line per vendor prefix.
#[must_use]
pub fn css_vendor_prefixed(expression: &str) -> String {
    let mut acc = css_declaration(expression);
    for prefix in VENDOR_PREFIXES {
        acc.push('\n');
        acc.push_str(&format!("background: {prefix}{expression};"));
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    fn pair(a: &str, b: &str) -> ColorPair {
        ColorPair::new(a.parse().unwrap(), b.parse().unwrap())
    }

    #[test]
    fn test_linear_template() {
        let it = compose_expression(
            GradientMode::Linear,
            &pair("#000000", "#FFFFFF"),
            Angle::new(90),
        );
        assert_eq2!(it, "linear-gradient(90deg, #000000, #FFFFFF)");
    }

    #[test]
    fn test_radial_template_ignores_angle() {
        let colors = pair("#111111", "#222222");
        let a = compose_expression(GradientMode::Radial, &colors, Angle::new(10));
        let b = compose_expression(GradientMode::Radial, &colors, Angle::new(200));
        assert_eq2!(a, "radial-gradient(circle at center, #111111, #222222)");
        assert_eq2!(a, b);
    }

    #[test]
    fn test_vendor_prefixed_block() {
        let it = css_vendor_prefixed("linear-gradient(0deg, #000000, #ffffff)");
        assert_eq2!(
            it,
            "background: linear-gradient(0deg, #000000, #ffffff);\n\
             background: -webkit-linear-gradient(0deg, #000000, #ffffff);\n\
             background: -moz-linear-gradient(0deg, #000000, #ffffff);\n\
             background: -o-linear-gradient(0deg, #000000, #ffffff);"
        );
    }
}
