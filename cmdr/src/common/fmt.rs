// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Display;

use crossterm::style::{Color, Stylize};

pub const SOFT_PINK: Color = Color::Rgb { r: 255, g: 181, b: 234 };
pub const LIZARD_GREEN: Color = Color::Rgb { r: 20, g: 244, b: 0 };
pub const SLATE_GRAY: Color = Color::Rgb { r: 94, g: 103, b: 111 };
pub const SILVER_METALLIC: Color = Color::Rgb { r: 213, g: 217, b: 220 };
pub const FROZEN_BLUE: Color = Color::Rgb { r: 171, g: 204, b: 242 };

#[must_use]
pub fn colon() -> String { dim(":") }

#[must_use]
pub fn period() -> String { dim(".") }

/// Normal or default text style.
pub fn normal(arg_text: impl Display) -> String {
    arg_text.to_string().with(SILVER_METALLIC).to_string()
}

/// Error text style.
pub fn error(arg_text: impl Display) -> String {
    arg_text.to_string().with(SOFT_PINK).to_string()
}

/// Emphasis text style to highlight.
pub fn emphasis(arg_text: impl Display) -> String {
    arg_text.to_string().with(LIZARD_GREEN).to_string()
}

/// Headings, eg: the title above a list.
pub fn heading(arg_text: impl Display) -> String {
    arg_text.to_string().with(FROZEN_BLUE).bold().to_string()
}

/// De-emphasize (dim) text.
pub fn dim(arg_text: impl Display) -> String {
    arg_text.to_string().with(SLATE_GRAY).to_string()
}
