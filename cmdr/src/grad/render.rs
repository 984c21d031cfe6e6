// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Truecolor terminal output. Every function returns a `String` so callers decide when
//! to print.

use std::{collections::BTreeSet, fmt::Write as _};

use crossterm::style::{Color, Stylize};
use gradient_studio::{GradientDescriptor, GradientMode, HexColor, Palette, StudioStats,
                      contrast_summary, mood_choices, readable_text_color};

use crate::fmt;

pub const SWATCH_CELL_WIDTH: usize = 4;

fn to_crossterm(color: &HexColor) -> Color {
    let [r, g, b] = color.rgb();
    Color::Rgb { r, g, b }
}

/// A label painted on `background`, in black or white, whichever reads better.
#[must_use]
pub fn chip(background: &HexColor, label: &str) -> String {
    format!(" {label} ")
        .with(to_crossterm(&readable_text_color(background)))
        .on(to_crossterm(background))
        .to_string()
}

/// The 5 palette stops as colored blocks.
#[must_use]
pub fn render_swatch(palette: &Palette, cell_width: usize) -> String {
    palette
        .iter()
        .map(|stop| " ".repeat(cell_width).on(to_crossterm(stop)).to_string())
        .collect()
}

#[must_use]
pub fn render_shape(gradient: &GradientDescriptor) -> String {
    match gradient.mode() {
        GradientMode::Linear => format!("linear {}°", gradient.angle()),
        GradientMode::Radial => "radial".to_string(),
    }
}

/// `#3  [swatch] #AABBCC → #DDEEFF  4.48:1 ✅ Accessible  linear 135° 🔒 ⭐`
#[must_use]
pub fn render_card(slot: usize, gradient: &GradientDescriptor, is_favorite: bool) -> String {
    let colors = gradient.colors();
    let mut acc = format!(
        "{slot:>3} {swatch} {start}{end} {summary}  {shape}",
        slot = fmt::dim(format!("#{slot}")),
        swatch = render_swatch(gradient.palette(), SWATCH_CELL_WIDTH),
        start = chip(&colors.start, colors.start.as_str()),
        end = chip(&colors.end, colors.end.as_str()),
        summary = contrast_summary(gradient),
        shape = fmt::dim(render_shape(gradient)),
    );
    if gradient.locked() {
        acc.push_str(" 🔒");
    }
    if is_favorite {
        acc.push_str(" ⭐");
    }
    acc
}

/// One card per line. Slots are counted from 0, the same index `--lock` takes.
#[must_use]
pub fn render_cards(gradients: &[GradientDescriptor], favorites: &BTreeSet<String>) -> String {
    let mut acc = String::new();
    for (slot, gradient) in gradients.iter().enumerate() {
        let is_favorite = favorites.contains(&gradient.favorite_key());
        _ = writeln!(acc, "{}", render_card(slot, gradient, is_favorite));
    }
    acc
}

#[must_use]
pub fn render_palette(palette: &Palette) -> String {
    let mut acc = String::new();
    for (index, stop) in palette.iter().enumerate() {
        _ = writeln!(
            acc,
            "{} {} {}",
            fmt::dim(index),
            " ".repeat(SWATCH_CELL_WIDTH * 2).on(to_crossterm(stop)),
            fmt::normal(stop)
        );
    }
    acc
}

#[must_use]
pub fn render_moods() -> String {
    let mut acc = String::new();
    for (name, label) in mood_choices() {
        _ = writeln!(acc, "{:<14}{}", fmt::emphasis(name), fmt::normal(label));
    }
    acc
}

#[must_use]
pub fn render_stats(stats: &StudioStats) -> String {
    format!(
        "{} {}, {} {}, {} {}, {} {}, {} {}",
        fmt::heading("Total"),
        stats.total,
        fmt::dim("visible"),
        stats.visible,
        fmt::dim("accessible"),
        stats.accessible,
        fmt::dim("locked"),
        stats.locked,
        fmt::dim("favorites"),
        stats.favorites
    )
}
