// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{path::Path, time::Duration};

use gradient_studio::{CopyFormat, SaveOutcome};

use crate::fmt;

#[must_use]
pub fn copied_msg(format: CopyFormat) -> String {
    format!(
        "📋 {a} {b} {c}{d}",
        a = fmt::normal("Copied"),
        b = fmt::emphasis(format),
        c = fmt::normal("CSS to the clipboard"),
        d = fmt::period()
    )
}

#[must_use]
pub fn shared_msg() -> String {
    format!("🔗 {}{}", fmt::normal("Shared"), fmt::period())
}

#[must_use]
pub fn share_copied_msg() -> String {
    format!(
        "🔗 {a}{b}",
        a = fmt::normal("No share target here, the share text was copied to the clipboard"),
        b = fmt::period()
    )
}

#[must_use]
pub fn favorite_toggled_msg(key: &str, is_favorite: bool) -> String {
    if is_favorite {
        format!("⭐ {} {}", fmt::emphasis(key), fmt::normal("added to favorites"))
    } else {
        format!("✖ {} {}", fmt::emphasis(key), fmt::normal("removed from favorites"))
    }
}

#[must_use]
pub fn no_favorites_msg() -> String {
    fmt::dim("No favorites yet. Add one with `grad favorite toggle C1 C2`.")
}

#[must_use]
pub fn saved_msg(outcome: SaveOutcome) -> String {
    match outcome {
        SaveOutcome::Saved => format!("💾 {}{}", fmt::normal("Saved to library"), fmt::period()),
        SaveOutcome::AlreadySaved => {
            format!("💾 {}{}", fmt::dim("Already in the library"), fmt::period())
        }
    }
}

#[must_use]
pub fn batch_saved_msg(saved: usize) -> String {
    format!(
        "💾 {a} {b} {c}{d}",
        a = fmt::normal("Saved"),
        b = fmt::emphasis(saved),
        c = fmt::normal(if saved == 1 { "gradient" } else { "gradients" }),
        d = fmt::period()
    )
}

#[must_use]
pub fn empty_library_msg() -> String {
    fmt::dim("The library is empty. Save with `grad library save C1 C2`.")
}

#[must_use]
pub fn export_saved_msg(path: &Path) -> String {
    format!(
        "🖼️ {a} {b}",
        a = fmt::normal("Saved as"),
        b = fmt::emphasis(path.display())
    )
}

#[must_use]
pub fn export_failed_msg(message: &str) -> String { format!("❌ {}", fmt::error(message)) }

#[must_use]
pub fn animate_header_msg(speed: u8, period: Duration, ticks: usize) -> String {
    format!(
        "⏱️ {a} {b}{c} {d} {e} {f} {g}{h}",
        a = fmt::normal("Speed"),
        b = fmt::emphasis(speed),
        c = fmt::colon(),
        d = fmt::normal("one refresh every"),
        e = fmt::emphasis(format!("{}ms", period.as_millis())),
        f = fmt::normal("for"),
        g = fmt::emphasis(format!("{ticks} refreshes")),
        h = fmt::dim(" (Ctrl+C stops)"),
    )
}

#[must_use]
pub fn all_slots_locked_msg() -> String {
    fmt::dim("Every slot is locked, nothing to refresh.")
}
