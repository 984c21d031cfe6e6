// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # gradient-cmdr
//!
//! The `grad` command line app, built on [`gradient_studio`].
//!
//! ```text
//! grad generate -c 6 --mood ocean
//! grad generate --lock 0=#000000,#FFFFFF --format css
//! grad contrast "#2193B0" "#6DD5ED"
//! grad copy "#8BC6EC" "#9599E2" --format detailed
//! grad export "#0F2027" "#203A43" --angle 45 -o ~/Pictures
//! grad favorite toggle "#2193B0" "#6DD5ED"
//! grad library save-batch -c 10 --mood sunset
//! grad animate --speed 3 --ticks 10
//! ```
//!
//! Defaults for every flag come from a JSON config file in
//! `<config dir>/gradient-studio/config.json` (see [`grad::StudioConfig`]). The
//! favorites and the saved library live in a [kv] store in the same folder.
//!
//! Pass `--enable-logging` (or `-l`) to write a debug log to
//! `gradient_studio_log.txt` in the current folder.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod common;
pub mod grad;

// Re-export.
pub use common::*;

/// `mimalloc` is a replacement for the default global allocator. It's optimized for
/// multi-threaded use cases where lots of small objects are created and destroyed.
/// - <https://github.com/microsoft/mimalloc?tab=readme-ov-file#performance>
#[macro_export]
macro_rules! set_mimalloc_in_main {
    () => {{
        use mimalloc::MiMalloc;

        #[global_allocator]
        static GLOBAL: MiMalloc = MiMalloc;
    }};
}
