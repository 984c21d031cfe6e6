// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # gradient_studio
//!
//! Generate random CSS gradients, score them for accessibility, and hand them to a
//! presentation layer as immutable [`GradientDescriptor`] values.
//!
//! The crate is split in two halves:
//!
//! 1. [`core`] holds the pure parts. These are the color math ([`HexColor`],
//!    [`contrast`], [`derive_palette`]) and the sampler ([`generate_batch`],
//!    [`regenerate_one`], [`build_pair`], [`sample_color`],
//!    [`compose_expression`]). The sampler has no state. Every call gets its inputs
//!    by value, plus a [`rand::Rng`], so tests can seed it.
//! 2. [`studio`] holds everything a front end needs around the sampler:
//!    - [`StudioState`] and [`reduce`]. The state is rebuilt per action and never
//!      mutated in place.
//!    - [`AutoRegenTimer`] for timed refresh of one random unlocked slot.
//!    - The collaborators that touch the outside world: [`ClipboardService`],
//!      [`ShareService`], [`FavoritesStore`], [`GradientLibrary`], and
//!      [`download_gradient`].
//!
//! ```
//! use gradient_studio::{GradientMode, LockedSlots, generate_batch};
//!
//! let mut rng = rand::rng();
//! let batch = generate_batch(6, GradientMode::Linear, None, &LockedSlots::new(), &mut rng);
//! assert_eq!(batch.len(), 6);
//! for it in &batch {
//!     assert!(it.contrast_ratio() >= 1.0);
//!     println!("{}", it.css_declaration());
//! }
//! ```
//!
//! Logging uses [`tracing`], and is off until [`try_initialize_logging_global`] is
//! called. Errors are [`miette`] reports ([`CommonResult`]).

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod studio;

// Re-export for a flat API surface.
pub use core::*;
pub use studio::*;
