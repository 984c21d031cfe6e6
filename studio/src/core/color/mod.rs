// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color primitives used by the gradient sampler.
//!
//! ## Organization:
//! - `hex_color` - [`HexColor`], a validated `#rrggbb` value that keeps its spelling
//! - `luminance` - WCAG relative luminance and contrast ratio
//! - `oklch` - hue rotation and lightness changes in a perceptually uniform space
//! - `palette` - 5 stop palettes interpolated in Oklab

// Attach sources.
pub mod hex_color;
pub mod luminance;
pub mod oklch;
pub mod palette;

// Re-export.
pub use hex_color::*;
pub use luminance::*;
pub use oklch::*;
pub use palette::*;
