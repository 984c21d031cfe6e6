// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The gradient sampler and the values it produces.
//!
//! ## Organization:
//! - `mode` - [`GradientMode`], linear or radial
//! - `mood` - the fixed [`Mood`] presets and their two anchor colors
//! - `types` - [`ColorPair`], [`Angle`], [`LockedSlots`]
//! - `expression` - the CSS template
//! - `descriptor` - [`GradientDescriptor`], one immutable generated gradient
//! - `sampler` - the pure, stateless generation functions

// Attach sources.
pub mod descriptor;
pub mod expression;
pub mod mode;
pub mod mood;
pub mod sampler;
pub mod types;

// Re-export.
pub use descriptor::*;
pub use expression::*;
pub use mode::*;
pub use mood::*;
pub use sampler::*;
pub use types::*;
