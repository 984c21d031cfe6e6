// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod auto_regen;
pub mod clipboard;
pub mod export;
pub mod favorites;
pub mod library;
pub mod report;
pub mod share;
pub mod state;

// Re-export.
pub use auto_regen::*;
pub use clipboard::*;
pub use export::*;
pub use favorites::*;
pub use library::*;
pub use report::*;
pub use share::*;
pub use state::*;
