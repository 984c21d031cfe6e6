// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod color;
pub mod common;
pub mod decl_macros;
pub mod gradient;
pub mod log;
pub mod script;
pub mod storage;

// Re-export.
pub use color::*;
pub use common::*;
pub use gradient::*;
pub use log::*;
pub use script::*;
pub use storage::*;
