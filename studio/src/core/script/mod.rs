// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! File system helpers shared by the config folder, image export, and tests.

// Attach sources.
pub mod directory_create;
pub mod temp_dir;

// Re-export.
pub use directory_create::*;
pub use temp_dir::*;
