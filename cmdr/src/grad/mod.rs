// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod clap_config;
pub mod commands;
pub mod config;
pub mod config_folder;
pub mod render;
pub mod ui_str;

// Re-export.
pub use clap_config::*;
pub use commands::*;
pub use config::*;
pub use config_folder::*;
