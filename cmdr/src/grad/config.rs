// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use gradient_studio::{CopyFormat, DEFAULT_COUNT, ExportOptions, GradientMode, Mood};
use miette::{Context, IntoDiagnostic};
use serde::{Deserialize, Serialize};

use super::{config_folder, get_config_file_path, get_store_folder_path,
            try_get_config_folder_path};

/// Where the share text sends people, the project homepage unless the config says otherwise.
pub const DEFAULT_SHARE_URL: &str = env!("CARGO_PKG_HOMEPAGE");
pub const DEFAULT_ANIMATION_SPEED: u8 = 1;

/// Defaults for the `grad` flags. Every field is optional in the JSON file, missing
/// ones take the value from [`StudioConfig::default`].
///
/// ```json
/// {
///   "count": 12,
///   "mode": "radial",
///   "mood": "ocean",
///   "copy_format": "detailed",
///   "animation_speed": 2,
///   "export": { "width": 1200, "height": 630, "scale": 1 },
///   "share_url": "https://example.com"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub count: usize,
    pub mode: GradientMode,
    /// `null` is the random mood.
    pub mood: Option<Mood>,
    pub copy_format: CopyFormat,
    pub animation_speed: u8,
    pub export: ExportConfig,
    pub share_url: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            mode: GradientMode::default(),
            mood: None,
            copy_format: CopyFormat::default(),
            animation_speed: DEFAULT_ANIMATION_SPEED,
            export: ExportConfig::default(),
            share_url: DEFAULT_SHARE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        let ExportOptions {
            width,
            height,
            scale,
        } = ExportOptions::default();
        Self {
            width,
            height,
            scale,
        }
    }
}

impl From<ExportConfig> for ExportOptions {
    fn from(it: ExportConfig) -> Self {
        Self {
            width: it.width,
            height: it.height,
            scale: it.scale,
        }
    }
}

impl StudioConfig {
    /// A missing file is not an error, it gives the defaults.
    ///
    /// # Errors
    ///
    /// If the file exists but can't be read, or isn't valid JSON for this struct.
    pub fn load_from(config_file: &Path) -> miette::Result<Self> {
        if !config_file.exists() {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "No config file, using defaults.",
                config_file = %config_file.display()
            );
            return Ok(Self::default());
        }

        let path = config_file.display().to_string();

        let content = std::fs::read_to_string(config_file)
            .into_diagnostic()
            .wrap_err(ConfigErrorCouldNot::ReadConfigFile { path: path.clone() })?;

        let it: Self = serde_json::from_str(&content)
            .into_diagnostic()
            .wrap_err(ConfigErrorCouldNot::ParseConfigFile { path })?;

        // % is Display, ? is Debug.
        tracing::debug!(message = "Loaded config.", config = ?it);

        Ok(it)
    }
}

/// Where the config file and the kv store are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_file: PathBuf,
    pub store_folder: PathBuf,
}

impl AppPaths {
    /// With an override, the store lives next to the given config file. Otherwise both
    /// live in the user config folder, which is created if needed.
    ///
    /// # Errors
    ///
    /// If there is no user config folder, or it can't be created.
    pub fn try_new(maybe_config_file: Option<&Path>) -> miette::Result<Self> {
        if let Some(config_file) = maybe_config_file {
            let folder = match config_file.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            return Ok(Self {
                config_file: config_file.to_path_buf(),
                store_folder: get_store_folder_path(&folder),
            });
        }

        let folder =
            try_get_config_folder_path().ok_or(ConfigErrorCouldNot::AccessConfigFolder)?;
        let folder = config_folder::create(&folder)?;
        Ok(Self {
            config_file: get_config_file_path(&folder),
            store_folder: get_store_folder_path(&folder),
        })
    }
}

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum ConfigErrorCouldNot {
    #[error("📂 Could not access the user config folder")]
    #[diagnostic(
        code(gradient_cmdr::config::access_folder),
        help("Pass `--config <PATH>` to use a config file somewhere else")
    )]
    AccessConfigFolder,

    #[error("📂 Could not create config folder: '{config_folder}'")]
    #[diagnostic(code(gradient_cmdr::config::create_folder))]
    CreateConfigFolder { config_folder: String },

    #[error("📄 Could not read config file: '{path}'")]
    #[diagnostic(code(gradient_cmdr::config::read_file))]
    ReadConfigFile { path: String },

    #[error("📄 Could not parse config file: '{path}'")]
    #[diagnostic(
        code(gradient_cmdr::config::parse_file),
        help("Fix the JSON, or delete the file to go back to the defaults")
    )]
    ParseConfigFile { path: String },
}
