// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          path::{Path, PathBuf}};

use dirs::config_dir;
use gradient_studio::{DEFAULT_STORE_FOLDER_NAME, MkdirOptions, try_mkdir};

use super::ConfigErrorCouldNot;

#[derive(Debug, Clone, Copy)]
pub enum ConfigPaths {
    TopLevelFolderName,
    ConfigFile,
    StoreFolder,
}

impl Display for ConfigPaths {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let path = match self {
            ConfigPaths::TopLevelFolderName => "gradient-studio",
            ConfigPaths::ConfigFile => "config.json",
            ConfigPaths::StoreFolder => DEFAULT_STORE_FOLDER_NAME,
        };
        write!(f, "{path}")
    }
}

/// This is where the config folder is, eg: `~/.config/gradient-studio` on Linux.
#[must_use]
pub fn try_get_config_folder_path() -> Option<PathBuf> {
    let home_config_folder_path = config_dir()?;
    Some(home_config_folder_path.join(ConfigPaths::TopLevelFolderName.to_string()))
}

#[must_use]
pub fn get_config_file_path(config_folder: &Path) -> PathBuf {
    config_folder.join(ConfigPaths::ConfigFile.to_string())
}

#[must_use]
pub fn get_store_folder_path(config_folder: &Path) -> PathBuf {
    config_folder.join(ConfigPaths::StoreFolder.to_string())
}

/// Create `config_folder` (and its parents) if it doesn't exist yet.
///
/// # Errors
///
/// If the folder can't be created.
pub fn create(config_folder: &Path) -> miette::Result<PathBuf> {
    match try_mkdir(config_folder, MkdirOptions::CreateIntermediateDirectories) {
        Ok(()) => {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "Config folder is ready.",
                config_folder = ?config_folder
            );
            Ok(config_folder.to_path_buf())
        }
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(message = "Could not create config folder.", error = ?error);
            Err(ConfigErrorCouldNot::CreateConfigFolder {
                config_folder: config_folder.display().to_string(),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use gradient_studio::{assert_eq2, try_create_temp_dir};
    use miette::IntoDiagnostic;

    use super::*;

    #[test]
    fn test_paths_are_inside_config_folder() {
        let folder = PathBuf::from("/tmp/gradient-studio");
        assert_eq2!(
            get_config_file_path(&folder),
            PathBuf::from("/tmp/gradient-studio/config.json")
        );
        assert_eq2!(
            get_store_folder_path(&folder),
            PathBuf::from("/tmp/gradient-studio/gradient_studio_db")
        );
    }

    #[test]
    fn test_create_is_idempotent() -> miette::Result<()> {
        let temp_dir = try_create_temp_dir()?;
        let folder = temp_dir.join("a").join("b");
        assert_eq2!(create(&folder)?, folder);
        assert_eq2!(create(&folder)?, folder);
        assert!(folder.is_dir());
        Ok(())
    }

    #[test]
    fn test_create_fails_on_a_file() -> miette::Result<()> {
        let temp_dir = try_create_temp_dir()?;
        let file = temp_dir.join("file");
        std::fs::write(&file, "x").into_diagnostic()?;
        assert!(create(&file).is_err());
        Ok(())
    }
}
