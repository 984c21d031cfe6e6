// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          ops::Deref,
          path::Path};

use miette::IntoDiagnostic;

/// A folder under the system temp dir that is deleted when this is dropped.
#[derive(Debug)]
pub struct TempDir {
    pub inner: std::path::PathBuf,
}

/// Create a temporary directory with a random name. The directory is automatically
/// deleted when the [`TempDir`] struct is dropped.
///
/// # Errors
///
/// If the directory can't be created (permissions, full disk, other I/O errors).
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let root = std::env::temp_dir();
    let new_temp_dir = root.join(format!("gradient_studio_{}", uuid::Uuid::new_v4().simple()));
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

impl Drop for TempDir {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        std::fs::remove_dir_all(&self.inner).ok();
    }
}

/// Lets a [`TempDir`] be used wherever a path is, eg: `root.join("favorites_db")`.
impl Deref for TempDir {
    type Target = std::path::PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}

impl Display for TempDir {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}

impl AsRef<Path> for TempDir {
    fn as_ref(&self) -> &Path { &self.inner }
}
