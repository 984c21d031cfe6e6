// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fs, io::ErrorKind, path::Path};

use strum_macros::Display;

use crate::ok;

pub type FsOpResult<T> = miette::Result<T, FsOpError>;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum FsOpError {
    #[error("📂 Directory already exists: {0}")]
    #[diagnostic(code(gradient_studio::fs::directory_already_exists))]
    DirectoryAlreadyExists(String),

    #[error("🔒 Permission denied: {0}")]
    #[diagnostic(code(gradient_studio::fs::permission_denied))]
    PermissionDenied(String),

    #[error("📛 Invalid name: {0}")]
    #[diagnostic(code(gradient_studio::fs::invalid_name))]
    InvalidName(String),

    #[error("💾 I/O error")]
    #[diagnostic(code(gradient_studio::fs::io_error))]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Display, Default, Copy, Clone, PartialEq, Eq)]
pub enum MkdirOptions {
    #[default]
    CreateIntermediateDirectories,
    CreateIntermediateDirectoriesOnlyIfNotExists,
}

/// Creates a new directory at `new_path`, along with any missing parents.
///
/// # Errors
///
/// - [`FsOpError::DirectoryAlreadyExists`] with
///   [`MkdirOptions::CreateIntermediateDirectoriesOnlyIfNotExists`].
/// - [`FsOpError::PermissionDenied`], [`FsOpError::InvalidName`], or
///   [`FsOpError::IoError`] from the file system.
pub fn try_mkdir(new_path: impl AsRef<Path>, options: MkdirOptions) -> FsOpResult<()> {
    let new_path = new_path.as_ref();

    if options == MkdirOptions::CreateIntermediateDirectoriesOnlyIfNotExists
        && let Ok(true) = fs::exists(new_path)
    {
        return Err(FsOpError::DirectoryAlreadyExists(
            new_path.display().to_string(),
        ));
    }

    match fs::create_dir_all(new_path) {
        Ok(()) => ok!(),
        Err(err) => Err(handle_err(err)),
    }
}

fn handle_err(err: std::io::Error) -> FsOpError {
    match err.kind() {
        ErrorKind::PermissionDenied | ErrorKind::ReadOnlyFilesystem => {
            FsOpError::PermissionDenied(err.to_string())
        }
        ErrorKind::InvalidInput => FsOpError::InvalidName(err.to_string()),
        _ => FsOpError::IoError(err),
    }
}
