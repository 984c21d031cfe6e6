// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// A file appender that never rotates. The file is created (along with nothing else)
/// right away, so the parent folder must exist.
///
/// # Errors
///
/// If `path_str` has no parent folder or no file name.
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = match path.parent() {
        Some(it) if it.as_os_str().is_empty() => std::path::Path::new("."),
        Some(it) => it,
        None => miette::bail!(
            "Can't access the folder for log file {}. It might not exist, or you may not have permission.",
            path.display()
        ),
    };

    let Some(file_name) = path.file_name() else {
        miette::bail!("Log file path {} has no file name.", path.display());
    };

    Ok(tracing_appender::rolling::never(parent, file_name))
}
