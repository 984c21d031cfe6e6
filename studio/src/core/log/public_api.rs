// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;

use crate::{TracingConfig, ok};

/// Global default subscriber, which once set, can't be unset or changed. This is what
/// the `grad` binary calls.
///
/// Logging is **DISABLED** by **default**. Passing a config whose level filter is
/// [`tracing_core::LevelFilter::OFF`] does nothing, and every [`tracing::debug!`] and
/// friend in this crate stays silent.
///
/// # Errors
///
/// If the log file can't be created, or a global subscriber is already set.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Thread local subscriber, active while the returned guard lives. Returns `None` when
/// the level filter is off. This is great for tests.
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DisplayPreference;

    #[test]
    fn test_off_is_a_no_op() {
        assert!(try_initialize_logging_global(TracingConfig::off()).is_ok());
        assert!(
            try_initialize_logging_thread_local(TracingConfig::off())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_thread_local_returns_guard() {
        let guard = try_initialize_logging_thread_local(DisplayPreference::Stderr).unwrap();
        assert!(guard.is_some());
    }
}
