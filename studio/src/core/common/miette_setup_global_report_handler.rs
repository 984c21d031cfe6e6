// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Install a graphical [miette](https://docs.rs/miette/latest/miette/index.html) report
//! handler for the `main() -> miette::Result<_>` of a binary.
//!
//! Miette only consults the hook when a report is actually displayed, so the terminal
//! width is computed lazily, just before output is generated.

use miette::MietteHandlerOpts;

pub const DEFAULT_REPORT_WIDTH: usize = 80;

/// The [`miette::ErrorHook`] is lazily evaluated. If an error never reaches `main`, the
/// terminal is never queried.
pub fn setup_default_miette_global_report_handler(
    app_name: &'static str,
    issues_url: &'static str,
) {
    miette::set_hook(Box::new(move |_report| {
        let width = report_width();
        // % is Display, ? is Debug.
        tracing::debug!(message = "miette report hook", app = %app_name, width = %width);
        Box::new(
            MietteHandlerOpts::new()
                .width(width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(2)
                .with_cause_chain()
                .footer(footer_text(app_name, issues_url))
                .build(),
        )
    }))
    .ok();
}

fn report_width() -> usize {
    crossterm::terminal::size()
        .map(|(columns, _rows)| usize::from(columns))
        .unwrap_or(DEFAULT_REPORT_WIDTH)
}

#[must_use]
pub fn footer_text(app_name: &str, issues_url: &str) -> String {
    format!("🎨 {app_name} ran into a problem. Please report it at {issues_url}")
}
