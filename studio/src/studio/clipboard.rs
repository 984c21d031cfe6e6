// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use copypasta_ext::{copypasta::ClipboardProvider, x11_fork::ClipboardContext};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::{GradientDescriptor, detailed_css_text, throws};

pub type ClipboardResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Abstraction for the clipboard, so tests don't touch the real one.
pub trait ClipboardService {
    /// # Errors
    ///
    /// If the clipboard is unavailable, eg: no display server.
    fn try_to_put_content_into_clipboard(&mut self, content: String) -> ClipboardResult<()>;

    /// # Errors
    ///
    /// If the clipboard is unavailable, eg: no display server.
    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn try_to_put_content_into_clipboard(&mut self, content: String) -> ClipboardResult<()> {
        throws!({
            let mut ctx = ClipboardContext::new()?;
            ctx.set_contents(content.clone())?;

            // % is Display, ? is Debug.
            tracing::debug!(message = "📋 copied to clipboard", copied = %content);
        })
    }

    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
        let mut ctx = ClipboardContext::new()?;
        let content = ctx.get_contents()?;
        Ok(content)
    }
}

#[derive(
    Debug, Display, EnumString, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum CopyFormat {
    /// `background: <expression>;`
    #[default]
    Css,
    /// The declaration plus comments with colors and contrast.
    Detailed,
    /// The declaration repeated for `-webkit-`, `-moz-` and `-o-`.
    #[strum(serialize = "vendor")]
    #[serde(rename = "vendor")]
    VendorPrefixed,
}

#[must_use]
pub fn format_for_copy(gradient: &GradientDescriptor, format: CopyFormat) -> String {
    match format {
        CopyFormat::Css => gradient.css_declaration(),
        CopyFormat::Detailed => detailed_css_text(gradient),
        CopyFormat::VendorPrefixed => gradient.css_vendor_prefixed(),
    }
}

/// Puts the formatted gradient on the clipboard and returns the text that was copied.
///
/// # Errors
///
/// If the clipboard is unavailable.
pub fn copy_gradient(
    clipboard: &mut (impl ClipboardService + ?Sized),
    gradient: &GradientDescriptor,
    format: CopyFormat,
) -> ClipboardResult<String> {
    let text = format_for_copy(gradient, format);
    clipboard.try_to_put_content_into_clipboard(text.clone())?;
    Ok(text)
}

pub mod test_fixtures {
    use super::{ClipboardResult, ClipboardService};

    #[derive(Debug, Default)]
    pub struct TestClipboard {
        pub content: String,
    }

    impl ClipboardService for TestClipboard {
        fn try_to_put_content_into_clipboard(
            &mut self,
            content: String,
        ) -> ClipboardResult<()> {
            self.content = content;
            Ok(())
        }

        fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
            Ok(self.content.clone())
        }
    }

    /// Every call fails, like a headless machine with no display server.
    #[derive(Debug, Default)]
    pub struct UnavailableClipboard;

    impl ClipboardService for UnavailableClipboard {
        fn try_to_put_content_into_clipboard(&mut self, _: String) -> ClipboardResult<()> {
            Err("clipboard unavailable".into())
        }

        fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
            Err("clipboard unavailable".into())
        }
    }
}
