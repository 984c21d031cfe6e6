// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{APP_TITLE, ClipboardResult, ClipboardService, GradientDescriptor, share_text};

/// Hands a title, text and url to a native share sheet.
pub trait ShareService {
    /// Returns `false` when there is no native share target, or the user dismissed it.
    fn try_share(&mut self, title: &str, text: &str, url: &str) -> bool;
}

/// Terminals have no share sheet. Sharing always falls back to the clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNativeShare;

impl ShareService for NoNativeShare {
    fn try_share(&mut self, _: &str, _: &str, _: &str) -> bool { false }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// The share text was put on the clipboard instead.
    CopiedToClipboard(String),
}

/// # Errors
///
/// If the native share is unavailable and the clipboard fallback fails too.
pub fn share_gradient(
    share: &mut (impl ShareService + ?Sized),
    clipboard: &mut (impl ClipboardService + ?Sized),
    gradient: &GradientDescriptor,
    url: &str,
) -> ClipboardResult<ShareOutcome> {
    let text = share_text(gradient, url);

    if share.try_share(APP_TITLE, &text, url) {
        return Ok(ShareOutcome::Shared);
    }

    // % is Display, ? is Debug.
    tracing::debug!(message = "🔗 no native share, copy to clipboard", url = %url);

    clipboard.try_to_put_content_into_clipboard(text.clone())?;
    Ok(ShareOutcome::CopiedToClipboard(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Angle, ColorPair, GradientMode, assert_eq2,
                test_fixtures::{TestClipboard, UnavailableClipboard}};

    #[derive(Debug, Default)]
    struct RecordingShare {
        calls: Vec<(String, String, String)>,
    }

    impl ShareService for RecordingShare {
        fn try_share(&mut self, title: &str, text: &str, url: &str) -> bool {
            self.calls
                .push((title.to_string(), text.to_string(), url.to_string()));
            true
        }
    }

    fn gradient() -> GradientDescriptor {
        GradientDescriptor::new(
            ColorPair::new("#000000".parse().unwrap(), "#FFFFFF".parse().unwrap()),
            Angle::new(45),
            GradientMode::Linear,
            None,
            false,
        )
    }

    #[test]
    fn test_native_share_leaves_clipboard_alone() {
        let mut share = RecordingShare::default();
        let mut clipboard = TestClipboard::default();

        let outcome =
            share_gradient(&mut share, &mut clipboard, &gradient(), "https://x.y").unwrap();

        assert_eq2!(outcome, ShareOutcome::Shared);
        assert!(clipboard.content.is_empty());
        assert_eq2!(share.calls.len(), 1);
        assert_eq2!(share.calls[0].0, "Gradient Studio");
        assert!(share.calls[0].1.contains("#000000 → #FFFFFF"));
        assert_eq2!(share.calls[0].2, "https://x.y");
    }

    #[test]
    fn test_fallback_copies_share_text() {
        let mut clipboard = TestClipboard::default();

        let outcome =
            share_gradient(&mut NoNativeShare, &mut clipboard, &gradient(), "https://x.y")
                .unwrap();

        assert_eq2!(outcome, ShareOutcome::CopiedToClipboard(clipboard.content.clone()));
        assert!(clipboard.content.ends_with("Generate your own at: https://x.y"));
    }

    #[test]
    fn test_fallback_error_is_reported() {
        let result = share_gradient(
            &mut NoNativeShare,
            &mut UnavailableClipboard,
            &gradient(),
            "https://x.y",
        );
        assert!(result.is_err());
    }
}
