// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rasterize a [`GradientDescriptor`] into a PNG, the way a browser would paint its CSS
//! expression.
//!
//! Linear gradients follow the CSS angle convention: `0deg` points up, `90deg` points
//! right, and the gradient line is `|w sin a| + |h cos a|` long so that the corners get
//! the pure start and end colors. Radial gradients are a circle centered in the image
//! that reaches the farthest corner. Colors are interpolated in sRGB.

use std::path::{Path, PathBuf};

use chrono::Utc;
use image::{Rgba, RgbaImage};
use miette::IntoDiagnostic;

use crate::{GradientDescriptor, GradientMode, MkdirOptions, try_mkdir};

pub const FAILED_DOWNLOAD_MESSAGE: &str = "Failed to download image";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub width: u32,
    pub height: u32,
    /// Pixel density multiplier. The PNG is `width * scale` by `height * scale`.
    pub scale: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            scale: 2,
        }
    }
}

impl ExportOptions {
    /// # Errors
    ///
    /// If any dimension is zero, or the scaled size overflows.
    pub fn pixel_size(&self) -> Result<(u32, u32), ExportErrorCouldNot> {
        let invalid = || ExportErrorCouldNot::UseImageSize {
            width: self.width,
            height: self.height,
            scale: self.scale,
        };
        if self.width == 0 || self.height == 0 || self.scale == 0 {
            return Err(invalid());
        }
        let width = self.width.checked_mul(self.scale).ok_or_else(invalid)?;
        let height = self.height.checked_mul(self.scale).ok_or_else(invalid)?;
        Ok((width, height))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportNotice {
    Saved(PathBuf),
    Failed(String),
}

/// `gradient-<slot + 1>-<unix_millis>.png`
#[must_use]
pub fn export_file_name(slot: usize, unix_millis: i64) -> String {
    format!("gradient-{}-{unix_millis}.png", slot + 1)
}

/// # Errors
///
/// If the options describe an empty or oversized image.
pub fn render_gradient_image(
    gradient: &GradientDescriptor,
    options: &ExportOptions,
) -> Result<RgbaImage, ExportErrorCouldNot> {
    let (width, height) = options.pixel_size()?;
    let start = gradient.colors().start.rgb();
    let end = gradient.colors().end.rgb();

    let w = f64::from(width);
    let h = f64::from(height);
    let position = GradientPosition::new(gradient, w, h);

    Ok(RgbaImage::from_fn(width, height, |x, y| {
        // Sample at pixel centers.
        let dx = f64::from(x) + 0.5 - w / 2.0;
        let dy = f64::from(y) + 0.5 - h / 2.0;
        lerp_rgba(start, end, position.at(dx, dy))
    }))
}

/// Maps an offset from the image center to a position `0..=1` on the gradient.
enum GradientPosition {
    Linear { sin: f64, cos: f64, length: f64 },
    Radial { radius: f64 },
}

impl GradientPosition {
    fn new(gradient: &GradientDescriptor, w: f64, h: f64) -> Self {
        match gradient.mode() {
            GradientMode::Linear => {
                let radians = f64::from(gradient.angle().degrees()).to_radians();
                let (sin, cos) = radians.sin_cos();
                Self::Linear {
                    sin,
                    cos,
                    length: (w * sin).abs() + (h * cos).abs(),
                }
            }
            GradientMode::Radial => Self::Radial {
                radius: (w / 2.0).hypot(h / 2.0),
            },
        }
    }

    fn at(&self, dx: f64, dy: f64) -> f64 {
        let it = match *self {
            // Screen y grows downwards, and 0deg points up.
            Self::Linear { sin, cos, length } => (dx * sin - dy * cos) / length + 0.5,
            Self::Radial { radius } => dx.hypot(dy) / radius,
        };
        it.clamp(0.0, 1.0)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_rgba(start: [u8; 3], end: [u8; 3], t: f64) -> Rgba<u8> {
    let channel = |a: u8, b: u8| {
        let (a, b) = (f64::from(a), f64::from(b));
        (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(start[0], end[0]),
        channel(start[1], end[1]),
        channel(start[2], end[2]),
        u8::MAX,
    ])
}

/// Render and write `gradient-<slot + 1>-<unix_millis>.png` into `output_dir`, creating
/// the folder if needed.
///
/// # Errors
///
/// If the folder can't be created, or the PNG can't be encoded or written.
pub fn save_gradient_png(
    gradient: &GradientDescriptor,
    slot: usize,
    output_dir: &Path,
    options: &ExportOptions,
) -> miette::Result<PathBuf> {
    let image = render_gradient_image(gradient, options)?;

    try_mkdir(output_dir, MkdirOptions::CreateIntermediateDirectories).map_err(|_| {
        ExportErrorCouldNot::CreateOutputFolder {
            output_dir: output_dir.display().to_string(),
        }
    })?;

    let path = output_dir.join(export_file_name(slot, Utc::now().timestamp_millis()));
    image.save(&path).map_err(|_| ExportErrorCouldNot::WritePng {
        path: path.display().to_string(),
    })?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🖼️ saved gradient png",
        path = %path.display(),
        width = %image.width(),
        height = %image.height()
    );

    Ok(path)
}

/// Renders on a blocking thread. Any failure is logged and reported as
/// [`ExportNotice::Failed`], and nothing is retried.
pub async fn download_gradient(
    gradient: GradientDescriptor,
    slot: usize,
    output_dir: PathBuf,
    options: ExportOptions,
) -> ExportNotice {
    let result = tokio::task::spawn_blocking(move || {
        save_gradient_png(&gradient, slot, &output_dir, &options)
    })
    .await
    .into_diagnostic()
    .and_then(|it| it);

    match result {
        Ok(path) => ExportNotice::Saved(path),
        Err(report) => {
            // % is Display, ? is Debug.
            tracing::error!(message = "🖼️ export failed", error = ?report);
            ExportNotice::Failed(FAILED_DOWNLOAD_MESSAGE.to_string())
        }
    }
}

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum ExportErrorCouldNot {
    #[error("📐 Could not use image size {width}x{height} at scale {scale}")]
    #[diagnostic(
        code(gradient_studio::export::image_size),
        help("Width, height and scale must be greater than zero")
    )]
    UseImageSize { width: u32, height: u32, scale: u32 },

    #[error("📂 Could not create output folder: '{output_dir}'")]
    #[diagnostic(code(gradient_studio::export::create_output_folder))]
    CreateOutputFolder { output_dir: String },

    #[error("🖼️ Could not write png: '{path}'")]
    #[diagnostic(code(gradient_studio::export::write_png))]
    WritePng { path: String },
}
