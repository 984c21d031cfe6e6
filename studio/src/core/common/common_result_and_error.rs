// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Any error that implements [`miette::Diagnostic`] converts into it with `?`, eg:
///   [`crate::ColorError`], [`crate::KvErrorCouldNot`], [`crate::ExportErrorCouldNot`].
///
/// # Example
///
/// ```
/// use gradient_studio::{CommonResult, HexColor, contrast};
///
/// fn try_contrast(c1: &str, c2: &str) -> CommonResult<f64> {
///     let c1: HexColor = c1.parse()?;
///     let c2: HexColor = c2.parse()?;
///     Ok(contrast(&c1, &c2))
/// }
///
/// assert!(try_contrast("#000000", "#FFFFFF").is_ok());
/// assert!(try_contrast("#000000", "white").is_err());
/// ```
pub type CommonResult<T> = miette::Result<T>;
