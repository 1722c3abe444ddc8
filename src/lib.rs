//! Grayscale and sharpen an image so that OCR engines have an easier time with it.
//!
//! ```no_run
//! ocr_enhance::enhance("receipt.jpg", "receipt-clean.png")?;
//! # Ok::<(), ocr_enhance::error::EnhanceError>(())
//! ```

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod args;
pub mod decode;
pub mod encode;
pub mod error;
pub mod help;
pub mod image;
mod init;
pub mod operations;
pub mod plan;

use std::path::Path;

use error::EnhanceError;
use plan::EnhancePlan;

/// Reads `input`, converts it to Rec. 601 grayscale, applies [`operations::Kernel3x3::SHARPEN`]
/// and writes the result to `output` in the format implied by its extension.
pub fn enhance(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<(), EnhanceError> {
    EnhancePlan::new(input.as_ref(), output.as_ref()).execute()
}
