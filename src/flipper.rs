//! The whole job: decode, mirror, encode, and describe the outcome in one line.

use std::path::{Path, PathBuf};

use image::{ColorType, ImageFormat};

use crate::{
    decode::decode,
    encode::{encode, format_name},
    error::FlipError,
    operations::flip_horizontal,
};

/// What was written by a successful [`flip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipSummary {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub color: ColorType,
    pub format: ImageFormat,
}

/// Writes the left-to-right mirror image of `input` to `output`.
///
/// The input format is detected from the file contents, the output format from the
/// extension of `output` (falling back to the input format). The input is decoded in
/// full before anything is written, so `input` and `output` may be the same file.
pub fn flip(input: &Path, output: &Path) -> Result<FlipSummary, FlipError> {
    let mut image = decode(input, None)?;
    flip_horizontal(&mut image);
    let format = encode(&image, output)?;
    Ok(FlipSummary {
        output: output.to_path_buf(),
        width: image.width(),
        height: image.height(),
        color: image.color(),
        format,
    })
}

/// The single line shown to the user for the outcome of [`flip`].
pub fn report(result: &Result<FlipSummary, FlipError>) -> String {
    match result {
        Ok(summary) => format!(
            "flipped {}x{} {} image written to '{}'",
            summary.width,
            summary.height,
            format_name(summary.format),
            summary.output.display()
        ),
        Err(error) => error.to_string(),
    }
}
