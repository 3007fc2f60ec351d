//! File naming, output directory handling, and JPEG encoding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::error::SampleError;

/// Quality factor passed to the JPEG encoder.
pub const JPEG_QUALITY: u8 = 85;

/// Extension of every generated file.
pub const EXTENSION: &str = "jpg";

/// File name for the image at a 1-based `index`: four digits, zero-padded.
#[must_use]
pub fn sample_filename(index: u32) -> String {
    format!("{index:04}.{EXTENSION}")
}

/// Create the output directory and any missing parents.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_output_dir(dir: &Path) -> Result<(), SampleError> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Encode `canvas` as a baseline JPEG at `quality` and write it to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the encoder fails.
pub fn save_jpeg(canvas: &RgbImage, path: &Path, quality: u8) -> Result<(), SampleError> {
    let mut writer = BufWriter::new(File::create(path)?);
    canvas.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality))?;
    writer.flush()?;
    Ok(())
}
