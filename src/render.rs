//! Composition of a single numbered sample image.

use std::path::Path;

use image::RgbImage;

use crate::error::SampleError;
use crate::fonts::fit_font;
use crate::output::{save_jpeg, JPEG_QUALITY};
use crate::params::{Color, Dimensions};
use crate::ports::Typeface;

/// Share of each canvas dimension the label may occupy.
const TEXT_AREA: f64 = 0.8;

/// Render `number` centered on a solid `background` canvas.
///
/// The label is sized to the largest font that fits in 80% of the canvas
/// width and height, then positioned so its ink (not its layout origin) is
/// centered.
#[must_use]
pub fn render_label(
    number: u32,
    dims: Dimensions,
    background: Color,
    foreground: Color,
    typeface: &dyn Typeface,
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(dims.width, dims.height, background.into());
    let text = number.to_string();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (max_width, max_height) = (
        (f64::from(dims.width) * TEXT_AREA) as u32,
        (f64::from(dims.height) * TEXT_AREA) as u32,
    );
    let font = fit_font(typeface, &text, max_width, max_height);
    tracing::debug!(number, size = font.size, face = typeface.name(), "fitted font");

    let bounds = font.measure(&text);
    let x = (i64::from(dims.width) - i64::from(bounds.width())).div_euclid(2) - i64::from(bounds.left);
    let y =
        (i64::from(dims.height) - i64::from(bounds.height())).div_euclid(2) - i64::from(bounds.top);

    // Canvas sides are capped at 65535, so both offsets fit in an i32.
    #[allow(clippy::cast_possible_truncation)]
    let (x, y) = (x as i32, y as i32);
    font.draw(&mut canvas, x, y, &text, foreground.into());
    canvas
}

/// Render `number` and write it to `path` as a JPEG.
///
/// # Errors
///
/// Returns an error if the file cannot be written or encoded.
pub fn generate_image(
    number: u32,
    dims: Dimensions,
    background: Color,
    foreground: Color,
    typeface: &dyn Typeface,
    path: &Path,
) -> Result<(), SampleError> {
    let canvas = render_label(number, dims, background, foreground, typeface);
    save_jpeg(&canvas, path, JPEG_QUALITY)
}
