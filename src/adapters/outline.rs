//! Scalable outline fonts backed by `ab_glyph`.

use std::path::Path;

use ab_glyph::{point, Font, FontVec, GlyphId, OutlinedGlyph, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::pixelops::interpolate;

use crate::error::SampleError;
use crate::ports::typeface::{TextBounds, Typeface};

/// A TrueType/OpenType face (or the first face of a collection).
pub struct OutlineTypeface {
    name: String,
    font: FontVec,
}

impl OutlineTypeface {
    /// Load a font file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::FontLoad`] if the file cannot be read or is not
    /// a parseable font.
    pub fn from_path(path: &Path) -> Result<Self, SampleError> {
        let load_error =
            |reason: String| SampleError::FontLoad { path: path.to_path_buf(), reason };
        let data = std::fs::read(path).map_err(|e| load_error(e.to_string()))?;
        let font = FontVec::try_from_vec_and_index(data, 0).map_err(|e| load_error(e.to_string()))?;
        Ok(Self { name: path.display().to_string(), font })
    }

    /// Lay out `text` on a single line with the baseline at the ascent.
    fn layout(&self, text: &str, size: f32) -> Vec<OutlinedGlyph> {
        let scale = PxScale::from(size);
        let scaled = self.font.as_scaled(scale);

        let mut caret = 0.0;
        let mut previous: Option<GlyphId> = None;
        let mut glyphs = Vec::with_capacity(text.len());

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
            caret += scaled.h_advance(id);
            previous = Some(id);

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                glyphs.push(outlined);
            }
        }
        glyphs
    }
}

#[allow(clippy::cast_possible_truncation)]
fn pixel_bounds(glyph: &OutlinedGlyph) -> TextBounds {
    let bb = glyph.px_bounds();
    TextBounds {
        left: bb.min.x.floor() as i32,
        top: bb.min.y.floor() as i32,
        right: bb.max.x.ceil() as i32,
        bottom: bb.max.y.ceil() as i32,
    }
}

impl Typeface for OutlineTypeface {
    fn name(&self) -> &str {
        &self.name
    }

    fn fixed_size(&self) -> Option<u32> {
        None
    }

    fn measure(&self, text: &str, size: f32) -> TextBounds {
        self.layout(text, size)
            .iter()
            .map(pixel_bounds)
            .reduce(TextBounds::union)
            .unwrap_or_default()
    }

    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, size: f32, color: Rgb<u8>) {
        let (width, height) = canvas.dimensions();

        for glyph in self.layout(text, size) {
            let bounds = pixel_bounds(&glyph);
            let (origin_x, origin_y) = (x + bounds.left, y + bounds.top);

            glyph.draw(|gx, gy, coverage| {
                let (Ok(gx), Ok(gy)) = (i32::try_from(gx), i32::try_from(gy)) else {
                    return;
                };
                let (Ok(px), Ok(py)) = (u32::try_from(origin_x + gx), u32::try_from(origin_y + gy))
                else {
                    return;
                };
                if px >= width || py >= height || coverage <= 0.0 {
                    return;
                }
                let background = *canvas.get_pixel(px, py);
                canvas.put_pixel(px, py, interpolate(color, background, coverage.min(1.0)));
            });
        }
    }
}
