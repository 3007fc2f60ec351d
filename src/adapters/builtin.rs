//! Fixed-size bitmap face used when no font file can be loaded.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::ports::typeface::{TextBounds, Typeface};

const GLYPH_COLUMNS: i32 = 5;
const GLYPH_ROWS: i32 = 7;
/// Columns from one glyph origin to the next, including one blank column.
const ADVANCE_COLUMNS: i32 = 6;
/// Pixels per bitmap cell along each axis.
const CELL: i32 = 2;

/// Digits `0`-`9` as 5x7 bitmaps, one byte per row, most significant of the
/// low five bits on the left.
static DIGITS: [[u8; 7]; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
];

/// A 5x7 digit face drawn with 2x2 pixel cells. It cannot be scaled.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinTypeface;

impl BuiltinTypeface {
    /// Pixel height of every glyph.
    #[allow(clippy::cast_sign_loss)]
    pub const SIZE: u32 = (GLYPH_ROWS * CELL) as u32;

    /// Top-left pixel of every lit cell, relative to the layout origin.
    fn lit_cells(text: &str) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..).zip(text.chars()).flat_map(|(index, c)| {
            let glyph = c.to_digit(10).map(|d| &DIGITS[d as usize]);
            glyph.into_iter().flat_map(move |rows| {
                (0..).zip(rows.iter()).flat_map(move |(row, bits)| {
                    (0..GLYPH_COLUMNS)
                        .filter(move |&col| bits & (0x10u8 >> col) != 0)
                        .map(move |col| ((index * ADVANCE_COLUMNS + col) * CELL, row * CELL))
                })
            })
        })
    }
}

impl Typeface for BuiltinTypeface {
    fn name(&self) -> &str {
        "builtin 5x7"
    }

    fn fixed_size(&self) -> Option<u32> {
        Some(Self::SIZE)
    }

    fn measure(&self, text: &str, _size: f32) -> TextBounds {
        Self::lit_cells(text)
            .map(|(x, y)| TextBounds { left: x, top: y, right: x + CELL, bottom: y + CELL })
            .reduce(TextBounds::union)
            .unwrap_or_default()
    }

    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, _size: f32, color: Rgb<u8>) {
        #[allow(clippy::cast_sign_loss)]
        let cell = CELL as u32;
        for (cx, cy) in Self::lit_cells(text) {
            draw_filled_rect_mut(canvas, Rect::at(x + cx, y + cy).of_size(cell, cell), color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_size_is_fourteen_pixels() {
        assert_eq!(BuiltinTypeface.fixed_size(), Some(14));
    }

    #[test]
    fn measure_single_digit() {
        // "1" spans columns 1..=3 and all seven rows.
        let b = BuiltinTypeface.measure("1", 0.0);
        assert_eq!(b, TextBounds { left: 2, top: 0, right: 8, bottom: 14 });
    }

    #[test]
    fn measure_ignores_size() {
        assert_eq!(BuiltinTypeface.measure("40", 10.0), BuiltinTypeface.measure("40", 500.0));
    }

    #[test]
    fn measure_two_digits_spans_advance() {
        let b = BuiltinTypeface.measure("88", 0.0);
        assert_eq!(b.left, 0);
        assert_eq!(b.right, (ADVANCE_COLUMNS + GLYPH_COLUMNS) * CELL);
    }

    #[test]
    fn unknown_characters_are_blank() {
        assert_eq!(BuiltinTypeface.measure("x", 0.0), TextBounds::default());
        assert_eq!(BuiltinTypeface.measure("x7", 0.0).left, ADVANCE_COLUMNS * CELL);
    }

    #[test]
    fn draw_matches_measure() {
        let mut canvas = RgbImage::from_pixel(40, 30, Rgb([0, 0, 0]));
        let bounds = BuiltinTypeface.measure("17", 0.0);
        BuiltinTypeface.draw(&mut canvas, 5, 6, "17", 0.0, Rgb([255, 0, 0]));

        let inked: Vec<(u32, u32)> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0 == [255, 0, 0])
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!inked.is_empty());
        let min_x = inked.iter().map(|p| p.0).min().unwrap();
        let max_x = inked.iter().map(|p| p.0).max().unwrap();
        let min_y = inked.iter().map(|p| p.1).min().unwrap();
        let max_y = inked.iter().map(|p| p.1).max().unwrap();
        assert_eq!(i32::try_from(min_x).unwrap(), 5 + bounds.left);
        assert_eq!(i32::try_from(max_x).unwrap() + 1, 5 + bounds.right);
        assert_eq!(i32::try_from(min_y).unwrap(), 6 + bounds.top);
        assert_eq!(i32::try_from(max_y).unwrap() + 1, 6 + bounds.bottom);
    }
}
