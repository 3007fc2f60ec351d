//! Typeface port for measuring and drawing text onto a canvas.

use image::{Rgb, RgbImage};

/// Ink bounds of a laid-out string, relative to the draw origin.
///
/// `left`/`top` are inclusive and `right`/`bottom` exclusive, so a face with
/// side bearing reports a non-zero `left` even though the string is drawn at
/// `x = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    /// Leftmost inked column.
    pub left: i32,
    /// Topmost inked row.
    pub top: i32,
    /// One past the rightmost inked column.
    pub right: i32,
    /// One past the bottom inked row.
    pub bottom: i32,
}

impl TextBounds {
    /// Width of the inked area.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height of the inked area.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Smallest bounds covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// A font face that can measure and render a single line of text.
///
/// `measure` and `draw` must share one glyph layout: drawing at `(x, y)`
/// inks exactly the area `measure` reported, offset by `(x, y)`.
pub trait Typeface {
    /// Human-readable name, used in diagnostics.
    fn name(&self) -> &str;

    /// The only pixel size this face supports, or `None` if it scales freely.
    fn fixed_size(&self) -> Option<u32>;

    /// Ink bounds of `text` at `size` pixels.
    fn measure(&self, text: &str, size: f32) -> TextBounds;

    /// Draw `text` at `size` pixels with its layout origin at `(x, y)`.
    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, size: f32, color: Rgb<u8>);
}
