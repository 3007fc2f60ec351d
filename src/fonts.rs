//! Font resolution and fitting text into a box.

use std::path::PathBuf;

use image::{Rgb, RgbImage};

use crate::adapters::builtin::BuiltinTypeface;
use crate::adapters::outline::OutlineTypeface;
use crate::ports::typeface::{TextBounds, Typeface};

/// Smallest font size the fitter will choose.
pub const MIN_FONT_SIZE: u32 = 10;

/// Fonts tried after any user or configured candidates.
pub const PLATFORM_FONTS: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
];

/// Ordered list of font files to try before falling back to the built-in face.
#[derive(Debug, Clone, Default)]
pub struct FontResolver {
    candidates: Vec<PathBuf>,
}

impl FontResolver {
    /// Resolver over exactly the given candidates.
    #[must_use]
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Resolver trying the user font, then configured fonts, then
    /// [`PLATFORM_FONTS`].
    #[must_use]
    pub fn with_defaults(user: Option<PathBuf>, configured: &[PathBuf]) -> Self {
        let candidates = user
            .into_iter()
            .chain(configured.iter().cloned())
            .chain(PLATFORM_FONTS.iter().map(PathBuf::from))
            .collect();
        Self::new(candidates)
    }

    /// Candidates in the order they are tried.
    #[must_use]
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Load the first candidate that parses, or the built-in face if none do.
    #[must_use]
    pub fn resolve(&self) -> Box<dyn Typeface> {
        for path in &self.candidates {
            match OutlineTypeface::from_path(path) {
                Ok(face) => {
                    tracing::debug!(font = %path.display(), "loaded font");
                    return Box::new(face);
                }
                Err(e) => tracing::debug!("{e}"),
            }
        }
        tracing::warn!("no font candidate could be loaded; using the built-in fixed-size face");
        Box::new(BuiltinTypeface)
    }
}

/// A typeface paired with the size chosen for it.
#[derive(Clone, Copy)]
pub struct FittedFont<'a> {
    /// The face.
    pub typeface: &'a dyn Typeface,
    /// Pixel size.
    pub size: u32,
}

impl FittedFont<'_> {
    /// Ink bounds of `text` at the fitted size.
    #[must_use]
    pub fn measure(&self, text: &str) -> TextBounds {
        self.typeface.measure(text, self.pixel_size())
    }

    /// Draw `text` at the fitted size with its layout origin at `(x, y)`.
    pub fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        self.typeface.draw(canvas, x, y, text, self.pixel_size(), color);
    }

    #[allow(clippy::cast_precision_loss)]
    fn pixel_size(&self) -> f32 {
        self.size as f32
    }
}

/// Find the largest size at which `text` fits within `max_width` by
/// `max_height`, searching `MIN_FONT_SIZE..=2 * min(max_width, max_height)`.
///
/// Returns [`MIN_FONT_SIZE`] if nothing fits, and the face's own size if it
/// cannot be scaled.
#[must_use]
pub fn fit_font<'a>(
    typeface: &'a dyn Typeface,
    text: &str,
    max_width: u32,
    max_height: u32,
) -> FittedFont<'a> {
    if let Some(size) = typeface.fixed_size() {
        return FittedFont { typeface, size };
    }

    let fits = |size: u32| {
        let bounds = FittedFont { typeface, size }.measure(text);
        i64::from(bounds.width()) <= i64::from(max_width)
            && i64::from(bounds.height()) <= i64::from(max_height)
    };

    let mut low = MIN_FONT_SIZE;
    let mut high = max_width.min(max_height).saturating_mul(2);
    let mut best = MIN_FONT_SIZE;

    while low <= high {
        let mid = low + (high - low) / 2;
        if fits(mid) {
            best = mid;
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }

    FittedFont { typeface, size: best }
}
