//! Parsing and validation of user-supplied generation parameters.

use std::fmt;

use image::Rgb;

use crate::error::SampleError;

/// Largest width or height a baseline JPEG can carry.
pub const MAX_DIMENSION: u32 = 65_535;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Build a color from its three channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(c: Color) -> Self {
        Rgb([c.r, c.g, c.b])
    }
}

/// Colors accepted by name. Lookup keys are lowercase with spaces as underscores.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("darkgray", Color::new(64, 64, 64)),
    ("dark_gray", Color::new(64, 64, 64)),
    ("lightgray", Color::new(192, 192, 192)),
    ("light_gray", Color::new(192, 192, 192)),
    ("white", Color::new(255, 255, 255)),
    ("black", Color::new(0, 0, 0)),
    ("red", Color::new(255, 0, 0)),
    ("green", Color::new(0, 255, 0)),
    ("blue", Color::new(0, 0, 255)),
];

/// Parse a color given as hex (`#RRGGBB`, `#RGB`, `#` optional), as
/// comma-separated components (`"128, 64, 0"`), or by name.
///
/// The three syntaxes are tried in that order. Numeric components outside
/// `0..=255` are saturated into range.
///
/// # Errors
///
/// Returns [`SampleError::InvalidColor`] if no syntax matches.
pub fn parse_color(input: &str) -> Result<Color, SampleError> {
    parse_hex(input)
        .or_else(|| parse_components(input))
        .or_else(|| parse_named(input))
        .ok_or_else(|| SampleError::InvalidColor(input.to_string()))
}

fn parse_hex(input: &str) -> Option<Color> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        6 => Some(Color::new(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        // Shorthand: each digit is doubled, so `f` becomes `ff`.
        3 => Some(Color::new(
            channel(&digits[0..1])? * 17,
            channel(&digits[1..2])? * 17,
            channel(&digits[2..3])? * 17,
        )),
        _ => None,
    }
}

fn parse_components(input: &str) -> Option<Color> {
    let parts: Vec<&str> = input.split(',').collect();
    if parts.len() != 3 {
        return None;
    }
    let channel = |s: &str| s.trim().parse::<i64>().ok().map(saturate_channel);
    Some(Color::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn saturate_channel(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

fn parse_named(input: &str) -> Option<Color> {
    let key = input.to_lowercase().replace(' ', "_");
    NAMED_COLORS.iter().find(|(name, _)| *name == key).map(|&(_, color)| color)
}

/// A horizontal-to-vertical aspect ratio such as `3:2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    /// Horizontal units.
    pub horizontal: i64,
    /// Vertical units.
    pub vertical: i64,
}

impl AspectRatio {
    /// The ratio as a single floating point value (`horizontal / vertical`).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(self) -> f64 {
        self.horizontal as f64 / self.vertical as f64
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.horizontal, self.vertical)
    }
}

/// Parse an aspect ratio string like `"3:2"`.
///
/// Any pair of integers is accepted here; degenerate values are caught when
/// the [`Layout`] is computed.
///
/// # Errors
///
/// Returns [`SampleError::InvalidAspectRatio`] unless the input splits on `:`
/// into exactly two integers.
pub fn parse_aspect_ratio(input: &str) -> Result<AspectRatio, SampleError> {
    let invalid = || SampleError::InvalidAspectRatio(input.to_string());
    let parts: Vec<&str> = input.split(':').collect();
    let [horizontal, vertical] = parts.as_slice() else {
        return Err(invalid());
    };
    Ok(AspectRatio {
        horizontal: horizontal.trim().parse().map_err(|_| invalid())?,
        vertical: vertical.trim().parse().map_err(|_| invalid())?,
    })
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// The same dimensions rotated a quarter turn.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self { width: self.height, height: self.width }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Image orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Wider than tall (for ratios above 1:1).
    Landscape,
    /// The landscape dimensions rotated.
    Portrait,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        })
    }
}

/// The two image sizes used by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Landscape dimensions; the width is always the long edge.
    pub landscape: Dimensions,
    /// Portrait dimensions; the landscape pair swapped.
    pub portrait: Dimensions,
}

impl Layout {
    /// Compute both orientations from an aspect ratio and long-edge length.
    ///
    /// The long edge is always horizontal in landscape, so a ratio below 1:1
    /// yields a landscape height larger than the long edge.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidArgument`] if either dimension would be
    /// zero, non-finite, or larger than [`MAX_DIMENSION`].
    pub fn new(ratio: AspectRatio, long_edge: u32) -> Result<Self, SampleError> {
        if long_edge == 0 || long_edge > MAX_DIMENSION {
            return Err(SampleError::InvalidArgument(format!(
                "Long edge must be between 1 and {MAX_DIMENSION}px, got {long_edge}"
            )));
        }
        let height = (f64::from(long_edge) / ratio.value()).floor();
        if !height.is_finite() || height < 1.0 || height > f64::from(MAX_DIMENSION) {
            return Err(SampleError::InvalidArgument(format!(
                "Aspect ratio {ratio} with long edge {long_edge}px gives a height of {height}px; \
                 dimensions must be between 1 and {MAX_DIMENSION}"
            )));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let landscape = Dimensions { width: long_edge, height: height as u32 };
        Ok(Self { landscape, portrait: landscape.swapped() })
    }

    /// Dimensions for the given orientation.
    #[must_use]
    pub fn dimensions(&self, orientation: Orientation) -> Dimensions {
        match orientation {
            Orientation::Landscape => self.landscape,
            Orientation::Portrait => self.portrait,
        }
    }
}

/// Validate that a portrait fraction lies in `0.0..=1.0`.
///
/// # Errors
///
/// Returns [`SampleError::InvalidArgument`] otherwise (including NaN).
pub fn validate_portrait_fraction(fraction: f64) -> Result<f64, SampleError> {
    if (0.0..=1.0).contains(&fraction) {
        Ok(fraction)
    } else {
        Err(SampleError::InvalidArgument(format!(
            "Portrait fraction must be between 0.0 and 1.0, got {fraction}"
        )))
    }
}
