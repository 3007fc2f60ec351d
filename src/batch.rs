//! Batch driver: validates settings, picks orientations, and writes every image.

use std::io::Write;
use std::path::PathBuf;

use rand::Rng;

use crate::cli::Cli;
use crate::error::SampleError;
use crate::output::{ensure_output_dir, sample_filename};
use crate::params::{
    parse_aspect_ratio, parse_color, validate_portrait_fraction, AspectRatio, Color, Dimensions,
    Layout, Orientation,
};
use crate::ports::Typeface;
use crate::render::generate_image;

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Directory the images are written to.
    pub output_dir: PathBuf,
    /// Number of images.
    pub count: u32,
    /// Probability that an image is portrait.
    pub portrait_fraction: f64,
    /// Aspect ratio of landscape images.
    pub aspect_ratio: AspectRatio,
    /// Length of the long edge in pixels.
    pub long_edge: u32,
    /// Canvas fill color.
    pub background: Color,
    /// Label color.
    pub foreground: Color,
    /// Seed for orientation selection.
    pub seed: Option<u64>,
}

impl GenerationConfig {
    /// Validate and parse the command-line values.
    ///
    /// # Errors
    ///
    /// Returns an error for an out-of-range portrait fraction or an
    /// unparseable aspect ratio or color.
    pub fn from_cli(cli: &Cli) -> Result<Self, SampleError> {
        let portrait_fraction = validate_portrait_fraction(cli.portrait_fraction)?;
        let aspect_ratio = parse_aspect_ratio(&cli.aspect_ratio)?;
        let background = parse_color(&cli.background)
            .map_err(|e| SampleError::InvalidArgument(format!("Invalid background color: {e}")))?;
        let foreground = parse_color(&cli.foreground)
            .map_err(|e| SampleError::InvalidArgument(format!("Invalid foreground color: {e}")))?;

        Ok(Self {
            output_dir: PathBuf::from(&cli.output),
            count: cli.count,
            portrait_fraction,
            aspect_ratio,
            long_edge: cli.long_edge,
            background,
            foreground,
            seed: cli.seed.map(seed_from_signed),
        })
    }
}

/// Reinterpret a signed seed as the `u64` the RNG is seeded with.
fn seed_from_signed(seed: i64) -> u64 {
    u64::from_ne_bytes(seed.to_ne_bytes())
}

/// Record of one written image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// 1-based position in the batch; also the rendered label.
    pub index: u32,
    /// Chosen orientation.
    pub orientation: Orientation,
    /// Pixel size.
    pub dimensions: Dimensions,
    /// Where the file was written.
    pub path: PathBuf,
}

/// Weighted coin flip: portrait with probability `portrait_fraction`.
pub fn choose_orientation<R: Rng>(rng: &mut R, portrait_fraction: f64) -> Orientation {
    if rng.gen::<f64>() < portrait_fraction {
        Orientation::Portrait
    } else {
        Orientation::Landscape
    }
}

/// Generate every image in the batch, reporting progress to `out`.
///
/// Images are written one at a time and nothing about them is kept once
/// their progress line is out. The first failure aborts the run and leaves
/// already-written files in place. Returns the number of images written.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created, an image
/// cannot be written, or `out` cannot be written to.
pub fn run<R: Rng, W: Write>(
    config: &GenerationConfig,
    layout: &Layout,
    typeface: &dyn Typeface,
    rng: &mut R,
    out: &mut W,
) -> Result<u32, SampleError> {
    ensure_output_dir(&config.output_dir)?;

    writeln!(out, "Generating {} images...", config.count)?;
    writeln!(out, "  Output folder: {}", config.output_dir.display())?;
    writeln!(out, "  Aspect ratio: {}", config.aspect_ratio)?;
    writeln!(out, "  Long edge: {}px", config.long_edge)?;
    writeln!(out, "  Portrait fraction: {:?}", config.portrait_fraction)?;
    writeln!(out, "  Landscape dimensions: {}", layout.landscape)?;
    writeln!(out, "  Portrait dimensions: {}", layout.portrait)?;
    writeln!(out, "  Background: {}", config.background)?;
    writeln!(out, "  Foreground: {}", config.foreground)?;
    writeln!(out)?;

    for index in 1..=config.count {
        let orientation = choose_orientation(rng, config.portrait_fraction);
        let filename = sample_filename(index);
        let image = GeneratedImage {
            index,
            orientation,
            dimensions: layout.dimensions(orientation),
            path: config.output_dir.join(&filename),
        };

        generate_image(
            image.index,
            image.dimensions,
            config.background,
            config.foreground,
            typeface,
            &image.path,
        )?;

        writeln!(
            out,
            "  [{}/{}] {filename} ({}, {})",
            image.index, config.count, image.orientation, image.dimensions
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Done! Generated {} images in '{}'", config.count, config.output_dir.display())?;
    Ok(config.count)
}
