//! CLI argument parsing with clap.

use clap::Parser;

/// Generate sample images with numbered labels.
#[derive(Parser, Debug)]
#[command(name = "samplegen", version, about)]
pub struct Cli {
    /// Destination folder for generated images.
    #[arg(short, long, default_value = "samples/")]
    pub output: String,

    /// Number of images to generate.
    #[arg(short = 'n', long, default_value = "40")]
    pub count: u32,

    /// Fraction of images in portrait orientation (0.0 to 1.0).
    #[arg(short, long, default_value = "0.5")]
    pub portrait_fraction: f64,

    /// Aspect ratio in format horizontal:vertical (e.g., 3:2).
    #[arg(short, long, default_value = "3:2")]
    pub aspect_ratio: String,

    /// Long edge pixel count.
    #[arg(short, long, default_value = "3000", value_parser = clap::value_parser!(u32).range(1..))]
    pub long_edge: u32,

    /// Background color (hex #RRGGBB, RGB "R,G,B", or named color).
    #[arg(short, long, default_value = "darkgray")]
    pub background: String,

    /// Foreground/text color (hex #RRGGBB, RGB "R,G,B", or named color).
    #[arg(short, long, default_value = "lightgray")]
    pub foreground: String,

    /// Random seed for reproducible orientation selection.
    #[arg(short, long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Font file tried before the configured and platform fonts.
    #[arg(long)]
    pub font: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
