//! Samplegen - numbered sample image generator.

mod adapters;
mod batch;
mod cli;
mod config;
mod error;
mod fonts;
mod output;
mod params;
mod ports;
mod render;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use crate::batch::GenerationConfig;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::SampleError;
use crate::fonts::FontResolver;
use crate::params::Layout;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, honoring `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(cli: &Cli) -> Result<(), SampleError> {
    // Validate arguments before touching the filesystem
    let generation = GenerationConfig::from_cli(cli)?;
    let layout = Layout::new(generation.aspect_ratio, generation.long_edge)?;

    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    tracing::debug!(path = %config_path.display(), "config");
    let config = Config::load(&config_path).map_err(SampleError::Config)?;

    // Resolve font
    let resolver =
        FontResolver::with_defaults(cli.font.as_deref().map(PathBuf::from), &config.fonts.candidates);
    tracing::debug!(candidates = ?resolver.candidates(), "font candidates");
    let typeface = resolver.resolve();

    let mut rng = match generation.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdout = std::io::stdout();
    batch::run(&generation, &layout, typeface.as_ref(), &mut rng, &mut stdout.lock())?;

    Ok(())
}
