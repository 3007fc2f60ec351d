//! Optional TOML file listing extra font files to try before the platform fonts.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Contents of the config file. Every section may be omitted.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// The `[fonts]` section.
    #[serde(default)]
    pub fonts: FontsConfig,
}

/// Extra fonts for the resolver, as `candidates = ["/path/a.ttf", ...]`.
#[derive(Debug, Default, Deserialize)]
pub struct FontsConfig {
    /// Font files tried, in order, before the platform defaults.
    #[serde(default)]
    pub candidates: Vec<PathBuf>,
}

impl Config {
    /// Read the font candidates from `path`.
    ///
    /// A missing file is not an error: the run then uses only the user font
    /// and the platform fonts.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not valid
    /// TOML of this shape.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }
}

/// Where to look for the font candidate list: `--config`, then
/// `SAMPLEGEN_CONFIG`, then the per-user file.
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("SAMPLEGEN_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Per-user font list, `~/.config/samplegen/config.toml`, or `samplegen.toml`
/// in the working directory when `HOME` is unset.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/samplegen/config.toml")
    } else {
        PathBuf::from("samplegen.toml")
    }
}
