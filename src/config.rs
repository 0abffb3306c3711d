// SPDX-License-Identifier: MIT
//
// Configuration file: ~/.config/truchet/config.toml.
//
// Every field is optional; absent fields take the built-in default. The
// command line overrides whatever the file says (see `Options` in main).
//
//   style     = "circle"      # bowtie | circle | triangle
//   flipped   = true
//   cell_size = 24
//   inverted  = false
//   vertical  = false
//   glyph_dir = "~/fonts/truchet"

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use truchet_svg::{DEFAULT_CELL_SIZE, TileStyle};

/// Settings read from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tile style name.
    pub style: String,
    /// Swap the checkerboard orientation.
    pub flipped: bool,
    /// Side of one SVG cell.
    pub cell_size: u32,
    /// Render negative letters.
    pub inverted: bool,
    /// Stack letters top to bottom.
    pub vertical: bool,
    /// Directory of `<letter>.txt` glyph files replacing the built-in set.
    pub glyph_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: TileStyle::default().name().to_owned(),
            flipped: false,
            cell_size: DEFAULT_CELL_SIZE,
            inverted: false,
            vertical: false,
            glyph_dir: None,
        }
    }
}

impl Config {
    /// `~/.config/truchet/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("truchet").join("config.toml"))
    }

    /// Load the explicit file, or the default file when none is given.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        let Some(path) = Self::default_path() else {
            log::debug!("no config directory, using defaults");
            return Ok(Self::default());
        };
        match fs::read_to_string(&path) {
            Ok(text) => {
                let config = Self::parse(&text)
                    .with_context(|| format!("failed to parse config file {}", path.display()))?;
                log::info!("loaded config: {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => {
                Err(e).with_context(|| format!("failed to read config file {}", path.display()))
            }
        }
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Parse TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The configured style; an unknown name falls back to the default.
    pub fn tile_style(&self) -> TileStyle {
        TileStyle::from_name(&self.style).unwrap_or_else(|| {
            log::warn!("unknown style {:?} in config, using default", self.style);
            TileStyle::default()
        })
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
