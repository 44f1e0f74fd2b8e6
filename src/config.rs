//! # Configuration
//!
//! Optional YAML file selecting the catalogs and tuning playback and diagram
//! output. Every field has a default, so an empty file is valid.
//!
//! ```yaml
//! chords: ./my-chords.yaml
//! styles: ./my-styles.yaml
//! playback:
//!   beat-duration: 2.0
//!   open-gain: 0.05
//! diagram:
//!   width: 300
//! ```
//!
//! Relative catalog paths are resolved against the config file's directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::{ChordCatalog, StyleCatalog};
use crate::diagram::DiagramDimensions;
use crate::error::FretboardError;
use crate::playback::PlaybackSettings;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Chord catalog YAML replacing the built-in shapes.
    pub chords: Option<PathBuf>,
    /// Style catalog YAML replacing the built-in styles.
    pub styles: Option<PathBuf>,
    pub playback: PlaybackSettings,
    pub diagram: DiagramDimensions,
}

/// Catalogs selected by a config: built-in statics or loaded from disk.
pub struct Catalogs {
    chords: Option<ChordCatalog>,
    styles: Option<StyleCatalog>,
}

impl Catalogs {
    pub fn chords(&self) -> &ChordCatalog {
        self.chords.as_ref().unwrap_or_else(|| ChordCatalog::builtin())
    }

    pub fn styles(&self) -> &StyleCatalog {
        self.styles.as_ref().unwrap_or_else(|| StyleCatalog::builtin())
    }
}

fn read(path: &Path) -> Result<String, FretboardError> {
    fs::read_to_string(path)
        .map_err(|e| FretboardError::ConfigError(format!("{}: {}", path.display(), e)))
}

impl Config {
    /// Parse config YAML. Relative paths are kept as written.
    pub fn from_yaml(content: &str) -> Result<Self, FretboardError> {
        // an empty document deserializes as null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| FretboardError::ConfigError(e.to_string()))
    }

    /// Read a config file, resolving catalog paths relative to it.
    pub fn load(path: &Path) -> Result<Self, FretboardError> {
        let mut config = Self::from_yaml(&read(path)?)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for catalog in [&mut config.chords, &mut config.styles]
            .into_iter()
            .flatten()
        {
            if catalog.is_relative() {
                *catalog = base.join(&*catalog);
            }
        }
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the catalogs this config points at.
    pub fn catalogs(&self) -> Result<Catalogs, FretboardError> {
        let chords = match &self.chords {
            Some(path) => {
                log::info!("Reading chord catalog {}", path.display());
                Some(ChordCatalog::from_yaml(&read(path)?)?)
            }
            None => None,
        };
        let styles = match &self.styles {
            Some(path) => {
                log::info!("Reading style catalog {}", path.display());
                Some(StyleCatalog::from_yaml(&read(path)?)?)
            }
            None => None,
        };
        Ok(Catalogs { chords, styles })
    }
}
