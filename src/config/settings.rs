use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

use super::defaults::*;

/// Card layout configuration, shared read-only by every page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardLayoutConfig {
    #[serde(default)]
    pub card: CardSize,
    pub station: Station,
    pub fonts: Fonts,
    /// Top edge of the QSO table in points
    #[serde(default = "default_table_top")]
    pub table_top: f32,
    #[serde(default)]
    pub files: FileLocations,
    /// Optional line printed below the table
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Page size in points
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CardSize {
    pub width: f32,
    pub height: f32,
}

impl Default for CardSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CARD_WIDTH,
            height: DEFAULT_CARD_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Station {
    pub callsign: String,
}

/// Font choice for one text region
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FontRegion {
    pub name: String,
    pub path: PathBuf,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Fonts {
    /// Callsign font (own station and correspondent)
    pub callsign: FontRegion,
    /// Table and remarks font
    pub body: FontRegion,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileLocations {
    #[serde(default = "default_contacts")]
    pub contacts: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for FileLocations {
    fn default() -> Self {
        Self {
            contacts: default_contacts(),
            output: default_output(),
        }
    }
}

fn default_table_top() -> f32 {
    DEFAULT_TABLE_TOP
}

fn default_contacts() -> PathBuf {
    PathBuf::from(DEFAULT_CONTACTS_FILE)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

impl CardLayoutConfig {
    /// Parse a configuration from JSON text
    ///
    /// Paths are left as written; see [`CardLayoutConfig::resolve_paths`].
    pub fn from_json(content: &str, source: &Path) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            path: source.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a configuration file
    ///
    /// Relative paths inside the file are resolved against its directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_json(&content, path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolve_paths(base))
    }

    /// Make relative file and font paths relative to `base`
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.files.contacts);
        resolve(&mut self.files.output);
        resolve(&mut self.fonts.callsign.path);
        resolve(&mut self.fonts.body.path);
        self
    }

    /// Check the geometric invariants the layout relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |name: &str, v: f32| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!(
                    "{} must be a positive number, got {}",
                    name, v
                )))
            }
        };
        positive("card.width", self.card.width)?;
        positive("card.height", self.card.height)?;
        positive("fonts.callsign.size", self.fonts.callsign.size)?;
        positive("fonts.body.size", self.fonts.body.size)?;
        positive("table_top", self.table_top)?;

        if self.station.callsign.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "station.callsign must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
