use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use atelier_ingest::CsvOptions;
use serde::{Deserialize, Serialize};

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "atelier.toml";

/// CLI configuration, read from TOML.
///
/// ```toml
/// photos = "data/photographs.csv"
/// artists = "data/artists.csv"
///
/// [csv]
/// delimiter = ","
/// trim = true
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub photos: Option<PathBuf>,
    pub artists: Option<PathBuf>,
    pub csv: CsvOptions,
}

impl CliConfig {
    /// Read a configuration file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Read the explicit config file, or the default one if it exists.
    pub fn discover(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply command-line paths, which take precedence over the file.
    pub fn with_overrides(mut self, photos: Option<PathBuf>, artists: Option<PathBuf>) -> Self {
        if photos.is_some() {
            self.photos = photos;
        }
        if artists.is_some() {
            self.artists = artists;
        }
        self
    }
}
