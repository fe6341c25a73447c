use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_SOURCE: &str = "logo.png";
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Generator parameters suitable for config files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    /// Source image every icon is derived from
    pub source: PathBuf,
    /// Directory the icons are written to; created if absent
    pub output_dir: PathBuf,
    /// If true, also write an `icons.json` manifest fragment
    pub manifest: bool,
}

impl GeneratorParams {
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            manifest: false,
        }
    }

    /// Load parameters from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            manifest: false,
        }
    }
}
