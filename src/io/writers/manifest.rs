//! `icons.json` sidecar: the `icons` array of a web app manifest.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::types::GeneratedIcon;

pub const MANIFEST_FILENAME: &str = "icons.json";

/// One entry of a web app manifest `icons` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl From<&GeneratedIcon> for ManifestIcon {
    fn from(icon: &GeneratedIcon) -> Self {
        Self {
            src: format!("/{}", icon.filename),
            sizes: format!("{}x{}", icon.width, icon.height),
            mime_type: icon.format.mime_type().to_string(),
        }
    }
}

/// Write the manifest fragment for `icons` into `output_dir`, returning its path.
pub fn write_manifest(output_dir: &Path, icons: &[GeneratedIcon]) -> Result<PathBuf> {
    let entries: Vec<ManifestIcon> = icons.iter().map(ManifestIcon::from).collect();
    let manifest_path = output_dir.join(MANIFEST_FILENAME);

    let json_string = serde_json::to_string_pretty(&entries)?;
    std::fs::write(&manifest_path, json_string)?;

    info!("Created icon manifest: {:?}", manifest_path);
    Ok(manifest_path)
}
