//! Shared types used across pwaicons.
//! Includes `IconSpec` (one row of the size table), `IconFormat`, and the
//! `GeneratedIcon` / `GenerationReport` records returned by the API.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum IconFormat {
    Png,
    Ico, // Single-image ICO, not a multi-resolution container
}

impl IconFormat {
    /// Infer the format from a filename's extension (case-insensitive).
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = Path::new(filename).extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("png") {
            Some(IconFormat::Png)
        } else if ext.eq_ignore_ascii_case("ico") {
            Some(IconFormat::Ico)
        } else {
            None
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            IconFormat::Png => "png",
            IconFormat::Ico => "ico",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            IconFormat::Png => "image/png",
            IconFormat::Ico => "image/x-icon",
        }
    }

    pub fn image_format(self) -> image::ImageFormat {
        match self {
            IconFormat::Png => image::ImageFormat::Png,
            IconFormat::Ico => image::ImageFormat::Ico,
        }
    }
}

impl std::fmt::Display for IconFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconFormat::Png => write!(f, "PNG"),
            IconFormat::Ico => write!(f, "ICO"),
        }
    }
}

/// One row of the size table: an output filename and its target dimensions.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct IconSpec {
    pub filename: &'static str,
    pub width: u32,
    pub height: u32,
}

impl IconSpec {
    pub const fn new(filename: &'static str, width: u32, height: u32) -> Self {
        Self {
            filename,
            width,
            height,
        }
    }

    pub fn format(&self) -> Option<IconFormat> {
        IconFormat::from_filename(self.filename)
    }

    /// `WxH`, as used by the `sizes` field of a web app manifest.
    pub fn sizes(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

impl std::fmt::Display for IconSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}x{})", self.filename, self.width, self.height)
    }
}

/// An icon written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedIcon {
    pub filename: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: IconFormat,
}

/// Summary of one generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub source: Option<PathBuf>, // None when generated from an in-memory image
    pub output_dir: PathBuf,
    pub icons: Vec<GeneratedIcon>,
    pub manifest: Option<PathBuf>,
}
