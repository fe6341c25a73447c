use std::path::Path;

use image::RgbaImage;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Open and decode the source image, converting it to 8-bit RGBA.
///
/// The format is guessed from the file contents first, so a PNG saved with
/// the wrong extension still loads. The file is only ever opened for reading.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(Error::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let decoded = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    debug!("Decoded {:?} as {:?}", path, decoded.color());

    let rgba = decoded.into_rgba8();
    info!(
        "Loaded source image {:?} ({}x{})",
        path,
        rgba.width(),
        rgba.height()
    );
    Ok(rgba)
}
