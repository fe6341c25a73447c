use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbaImage;

use crate::error::Result;
use crate::types::IconFormat;

/// Encode `img` to `output` in the given format, replacing any existing file.
pub fn write_icon(img: &RgbaImage, output: &Path, format: IconFormat) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    img.write_to(&mut writer, format.image_format())?;
    writer.flush()?;
    Ok(())
}
