//! High-level, ergonomic library API: generate the full icon set from a file or an
//! in-memory image, or resize a single icon. Prefer these entrypoints over the
//! low-level `core` and `io` modules when integrating pwaicons.
use std::fs;
use std::path::Path;

use image::RgbaImage;
use tracing::{debug, info};

use crate::core::params::GeneratorParams;
use crate::core::processing::resize::resize_rgba;
use crate::core::sizes::ICON_SIZES;
use crate::error::{Error, Result};
use crate::io::loader::load_rgba;
use crate::io::writers::{write_icon, write_manifest};
use crate::types::{GeneratedIcon, GenerationReport, IconSpec};

/// Resize `src` to the dimensions of one size-table entry.
pub fn resize_icon(src: &RgbaImage, spec: &IconSpec) -> Result<RgbaImage> {
    resize_rgba(src, spec.width, spec.height)
}

fn generate_all(src: &RgbaImage, output_dir: &Path) -> Result<Vec<GeneratedIcon>> {
    let mut icons = Vec::with_capacity(ICON_SIZES.len());

    for spec in &ICON_SIZES {
        let format = spec.format().ok_or_else(|| Error::UnsupportedFormat {
            filename: spec.filename.to_string(),
        })?;
        let out_path = output_dir.join(spec.filename);

        let resized = resize_icon(src, spec)?;
        write_icon(&resized, &out_path, format)?;
        debug!("Wrote {} {} to {:?}", format, spec.sizes(), out_path);
        info!("Generated {}", spec.filename);

        icons.push(GeneratedIcon {
            filename: spec.filename.to_string(),
            path: out_path,
            width: spec.width,
            height: spec.height,
            format,
        });
    }

    Ok(icons)
}

/// Write every icon in the size table for an already-decoded image.
///
/// The output directory (and any missing parents) is created first.
pub fn generate_icons_from_image(src: &RgbaImage, output_dir: &Path) -> Result<GenerationReport> {
    fs::create_dir_all(output_dir)?;
    let icons = generate_all(src, output_dir)?;
    info!("All icons generated successfully.");

    Ok(GenerationReport {
        source: None,
        output_dir: output_dir.to_path_buf(),
        icons,
        manifest: None,
    })
}

/// Load `params.source` and write the full icon set into `params.output_dir`.
///
/// Stops at the first failure; icons already written are left in place.
pub fn generate_icons(params: &GeneratorParams) -> Result<GenerationReport> {
    info!("Output directory: {:?}", params.output_dir);
    fs::create_dir_all(&params.output_dir)?;

    let src = load_rgba(&params.source)?;
    let mut report = generate_icons_from_image(&src, &params.output_dir)?;
    report.source = Some(params.source.clone());

    if params.manifest {
        report.manifest = Some(write_manifest(&params.output_dir, &report.icons)?);
    }

    Ok(report)
}
