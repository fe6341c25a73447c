use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Lanczos3 convolution. Alpha is premultiplied for the filter pass and
/// divided back out, so transparent edges do not bleed dark fringes.
fn resize_options() -> ResizeOptions {
    ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
}

pub fn resize_rgba8_buffer(
    data: &[u8],
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
) -> Result<Vec<u8>> {
    if target_cols == 0 || target_rows == 0 {
        return Err(Error::InvalidDimensions {
            width: target_cols,
            height: target_rows,
        });
    }

    let mut resizer = Resizer::new();
    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        data.to_vec(),
        PixelType::U8x4,
    )?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options())?;

    Ok(dst_image.into_vec())
}

/// Resize an RGBA image to exactly `width`x`height`. The source is left untouched.
pub fn resize_rgba(src: &RgbaImage, width: u32, height: u32) -> Result<RgbaImage> {
    debug!(
        "Resizing {}x{} -> {}x{}",
        src.width(),
        src.height(),
        width,
        height
    );
    let pixels = resize_rgba8_buffer(src.as_raw(), src.width(), src.height(), width, height)?;
    RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
        Error::processing(format!("resized buffer does not fit {width}x{height} RGBA"))
    })
}
