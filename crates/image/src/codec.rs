//! Loading sources and writing PNG icons.

use crate::{ImageError, Result};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, DynamicImage, ImageEncoder, RgbaImage};
use std::path::Path;

/// Load an image from disk, whatever its format.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| ImageError::Load {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode an RGBA image as an optimized PNG.
///
/// Best compression with adaptive row filtering; the output is deterministic
/// for identical pixels.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)?;
    Ok(buffer)
}

/// Write an RGBA image as an optimized PNG, returning the encoded size in bytes.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<u64> {
    let data = encode_png(img)?;
    std::fs::write(path, &data)?;
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        bytes = data.len(),
        "Wrote PNG"
    );
    Ok(data.len() as u64)
}
