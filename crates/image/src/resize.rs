//! Aspect-preserving resize onto a square, padded canvas.

use crate::{ImageError, Result};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Options for padded resizing.
#[derive(Debug, Clone)]
pub struct ResizeOptions {
    /// Canvas colour around the scaled content
    pub background: Rgba<u8>,
    /// Resampling filter
    pub filter: FilterType,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            background: Rgba([255, 255, 255, 0]), // Transparent white
            filter: FilterType::Lanczos3,
        }
    }
}

/// Validate a requested icon size.
///
/// This is the entry point for sizes that arrive as signed integers (custom
/// tables, library callers). The built-in tables are already `u32` and go
/// straight to [`fit_dimensions`], which rejects zero on its own.
///
/// # Example
/// ```
/// use iconkit_image::{icon_size, ImageError};
///
/// assert_eq!(icon_size(48).unwrap(), 48);
/// assert!(matches!(icon_size(0), Err(ImageError::InvalidSize(0))));
/// assert!(matches!(icon_size(-16), Err(ImageError::InvalidSize(-16))));
/// ```
pub fn icon_size(size: i64) -> Result<u32> {
    match u32::try_from(size) {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ImageError::InvalidSize(size)),
    }
}

/// Calculate the scaled content dimensions for a square target.
///
/// The longer source side always becomes exactly `size`; the shorter side is
/// floored and kept at least one pixel.
///
/// # Example
/// ```
/// use iconkit_image::fit_dimensions;
///
/// assert_eq!(fit_dimensions(1920, 1080, 128).unwrap(), (128, 72));
/// assert_eq!(fit_dimensions(300, 1000, 87).unwrap(), (26, 87));
/// ```
pub fn fit_dimensions(width: u32, height: u32, size: u32) -> Result<(u32, u32)> {
    if size == 0 {
        return Err(ImageError::InvalidSize(0));
    }
    if width == 0 || height == 0 {
        return Err(ImageError::EmptySourceImage { width, height });
    }

    let scale_short = |short: u32, long: u32| -> u32 {
        let scaled = u64::from(short) * u64::from(size) / u64::from(long);
        (scaled as u32).max(1)
    };

    if width >= height {
        Ok((size, scale_short(height, width)))
    } else {
        Ok((scale_short(width, height), size))
    }
}

/// Top-left offset that centers content of the given dimensions.
pub fn center_offset(size: u32, width: u32, height: u32) -> (u32, u32) {
    ((size - width) / 2, (size - height) / 2)
}

/// Resize an image to fit a transparent `size`x`size` canvas.
pub fn resize_with_padding(source: &RgbaImage, size: u32) -> Result<RgbaImage> {
    resize_with_padding_opts(source, size, &ResizeOptions::default())
}

/// Resize an image to fit a `size`x`size` canvas with custom options.
///
/// # Arguments
/// * `source` - Cleaned source image
/// * `size` - Edge length of the square output
/// * `options` - Background colour and resampling filter
///
/// # Returns
/// A new image of exactly `size`x`size` with the source content centered
pub fn resize_with_padding_opts(
    source: &RgbaImage,
    size: u32,
    options: &ResizeOptions,
) -> Result<RgbaImage> {
    let (new_width, new_height) = fit_dimensions(source.width(), source.height(), size)?;

    let resized = if (new_width, new_height) == source.dimensions() {
        source.clone()
    } else {
        resample(source, new_width, new_height, options.filter)
    };

    let mut canvas = RgbaImage::from_pixel(size, size, options.background);
    let (x_offset, y_offset) = center_offset(size, new_width, new_height);
    paste_masked(&mut canvas, &resized, x_offset, y_offset);

    Ok(canvas)
}

/// Resample in premultiplied alpha so transparent pixels add no colour.
pub(crate) fn resample(source: &RgbaImage, width: u32, height: u32, filter: FilterType) -> RgbaImage {
    let mut premultiplied = source.clone();
    for pixel in premultiplied.pixels_mut() {
        let alpha = u32::from(pixel[3]);
        for channel in 0..3 {
            pixel[channel] = ((u32::from(pixel[channel]) * alpha + 127) / 255) as u8;
        }
    }

    let mut resized = imageops::resize(&premultiplied, width, height, filter);
    for pixel in resized.pixels_mut() {
        let alpha = u32::from(pixel[3]);
        for channel in 0..3 {
            pixel[channel] = match alpha {
                0 => 0,
                _ => ((u32::from(pixel[channel]) * 255 + alpha / 2) / alpha).min(255) as u8,
            };
        }
    }
    resized
}

/// Paste `src` onto `canvas`, using the alpha channel of `src` as the mask.
///
/// Every channel, alpha included, is interpolated between canvas and source
/// by the mask value, so a half-transparent source pixel over a transparent
/// canvas ends up at roughly a quarter opacity.
pub fn paste_masked(canvas: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    for (sx, sy, pixel) in src.enumerate_pixels() {
        let (cx, cy) = (x + sx, y + sy);
        if cx >= canvas.width() || cy >= canvas.height() {
            continue;
        }

        let mask = pixel[3];
        let target = canvas.get_pixel_mut(cx, cy);
        for channel in 0..4 {
            target[channel] = blend(target[channel], pixel[channel], mask);
        }
    }
}

fn blend(dst: u8, src: u8, mask: u8) -> u8 {
    let mask = u32::from(mask);
    let mixed = u32::from(src) * mask + u32::from(dst) * (255 - mask);
    ((mixed + 127) / 255) as u8
}
