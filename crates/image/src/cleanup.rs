//! Watermark cleanup for source logos.
//!
//! Light overlays (stock-site watermarks, ghosted text) are removed with a
//! hand-tuned per-pixel threshold rule followed by a 3x3 median filter. The
//! thresholds are kept exactly as they are; generated assets are compared
//! byte-for-byte between runs.

use image::{DynamicImage, Rgba, RgbaImage};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Pixels fainter than this become fully transparent.
const FAINT_ALPHA: u8 = 180;
/// Pixels below this opacity are candidates for whitening.
const GHOST_ALPHA: u8 = 200;
/// Channel floor for "very light" partially transparent pixels.
const LIGHT_CHANNEL: u8 = 240;
/// Channel floor for a candidate to be snapped to white.
const WHITE_CHANNEL: u8 = 230;

const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);
const OPAQUE_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Remove light overlay artifacts from a source image.
///
/// The image is converted to RGBA (adding an opaque alpha channel when the
/// source has none), every pixel is passed through [`classify_pixel`], and
/// the result is smoothed with [`median_filter`].
///
/// # Example
/// ```
/// use image::{DynamicImage, Rgba, RgbaImage};
/// use iconkit_image::remove_watermark;
///
/// let faint = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 150]));
/// let cleaned = remove_watermark(DynamicImage::ImageRgba8(faint));
/// assert_eq!(cleaned.get_pixel(1, 1), &Rgba([255, 255, 255, 0]));
/// ```
pub fn remove_watermark(img: DynamicImage) -> RgbaImage {
    let mut rgba = img.into_rgba8();
    rewrite_pixels(&mut rgba);
    median_filter(&rgba)
}

/// Apply the watermark threshold rule to a single pixel.
///
/// - alpha below 180: transparent white
/// - alpha below 200, or very light (all channels above 240) and not fully
///   opaque: opaque white if all channels are above 230, otherwise unchanged
/// - everything else: unchanged
pub fn classify_pixel(pixel: Rgba<u8>) -> Rgba<u8> {
    let Rgba([r, g, b, a]) = pixel;

    if a < FAINT_ALPHA {
        return TRANSPARENT_WHITE;
    }

    let very_light = r > LIGHT_CHANNEL && g > LIGHT_CHANNEL && b > LIGHT_CHANNEL && a < 255;
    if a < GHOST_ALPHA || very_light {
        if r > WHITE_CHANNEL && g > WHITE_CHANNEL && b > WHITE_CHANNEL {
            return OPAQUE_WHITE;
        }
        // A ghosted but coloured pixel is kept as is.
    }

    pixel
}

/// Rewrite every pixel in place with [`classify_pixel`].
pub fn rewrite_pixels(img: &mut RgbaImage) {
    #[cfg(not(feature = "parallel"))]
    rewrite_pixels_sequential(img);

    #[cfg(feature = "parallel")]
    rewrite_pixels_parallel(img);
}

/// 3x3 median filter, computed independently for each channel.
///
/// Pixels outside the image are taken from the nearest edge pixel.
pub fn median_filter(img: &RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return img.clone();
    }

    #[cfg(not(feature = "parallel"))]
    return median_filter_sequential(img);

    #[cfg(feature = "parallel")]
    return median_filter_parallel(img);
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn rewrite_pixels_sequential(img: &mut RgbaImage) {
    for pixel in img.pixels_mut() {
        *pixel = classify_pixel(*pixel);
    }
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn median_filter_sequential(img: &RgbaImage) -> RgbaImage {
    let mut output = RgbaImage::new(img.width(), img.height());
    for (x, y, pixel) in output.enumerate_pixels_mut() {
        *pixel = median_at(img, x, y);
    }
    output
}

#[cfg(feature = "parallel")]
fn rewrite_pixels_parallel(img: &mut RgbaImage) {
    img.par_chunks_exact_mut(4).for_each(|px| {
        let Rgba(out) = classify_pixel(Rgba([px[0], px[1], px[2], px[3]]));
        px.copy_from_slice(&out);
    });
}

#[cfg(feature = "parallel")]
fn median_filter_parallel(img: &RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    let mut output = RgbaImage::new(width, height);
    output
        .par_chunks_exact_mut(width as usize * 4)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let Rgba(out) = median_at(img, x as u32, y as u32);
                px.copy_from_slice(&out);
            }
        });
    output
}

fn median_at(img: &RgbaImage, x: u32, y: u32) -> Rgba<u8> {
    let (width, height) = img.dimensions();
    let mut window = [[0u8; 9]; 4];

    let mut n = 0;
    for dy in -1i64..=1 {
        let sy = (i64::from(y) + dy).clamp(0, i64::from(height) - 1) as u32;
        for dx in -1i64..=1 {
            let sx = (i64::from(x) + dx).clamp(0, i64::from(width) - 1) as u32;
            let Rgba(channels) = *img.get_pixel(sx, sy);
            for (band, value) in channels.into_iter().enumerate() {
                window[band][n] = value;
            }
            n += 1;
        }
    }

    let mut out = [0u8; 4];
    for (band, values) in window.iter_mut().enumerate() {
        values.sort_unstable();
        out[band] = values[4];
    }
    Rgba(out)
}
