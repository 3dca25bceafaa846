//! Windows `.ico` packaging, encoded in process.

use super::{ContainerPackager, PackagedContainer};
use crate::{resize_with_padding_opts, ImageError, ResizeOptions, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const NAME: &str = "icon.ico";

/// Packs a set of square resolutions into one `.ico` file.
#[derive(Debug, Clone)]
pub struct IcoPackager {
    sizes: Vec<u32>,
    options: ResizeOptions,
}

impl IcoPackager {
    /// Packager for the given edge lengths (at most 256 each).
    pub fn new(sizes: Vec<u32>, options: ResizeOptions) -> Self {
        Self { sizes, options }
    }

    /// Build the icon directory in memory. Every entry is PNG-compressed.
    pub fn build(&self, source: &RgbaImage) -> Result<IconDir> {
        let mut icon_dir = IconDir::new(ResourceType::Icon);

        for &size in &self.sizes {
            let icon = resize_with_padding_opts(source, size, &self.options)?;
            let image = IconImage::from_rgba_data(size, size, icon.into_raw());
            let entry = IconDirEntry::encode_as_png(&image)
                .map_err(|e| ImageError::packaging(NAME, format!("encoding {}x{}: {}", size, size, e)))?;
            icon_dir.add_entry(entry);
        }

        Ok(icon_dir)
    }
}

impl Default for IcoPackager {
    fn default() -> Self {
        Self::new(vec![16, 32, 48, 64, 128, 256], ResizeOptions::default())
    }
}

impl ContainerPackager for IcoPackager {
    fn name(&self) -> &'static str {
        NAME
    }

    fn package(&self, source: &RgbaImage, output: &Path) -> Result<PackagedContainer> {
        let icon_dir = self.build(source)?;

        let file = File::create(output)
            .map_err(|e| ImageError::packaging(NAME, format!("creating {}: {}", output.display(), e)))?;
        let mut writer = BufWriter::new(file);
        icon_dir
            .write(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| ImageError::packaging(NAME, format!("writing ICO data: {}", e)))?;

        Ok(PackagedContainer {
            path: output.to_path_buf(),
            entries: icon_dir.entries().len(),
            bytes: std::fs::metadata(output)?.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_build_embeds_all_sizes() {
        let source = RgbaImage::from_pixel(512, 512, Rgba([10, 120, 200, 255]));
        let icon_dir = IcoPackager::default().build(&source).unwrap();

        let widths: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
        assert_eq!(widths, vec![16, 32, 48, 64, 128, 256]);
        assert!(icon_dir.entries().iter().all(|e| e.width() == e.height()));
        assert!(icon_dir.entries().iter().all(|e| e.is_png()));
    }

    #[test]
    fn test_package_round_trips_through_reader() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("icon.ico");
        let source = RgbaImage::from_pixel(300, 150, Rgba([250, 10, 10, 255]));

        let packaged = IcoPackager::default().package(&source, &output).unwrap();
        assert_eq!(packaged.entries, 6);
        assert!(packaged.bytes > 0);

        let icon_dir = IconDir::read(File::open(&output).unwrap()).unwrap();
        assert_eq!(icon_dir.entries().len(), 6);

        // 300x150 letterboxed into 32x32: rows 0..8 are padding.
        assert!(icon_dir.entries().iter().all(|e| e.is_png()));
        let entry = icon_dir.entries().iter().find(|e| e.width() == 32).unwrap();
        let decoded = entry.decode().unwrap();
        let rgba = decoded.rgba_data();
        let pixel = |x: usize, y: usize| &rgba[(y * 32 + x) * 4..(y * 32 + x) * 4 + 4];
        assert_eq!(pixel(16, 2)[3], 0);
        assert!(pixel(16, 16)[3] >= 254);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_failure_is_reported() {
        let source = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 255]));
        let packager = IcoPackager::new(vec![16], ResizeOptions::default());

        let err = packager.package(&source, Path::new("/dev/full")).unwrap_err();
        assert!(matches!(err, ImageError::ContainerPackaging { .. }));
    }

    #[test]
    fn test_invalid_size_is_reported() {
        let source = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));
        let packager = IcoPackager::new(vec![16, 0], ResizeOptions::default());
        assert!(matches!(packager.build(&source), Err(ImageError::InvalidSize(0))));
    }
}
