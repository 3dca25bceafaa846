//! macOS `.icns` packaging through `iconutil`.

use super::{Availability, ContainerPackager, PackagedContainer};
use crate::plan::IconTarget;
use crate::{resize_with_padding_opts, write_png, ImageError, ResizeOptions, Result};
use iconkit_core::process::{command_path, run_command_checked};
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

const NAME: &str = "icon.icns";
const ICONUTIL: &str = "iconutil";

/// Writes an `.iconset` directory and hands it to `iconutil -c icns`.
#[derive(Debug, Clone)]
pub struct IconutilPackager {
    entries: Vec<IconTarget>,
    options: ResizeOptions,
}

impl IconutilPackager {
    /// Packager for the given iconset entries.
    pub fn new(entries: Vec<IconTarget>, options: ResizeOptions) -> Self {
        Self { entries, options }
    }

    /// Directory the iconset is staged in: `icon.iconset` next to `output`.
    pub fn iconset_dir(output: &Path) -> PathBuf {
        output
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("icon.iconset")
    }

    /// Render every iconset entry into `iconset_dir`.
    pub fn write_iconset(&self, source: &RgbaImage, iconset_dir: &Path) -> Result<()> {
        fs::create_dir_all(iconset_dir)?;
        for entry in &self.entries {
            let icon = resize_with_padding_opts(source, entry.size, &self.options)?;
            write_png(&icon, &iconset_dir.join(entry.file_name))?;
        }
        Ok(())
    }

    fn run_iconutil(iconset_dir: &Path, output: &Path) -> Result<()> {
        let iconset = iconset_dir.to_string_lossy();
        let output = output.to_string_lossy();
        run_command_checked(ICONUTIL, &["-c", "icns", &iconset, "-o", &output])
            .map_err(|e| ImageError::packaging(NAME, e))?;
        Ok(())
    }
}

impl ContainerPackager for IconutilPackager {
    fn name(&self) -> &'static str {
        NAME
    }

    fn availability(&self) -> Availability {
        if !cfg!(target_os = "macos") {
            return Availability::Unavailable(format!("{} requires macOS", NAME));
        }
        match command_path(ICONUTIL) {
            Some(_) => Availability::Available,
            None => Availability::Unavailable(format!("{} not found on PATH", ICONUTIL)),
        }
    }

    fn package(&self, source: &RgbaImage, output: &Path) -> Result<PackagedContainer> {
        let iconset_dir = Self::iconset_dir(output);

        let result = self
            .write_iconset(source, &iconset_dir)
            .and_then(|()| Self::run_iconutil(&iconset_dir, output));

        if let Err(e) = fs::remove_dir_all(&iconset_dir) {
            tracing::debug!(path = %iconset_dir.display(), error = %e, "Could not remove iconset");
        }
        result?;

        Ok(PackagedContainer {
            path: output.to_path_buf(),
            entries: self.entries.len(),
            bytes: fs::metadata(output)?.len(),
        })
    }
}
