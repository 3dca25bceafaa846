//! Multi-resolution icon containers (`.ico`, `.icns`).
//!
//! Each packager re-derives all of its resolutions from one source PNG with
//! [`resize_with_padding_opts`](crate::resize_with_padding_opts). Failures are
//! reported as a [`ContainerOutcome`] instead of aborting generation.

mod icns;
mod ico;

pub use self::icns::IconutilPackager;
pub use self::ico::IcoPackager;

use crate::{load_image, Result};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Whether a packager can run on this host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// Ready to package
    Available,
    /// Missing a platform capability
    Unavailable(String),
}

/// A container that was written successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagedContainer {
    /// Output path
    pub path: PathBuf,
    /// Number of embedded images
    pub entries: usize,
    /// File size in bytes
    pub bytes: u64,
}

/// Result of attempting to package one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerOutcome {
    /// The container was written
    Packaged(PackagedContainer),
    /// The host cannot build this container; not an error
    Unavailable {
        /// Container name
        container: &'static str,
        /// Why it was skipped
        reason: String,
    },
    /// Packaging was attempted and failed
    Failed {
        /// Container name
        container: &'static str,
        /// Underlying cause
        error: String,
    },
}

impl ContainerOutcome {
    /// True unless packaging was attempted and failed.
    pub fn is_ok(&self) -> bool {
        !matches!(self, ContainerOutcome::Failed { .. })
    }
}

/// A multi-resolution container format.
pub trait ContainerPackager {
    /// Short name used in diagnostics, e.g. `icon.ico`
    fn name(&self) -> &'static str;

    /// Capability check; the default is always available.
    fn availability(&self) -> Availability {
        Availability::Available
    }

    /// Build the container at `output` from `source`.
    fn package(&self, source: &RgbaImage, output: &Path) -> Result<PackagedContainer>;
}

/// Load `source_path` and package it, downgrading every failure to an outcome.
pub fn package_container(
    packager: &dyn ContainerPackager,
    source_path: &Path,
    output: &Path,
) -> ContainerOutcome {
    let container = packager.name();

    if let Availability::Unavailable(reason) = packager.availability() {
        tracing::warn!(container, %reason, "Skipping container");
        return ContainerOutcome::Unavailable { container, reason };
    }

    let result = load_image(source_path)
        .and_then(|img| packager.package(&img.into_rgba8(), output));

    match result {
        Ok(packaged) => {
            tracing::info!(
                container,
                path = %packaged.path.display(),
                entries = packaged.entries,
                "Packaged container"
            );
            ContainerOutcome::Packaged(packaged)
        }
        Err(e) => {
            tracing::error!(container, error = %e, "Container packaging failed");
            ContainerOutcome::Failed {
                container,
                error: e.to_string(),
            }
        }
    }
}
