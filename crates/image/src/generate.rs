//! Drives the full icon set from one cleaned source image.

use crate::container::{package_container, ContainerOutcome, ContainerPackager, IcoPackager, IconutilPackager};
use crate::plan::{IconPlan, IconTarget, OutputLayout};
use crate::{resize_with_padding_opts, write_png, ResizeOptions, Result};
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Groups of generated assets, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Tauri bundle icons
    Tauri,
    /// `.icns` and `.ico` containers
    Containers,
    /// Xcode App Icon set
    Ios,
    /// Android mipmaps
    Android,
    /// Windows Store logos
    WindowsStore,
    /// Root level `app-icon.png`
    AppIcon,
}

impl Section {
    /// Heading shown while the section runs
    pub fn title(&self) -> &'static str {
        match self {
            Section::Tauri => "Generating Tauri Icons",
            Section::Containers => "Packaging Icon Containers",
            Section::Ios => "Generating iOS Icons",
            Section::Android => "Generating Android Icons",
            Section::WindowsStore => "Generating Windows Store Logos",
            Section::AppIcon => "Updating app-icon.png",
        }
    }
}

/// A PNG written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    /// Output path
    pub path: PathBuf,
    /// Edge length in pixels
    pub size: u32,
    /// Encoded size in bytes
    pub bytes: u64,
}

/// Progress notifications emitted while generating.
#[derive(Debug)]
pub enum GenerationEvent<'a> {
    /// A new section started
    SectionStarted(Section),
    /// A PNG was written
    IconWritten(&'a GeneratedIcon),
    /// A container finished, successfully or not
    ContainerFinished(&'a ContainerOutcome),
}

/// Everything produced by one run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Every PNG written, in order
    pub icons: Vec<GeneratedIcon>,
    /// Outcome of each container
    pub containers: Vec<ContainerOutcome>,
}

impl GenerationReport {
    /// Containers whose packaging failed
    pub fn failed_containers(&self) -> impl Iterator<Item = &ContainerOutcome> {
        self.containers.iter().filter(|c| !c.is_ok())
    }

    /// Total encoded bytes of all PNGs
    pub fn total_bytes(&self) -> u64 {
        self.icons.iter().map(|i| i.bytes).sum()
    }
}

/// Generates every asset in an [`IconPlan`] under an [`OutputLayout`].
#[derive(Debug, Clone)]
pub struct IconGenerator {
    plan: IconPlan,
    layout: OutputLayout,
    options: ResizeOptions,
}

impl IconGenerator {
    /// Generator for the standard plan with default resize options.
    pub fn new(layout: OutputLayout) -> Self {
        Self::with_plan(IconPlan::standard(), layout, ResizeOptions::default())
    }

    /// Generator with an explicit plan and resize options.
    pub fn with_plan(plan: IconPlan, layout: OutputLayout, options: ResizeOptions) -> Self {
        Self { plan, layout, options }
    }

    /// The plan being generated
    pub fn plan(&self) -> &IconPlan {
        &self.plan
    }

    /// The output layout
    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Generate everything, ignoring progress events.
    pub fn run(&self, source: &RgbaImage) -> Result<GenerationReport> {
        self.run_with(source, |_| {})
    }

    /// Generate everything, reporting progress to `observer`.
    ///
    /// PNG failures abort the run. Container failures are recorded in the
    /// report and generation continues.
    pub fn run_with<F>(&self, source: &RgbaImage, mut observer: F) -> Result<GenerationReport>
    where
        F: FnMut(GenerationEvent<'_>),
    {
        let mut report = GenerationReport::default();
        let icons_dir = self.layout.icons_dir();
        let ios_dir = self.layout.ios_dir();
        let android_dir = self.layout.android_dir();

        fs::create_dir_all(&ios_dir)?;
        fs::create_dir_all(&android_dir)?;

        observer(GenerationEvent::SectionStarted(Section::Tauri));
        self.write_targets(source, &self.plan.tauri, &icons_dir, &mut report, &mut observer)?;

        observer(GenerationEvent::SectionStarted(Section::Containers));
        let container_source = icons_dir.join(self.plan.container_source);
        let icns = IconutilPackager::new(self.plan.icns_entries.clone(), self.options.clone());
        let ico = IcoPackager::new(self.plan.ico_sizes.clone(), self.options.clone());
        let packagers: [(&dyn ContainerPackager, PathBuf); 2] =
            [(&icns, self.layout.icns_path()), (&ico, self.layout.ico_path())];
        for (packager, output) in packagers {
            let outcome = package_container(packager, &container_source, &output);
            observer(GenerationEvent::ContainerFinished(&outcome));
            report.containers.push(outcome);
        }

        observer(GenerationEvent::SectionStarted(Section::Ios));
        self.write_targets(source, &self.plan.ios, &ios_dir, &mut report, &mut observer)?;

        observer(GenerationEvent::SectionStarted(Section::Android));
        for bucket in &self.plan.android {
            let mipmap_dir = android_dir.join(bucket.directory);
            fs::create_dir_all(&mipmap_dir)?;
            for &launcher in &self.plan.android_launchers {
                let target = IconTarget {
                    file_name: launcher,
                    size: bucket.size,
                };
                self.write_target(source, target, &mipmap_dir, &mut report, &mut observer)?;
            }
        }

        observer(GenerationEvent::SectionStarted(Section::WindowsStore));
        self.write_targets(source, &self.plan.windows_store, &icons_dir, &mut report, &mut observer)?;

        observer(GenerationEvent::SectionStarted(Section::AppIcon));
        self.write_target(source, self.plan.app_icon, self.layout.base_dir(), &mut report, &mut observer)?;

        tracing::info!(
            icons = report.icons.len(),
            bytes = report.total_bytes(),
            failed_containers = report.failed_containers().count(),
            "Icon generation finished"
        );

        Ok(report)
    }

    fn write_targets<F>(
        &self,
        source: &RgbaImage,
        targets: &[IconTarget],
        dir: &Path,
        report: &mut GenerationReport,
        observer: &mut F,
    ) -> Result<()>
    where
        F: FnMut(GenerationEvent<'_>),
    {
        for &target in targets {
            self.write_target(source, target, dir, report, observer)?;
        }
        Ok(())
    }

    fn write_target<F>(
        &self,
        source: &RgbaImage,
        target: IconTarget,
        dir: &Path,
        report: &mut GenerationReport,
        observer: &mut F,
    ) -> Result<()>
    where
        F: FnMut(GenerationEvent<'_>),
    {
        let icon = resize_with_padding_opts(source, target.size, &self.options)?;
        let path = dir.join(target.file_name);
        let bytes = write_png(&icon, &path)?;

        report.icons.push(GeneratedIcon {
            path,
            size: target.size,
            bytes,
        });
        if let Some(generated) = report.icons.last() {
            observer(GenerationEvent::IconWritten(generated));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_titles() {
        assert_eq!(Section::Tauri.title(), "Generating Tauri Icons");
        assert_eq!(Section::AppIcon.title(), "Updating app-icon.png");
    }

    #[test]
    fn test_report_totals() {
        let mut report = GenerationReport::default();
        report.icons.push(GeneratedIcon { path: "a.png".into(), size: 16, bytes: 100 });
        report.icons.push(GeneratedIcon { path: "b.png".into(), size: 32, bytes: 250 });
        report.containers.push(ContainerOutcome::Failed {
            container: "icon.ico",
            error: "boom".to_string(),
        });
        report.containers.push(ContainerOutcome::Unavailable {
            container: "icon.icns",
            reason: "requires macOS".to_string(),
        });

        assert_eq!(report.total_bytes(), 350);
        assert_eq!(report.failed_containers().count(), 1);
    }
}
