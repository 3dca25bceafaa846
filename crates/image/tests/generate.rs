//! End-to-end generation into a temporary base directory.

use iconkit_image::container::ContainerOutcome;
use iconkit_image::{
    remove_watermark, GenerationEvent, IconGenerator, IconPlan, OutputLayout, Section,
};
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use std::path::Path;

fn opaque_logo() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(1024, 1024, Rgba([20, 80, 160, 255]));
    for y in 300..700 {
        for x in 300..700 {
            img.put_pixel(x, y, Rgba([240, 200, 40, 255]));
        }
    }
    img
}

fn assert_png(path: &Path, size: u32) {
    let img = image::open(path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
    assert_eq!(img.dimensions(), (size, size), "{}", path.display());
    assert!(matches!(img, DynamicImage::ImageRgba8(_)), "{} is not RGBA8", path.display());
}

#[test]
fn generates_every_platform_asset() {
    let dir = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(dir.path());
    let plan = IconPlan::standard();
    let source = remove_watermark(DynamicImage::ImageRgba8(opaque_logo()));

    let generator = IconGenerator::new(layout.clone());
    let report = generator.run(&source).unwrap();

    assert_eq!(report.icons.len(), plan.png_count());

    for target in &plan.tauri {
        assert_png(&layout.icons_dir().join(target.file_name), target.size);
    }
    for target in &plan.ios {
        assert_png(&layout.ios_dir().join(target.file_name), target.size);
    }
    for bucket in &plan.android {
        for launcher in &plan.android_launchers {
            assert_png(&layout.android_dir().join(bucket.directory).join(launcher), bucket.size);
        }
    }
    for target in &plan.windows_store {
        assert_png(&layout.icons_dir().join(target.file_name), target.size);
    }
    assert_png(&dir.path().join("app-icon.png"), 512);

    // The ICO is always produced; the ICNS only where iconutil exists.
    assert_eq!(report.containers.len(), 2);
    assert!(report.failed_containers().next().is_none(), "{:?}", report.containers);
    let ico = report
        .containers
        .iter()
        .find_map(|c| match c {
            ContainerOutcome::Packaged(p) if p.path.ends_with("icon.ico") => Some(p),
            _ => None,
        })
        .unwrap();
    assert_eq!(ico.entries, 6);

    let icon_dir = ico::IconDir::read(std::fs::File::open(layout.ico_path()).unwrap()).unwrap();
    let mut widths: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
    widths.sort_unstable();
    assert_eq!(widths, vec![16, 32, 48, 64, 128, 256]);

    // The iconset staging directory never survives a run.
    assert!(!layout.icons_dir().join("icon.iconset").exists());
}

#[test]
fn reruns_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(dir.path());
    let source = remove_watermark(DynamicImage::ImageRgba8(opaque_logo()));
    let generator = IconGenerator::new(layout.clone());

    generator.run(&source).unwrap();
    let first = std::fs::read(layout.ios_dir().join("AppIcon-29x29@3x.png")).unwrap();
    generator.run(&source).unwrap();
    let second = std::fs::read(layout.ios_dir().join("AppIcon-29x29@3x.png")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn events_follow_generation_order() {
    let dir = tempfile::tempdir().unwrap();
    let source = RgbaImage::from_pixel(64, 32, Rgba([0, 0, 0, 255]));
    let generator = IconGenerator::new(OutputLayout::new(dir.path()));

    let mut sections = Vec::new();
    let mut icons = 0;
    let mut containers = 0;
    generator
        .run_with(&source, |event| match event {
            GenerationEvent::SectionStarted(section) => sections.push(section),
            GenerationEvent::IconWritten(_) => icons += 1,
            GenerationEvent::ContainerFinished(_) => containers += 1,
        })
        .unwrap();

    assert_eq!(
        sections,
        vec![
            Section::Tauri,
            Section::Containers,
            Section::Ios,
            Section::Android,
            Section::WindowsStore,
            Section::AppIcon,
        ]
    );
    assert_eq!(icons, IconPlan::standard().png_count());
    assert_eq!(containers, 2);
}

#[test]
fn container_failure_does_not_abort_generation() {
    let dir = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(dir.path());
    // A directory squatting on the ICO path makes the ICO write fail.
    std::fs::create_dir_all(layout.ico_path()).unwrap();

    let source = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
    let report = IconGenerator::new(layout.clone()).run(&source).unwrap();

    assert!(report.containers.iter().any(|c| matches!(
        c,
        ContainerOutcome::Failed { container: "icon.ico", .. }
    )));
    assert_eq!(report.icons.len(), IconPlan::standard().png_count());
    assert_png(&dir.path().join("app-icon.png"), 512);
}
