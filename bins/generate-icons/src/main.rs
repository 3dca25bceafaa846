//! generate-icons: build every app icon size from one source logo.

use anyhow::{Context, Result};
use clap::Parser;
use iconkit_cli::output::{format_count, format_duration, format_size, Status};
use iconkit_cli::progress;
use iconkit_core::error::{exit_codes, Error};
use iconkit_image::container::ContainerOutcome;
use iconkit_image::{load_image, remove_watermark, GenerationEvent, IconGenerator, OutputLayout};
use iconkit_telemetry::timed;
use image::GenericImageView;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

const USAGE: &str = "Usage: generate-icons <source-image>\nExample: generate-icons owl-logo.png";

#[derive(Parser)]
#[command(name = "generate-icons")]
#[command(about = "Generate Tauri, iOS, Android and Windows icons from a source logo")]
#[command(version)]
struct Cli {
    /// Source logo image (PNG, JPEG, WebP or GIF)
    source: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = iconkit_telemetry::init() {
        eprintln!("Warning: {}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<Error>()
                .map_or(exit_codes::FAILURE, Error::exit_code);
            Status::error(&format!("{:#}", err));
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let started = Instant::now();

    let source_path = cli
        .source
        .ok_or_else(|| Error::usage("Missing source image").with_suggestion(USAGE))?;
    if !source_path.exists() {
        return Err(Error::source_not_found(&source_path).into());
    }

    let layout = OutputLayout::beside_executable()
        .context("Failed to locate the generate-icons executable")?;
    tracing::debug!(base_dir = %layout.base_dir().display(), "Resolved output base directory");

    Status::info(&format!("Loading source image: {}", source_path.display()));
    let source = load_image(&source_path)?;
    let (width, height) = source.dimensions();
    Status::info(&format!("Original size: {}x{}", width, height));

    let pb = progress::spinner("Removing watermarks...");
    let cleaned = timed("cleanup", || remove_watermark(source));
    progress::finish_success(&pb, "Watermarks removed");

    let generator = IconGenerator::new(layout);
    let report = timed("generate", || generator.run_with(&cleaned, print_event))?;

    println!();
    let failed = report.failed_containers().count();
    if failed == 0 {
        Status::success(&format!(
            "All icons generated successfully: {} ({}) in {}",
            format_count(report.icons.len(), "PNG", "PNGs"),
            format_size(report.total_bytes()),
            format_duration(started.elapsed())
        ));
    } else {
        Status::warning(&format!(
            "Generated {} but {} failed; see errors above",
            format_count(report.icons.len(), "PNG", "PNGs"),
            format_count(failed, "container", "containers")
        ));
    }
    println!();
    println!("Note: If watermark removal wasn't perfect, you may want to manually edit the source image first.");

    Ok(())
}

fn print_event(event: GenerationEvent<'_>) {
    match event {
        GenerationEvent::SectionStarted(section) => Status::header(section.title()),
        GenerationEvent::IconWritten(icon) => Status::generated(&icon.path, icon.size, icon.bytes),
        GenerationEvent::ContainerFinished(outcome) => match outcome {
            ContainerOutcome::Packaged(packaged) => Status::success(&format!(
                "Generated: {} ({}, {})",
                packaged.path.display(),
                format_count(packaged.entries, "image", "images"),
                format_size(packaged.bytes)
            )),
            ContainerOutcome::Unavailable { container, reason } => {
                Status::warning(&format!("Skipping {}: {}", container, reason))
            }
            ContainerOutcome::Failed { container, error } => {
                Status::error(&format!("Error generating {}: {}", container, error))
            }
        },
    }
}
