//! Icon generation for iconkit.
//!
//! This crate provides:
//! - Watermark cleanup of source logos
//! - Aspect-preserving resize onto padded square canvases
//! - Optimized PNG encoding
//! - `.ico` and `.icns` container packaging
//! - The platform size tables and the generator that writes them

#![warn(missing_docs)]

mod cleanup;
mod codec;
pub mod container;
mod error;
mod generate;
pub mod plan;
mod resize;

pub use cleanup::{classify_pixel, median_filter, remove_watermark, rewrite_pixels};
pub use codec::{encode_png, load_image, write_png};
pub use error::{ImageError, Result};
pub use generate::{GeneratedIcon, GenerationEvent, GenerationReport, IconGenerator, Section};
pub use plan::{IconPlan, OutputLayout};
pub use resize::{
    center_offset, fit_dimensions, icon_size, paste_masked, resize_with_padding,
    resize_with_padding_opts, ResizeOptions,
};
