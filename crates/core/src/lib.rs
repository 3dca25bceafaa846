//! Core utilities for iconkit
//!
//! This crate provides the functionality shared by the icon pipeline and the CLI:
//!
//! - **Error handling**: coded errors with context, suggestions and exit codes
//! - **Process execution**: running platform tools and checking they are installed
//!
//! # Example
//!
//! ```rust,no_run
//! use iconkit_core::process::{command_path, run_command};
//!
//! if command_path("iconutil").is_some() {
//!     let result = run_command("iconutil", &["--help"]).expect("iconutil failed to start");
//!     println!("{}", result.combined_output());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod process;

pub use error::{Error, ErrorCode, Result};
