//! Terminal output helpers for the iconkit CLI
//!
//! Provides:
//! - Status lines for generated assets
//! - Spinners for slow steps

#![warn(missing_docs)]

pub mod output;
pub mod progress;
