//! Coded errors with context and recovery suggestions
//!
//! Every fatal condition the CLI can hit carries:
//! - An error code for programmatic handling
//! - Optional context describing what was being attempted
//! - An optional recovery suggestion
//! - A process exit code

use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Invocation errors (2xxx)
    /// Command line arguments are missing or malformed
    UsageError = 2000,
    /// The source image path does not exist
    SourceNotFound = 2001,

    // Process errors (4xxx)
    /// An external process could not be started
    ProcessError = 4000,
    /// An external tool exited unsuccessfully
    CommandFailed = 4001,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            2 => "Invocation",
            4 => "Process",
            _ => "Unknown",
        }
    }

    /// Process exit code used when this error terminates the CLI
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {}", ctx)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Exit code the CLI should terminate with
    pub fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }

    // Convenience constructors

    /// Missing or malformed command line arguments
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UsageError, message)
    }

    /// The source image does not exist
    pub fn source_not_found(path: impl AsRef<Path>) -> Self {
        Self::new(
            ErrorCode::SourceNotFound,
            format!("Source image not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Check the path and that you have read permissions")
    }

    /// An external process could not be started
    pub fn process(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProcessError, message)
    }

    /// An external tool exited unsuccessfully
    pub fn command_failed(cmd: &str, exit_code: i32, output: &str) -> Self {
        let mut message = format!("{} exited with code {}", cmd, exit_code);
        let output = output.trim();
        if !output.is_empty() {
            message.push_str(": ");
            message.push_str(output);
        }
        Self::new(ErrorCode::CommandFailed, message)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for the CLI
pub mod exit_codes {
    /// Usage errors, missing sources and unrecovered failures
    pub const FAILURE: i32 = 1;
}
