//! Process execution utilities
//!
//! Platform tools (such as `iconutil` on macOS) are run through these helpers:
//! - Output capture
//! - Command lookup on PATH
//! - Failure mapping into coded errors

use crate::error::{Error, Result};
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Result of a command execution
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,
    /// Exit code of the command
    pub exit_code: i32,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
}

impl CommandResult {
    /// Create from std::process::Output
    pub fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Get combined output (stdout + stderr)
    pub fn combined_output(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else if self.stdout.is_empty() {
            self.stderr.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }

    /// Turn a non-zero exit into a `CommandFailed` error
    pub fn into_checked(self, program: &str) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(Error::command_failed(program, self.exit_code, &self.combined_output()))
        }
    }
}

/// Run a command and capture output
pub fn run_command(program: &str, args: &[&str]) -> Result<CommandResult> {
    tracing::debug!(program, ?args, "Running command");

    let output = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| Error::process(format!("Failed to execute {}: {}", program, e)).with_source(e))?;

    Ok(CommandResult::from_output(output))
}

/// Run a command and fail unless it exits successfully
pub fn run_command_checked(program: &str, args: &[&str]) -> Result<CommandResult> {
    run_command(program, args)?
        .into_checked(program)
        .map_err(|e| e.with_context(format!("Running: {} {}", program, args.join(" "))))
}

/// Get the path to a command, if it is on PATH
pub fn command_path(program: &str) -> Option<PathBuf> {
    which::which(program).ok()
}
