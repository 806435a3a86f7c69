//! Error types and handling for next-salvage
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only conditions that stop the run are errors. Candidates that fail to
//! decode or match their expected shape are skipped where they are found
//! and never surface here.
//!
//! Sub-modules hold convenience constructors by error domain:
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`git`]: Git operation errors

pub mod config;
pub mod fs;
pub mod git;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for next-salvage operations
#[derive(Error, Diagnostic, Debug)]
pub enum SalvageError {
    #[error("{path} not found. Nothing to recover.")]
    #[diagnostic(
        code(next_salvage::build_output_missing),
        help("Point --dashboard-dir at a project that still has its .next build output")
    )]
    BuildOutputMissing { path: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(next_salvage::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(next_salvage::config::parse_failed),
        help("The configuration file must be YAML with the fields of RecoveryConfig")
    )]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(next_salvage::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(next_salvage::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(next_salvage::fs::io_error))]
    IoError { message: String },

    // Git errors
    #[error("Git operation failed: {message}")]
    #[diagnostic(code(next_salvage::git::operation_failed))]
    GitOperationFailed { message: String },
}

impl SalvageError {
    /// Process exit code for this error.
    ///
    /// A missing build output is a precondition failure (2), everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            SalvageError::BuildOutputMissing { .. } => 2,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for SalvageError {
    fn from(err: std::io::Error) -> Self {
        SalvageError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SalvageError {
    fn from(err: serde_yaml::Error) -> Self {
        SalvageError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<git2::Error> for SalvageError {
    fn from(err: git2::Error) -> Self {
        SalvageError::GitOperationFailed {
            message: err.message().to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SalvageError>;
