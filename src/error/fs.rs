//! File system errors

use std::path::Path;

use super::SalvageError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> SalvageError {
    SalvageError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> SalvageError {
    SalvageError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Maps an I/O error from reading `path`
pub fn read_error(path: &Path, e: &std::io::Error) -> SalvageError {
    read_failed(path.display().to_string(), e.to_string())
}

/// Maps an I/O error from writing `path`
pub fn write_error(path: &Path, e: &std::io::Error) -> SalvageError {
    write_failed(path.display().to_string(), e.to_string())
}
