//! Git operation errors

use super::SalvageError;

/// Creates a git operation failed error
pub fn operation_failed(message: impl Into<String>) -> SalvageError {
    SalvageError::GitOperationFailed {
        message: message.into(),
    }
}
