//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

use crate::error::{self, Result};

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| error::fs::write_error(parent, &e))?;
    }
    Ok(())
}

/// Write `content` to `path` unless the file already exists.
///
/// With `force` the file is replaced. Missing ancestor directories are
/// created. Returns whether a write happened.
pub fn safe_write(path: &Path, content: &str, force: bool) -> Result<bool> {
    if path.exists() && !force {
        tracing::debug!("{} exists, leaving it untouched", path.display());
        return Ok(false);
    }

    ensure_parent_dir(path)?;
    fs::write(path, content).map_err(|e| error::fs::write_error(path, &e))?;
    tracing::info!("wrote {}", path.display());
    Ok(true)
}

/// Read a file as text, replacing invalid UTF-8 sequences
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| error::fs::read_error(path, &e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Convert a path to its forward-slash string form
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
