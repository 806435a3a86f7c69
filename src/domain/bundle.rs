//! Compiled bundle inputs

use std::path::Path;

use crate::common::fs::read_lossy;
use crate::error::Result;

/// A compiled page script or stylesheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledBundle {
    /// Where the bundle came from, as a forward-slash path
    /// (project-relative for stylesheets, as found on disk for scripts)
    pub path: String,

    /// Raw text, lossily decoded
    pub content: String,
}

impl CompiledBundle {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Read a bundle from disk
    pub fn read(path: &Path) -> Result<Self> {
        Ok(Self {
            path: crate::common::fs::to_forward_slashes(path),
            content: read_lossy(path)?,
        })
    }

    /// Whether the bundle path ends with `suffix`
    pub fn is(&self, suffix: &str) -> bool {
        self.path.ends_with(suffix)
    }
}
