//! Recovered outputs and run statistics

use std::ops::{Add, AddAssign};
use std::path::Path;

use crate::common::fs::safe_write;
use crate::error::Result;

/// What a recovered file was reconstructed as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// TypeScript/JavaScript module taken from an inline source map
    Script,
    /// CSS module split out of a page stylesheet
    StylesheetModule,
    /// The shared stylesheet taken from the layout bundle
    GlobalStylesheet,
    /// Synthesized stand-in for a file that could not be recovered
    Placeholder,
}

/// A file ready to be written into the project tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveredFile {
    /// Project-relative forward-slash path
    pub relative_path: String,
    pub content: String,
    pub kind: SourceKind,
}

impl RecoveredFile {
    /// Build a recovered file, or `None` when `path` would land outside the project
    pub fn new(path: &str, content: impl Into<String>, kind: SourceKind) -> Option<Self> {
        let relative_path = normalize_relative(path)?;
        Some(Self {
            relative_path,
            content: content.into(),
            kind,
        })
    }

    /// Write under `root` through the safe writer
    pub fn write(&self, root: &Path, force: bool) -> Result<bool> {
        tracing::trace!("{:?} {}", self.kind, self.relative_path);
        safe_write(&root.join(&self.relative_path), &self.content, force)
    }
}

/// Normalize a project-relative path to forward-slash form.
///
/// Rejects empty, absolute and parent-escaping paths.
pub fn normalize_relative(path: &str) -> Option<String> {
    let path = path.replace('\\', "/");
    if path.starts_with('/') || path.chars().nth(1) == Some(':') {
        return None;
    }

    let mut parts = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => return None,
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

/// A per-module slice of a compiled page stylesheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetSection {
    /// Module path declared in the section banner, e.g. `components/Layout.module.css`
    pub module_path: String,
    /// Section body after the banner, as compiled
    pub body: String,
}

/// Files written versus candidates seen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecoveryStats {
    pub written: usize,
    pub seen: usize,
}

impl RecoveryStats {
    pub fn new(written: usize, seen: usize) -> Self {
        Self { written, seen }
    }

    /// Count one candidate, and one write if it happened
    pub fn record(&mut self, was_written: bool) {
        self.seen += 1;
        if was_written {
            self.written += 1;
        }
    }
}

impl Add for RecoveryStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.written + rhs.written, self.seen + rhs.seen)
    }
}

impl AddAssign for RecoveryStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
