//! Compiled bundle discovery
//!
//! This module handles:
//! - Finding compiled page scripts under the server output tree
//! - Collecting compiled stylesheets under the static CSS tree
//!
//! Matching uses wax globs against forward-slash paths relative to the
//! directory being walked, so patterns behave the same on every platform.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::common::fs::to_forward_slashes;
use crate::config::RecoveryConfig;
use crate::domain::CompiledBundle;
use crate::error::Result;

/// Glob matcher that degrades to exact comparison for invalid patterns
struct PathMatcher {
    glob: Option<Glob<'static>>,
    pattern: String,
}

impl PathMatcher {
    fn new(pattern: &str) -> Self {
        let glob = match Glob::new(pattern) {
            Ok(glob) => Some(glob.into_owned()),
            Err(e) => {
                tracing::warn!("invalid glob '{pattern}' ({e}), matching literally");
                None
            }
        };
        Self {
            glob,
            pattern: pattern.to_string(),
        }
    }

    fn matches(&self, relative: &str) -> bool {
        match &self.glob {
            Some(glob) => glob.matched(&CandidatePath::from(relative)).is_some(),
            None => self.pattern == relative,
        }
    }
}

/// Walk `base` lazily, yielding files whose base-relative path matches `pattern`.
///
/// A missing `base` yields nothing.
fn matching_files(base: PathBuf, pattern: &str) -> impl Iterator<Item = PathBuf> {
    let matcher = PathMatcher::new(pattern);

    WalkDir::new(base.clone())
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(move |entry| {
            let relative = entry.path().strip_prefix(&base).unwrap_or(entry.path());
            matcher.matches(&to_forward_slashes(relative))
        })
        .map(walkdir::DirEntry::into_path)
}

/// Compiled page scripts beneath the server app directory
pub fn page_bundles(root: &Path, config: &RecoveryConfig) -> impl Iterator<Item = PathBuf> {
    matching_files(root.join(&config.server_app_dir), &config.page_bundle_glob)
}

/// Compiled stylesheets beneath the static CSS directory.
///
/// Returns `None` when the directory does not exist, which is the cue to
/// fall back to committed history. Bundle paths are project-relative.
pub fn stylesheet_bundles(
    root: &Path,
    config: &RecoveryConfig,
) -> Result<Option<Vec<CompiledBundle>>> {
    let base = root.join(&config.static_css_dir);
    if !base.is_dir() {
        return Ok(None);
    }

    let mut bundles = Vec::new();
    for path in matching_files(base, &config.css_bundle_glob) {
        let relative = path.strip_prefix(root).unwrap_or(&path);
        let content = crate::common::fs::read_lossy(&path)?;
        bundles.push(CompiledBundle::new(to_forward_slashes(relative), content));
    }

    tracing::debug!("found {} stylesheet bundle(s) on disk", bundles.len());
    Ok(Some(bundles))
}
