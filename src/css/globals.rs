//! Global stylesheet recovery
//!
//! The compiled layout stylesheet is the project's global stylesheet behind
//! a single loader banner. Some recovered modules still reference variable
//! names that the global stylesheet no longer defines, so a block of aliases
//! is appended once.

use std::path::Path;

use crate::common::fs::read_lossy;
use crate::config::RecoveryConfig;
use crate::domain::{CompiledBundle, RecoveredFile, RecoveryStats, SourceKind};
use crate::error::{self, Result};

/// The layout bundle; the shallowest one when several nested layouts exist
fn layout_bundle<'a>(
    bundles: &'a [CompiledBundle],
    config: &RecoveryConfig,
) -> Option<&'a CompiledBundle> {
    bundles
        .iter()
        .filter(|b| b.is(&config.layout_bundle_suffix))
        .min_by_key(|b| b.path.matches('/').count())
}

/// Global stylesheet text: everything after the first banner, left-trimmed
pub fn strip_banner(text: &str) -> Option<&str> {
    let (_, rest) = text.split_once("*/")?;
    Some(rest.trim_start())
}

/// Append the alias block to `path` unless one of its names is already there.
///
/// Returns whether the block was appended. Independent of `--force`.
pub fn append_aliases(path: &Path, config: &RecoveryConfig) -> Result<bool> {
    if config.css_aliases.is_empty() || !path.is_file() {
        return Ok(false);
    }

    let current = read_lossy(path)?;
    if config
        .css_aliases
        .iter()
        .any(|alias| current.contains(alias.name.as_str()))
    {
        tracing::debug!("{} already defines the aliases", path.display());
        return Ok(false);
    }

    let updated = format!("{}{}", current.trim_end(), config.alias_block());
    std::fs::write(path, updated).map_err(|e| error::fs::write_error(path, &e))?;
    tracing::info!("appended CSS aliases to {}", path.display());
    Ok(true)
}

/// Recover the global stylesheet from the layout bundle among `bundles`
pub fn recover_globals(
    bundles: &[CompiledBundle],
    root: &Path,
    config: &RecoveryConfig,
    force: bool,
) -> Result<RecoveryStats> {
    let mut stats = RecoveryStats::default();

    let Some(layout) = layout_bundle(bundles, config) else {
        tracing::debug!("no {} bundle", config.layout_bundle_suffix);
        return Ok(stats);
    };
    let Some(globals) = strip_banner(&layout.content) else {
        tracing::debug!("{} has no banner, skipping", layout.path);
        return Ok(stats);
    };
    let Some(file) = RecoveredFile::new(&config.globals_output, globals, SourceKind::GlobalStylesheet)
    else {
        tracing::warn!("invalid globals_output path {}", config.globals_output);
        return Ok(stats);
    };

    stats.record(file.write(root, force)?);
    append_aliases(&root.join(&file.relative_path), config)?;

    Ok(stats)
}
