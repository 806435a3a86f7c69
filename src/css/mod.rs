//! Stylesheet recovery
//!
//! This module handles:
//! - Choosing where compiled stylesheets come from (disk, or the last commit)
//! - Recovering the global stylesheet from the layout bundle
//! - Splitting page stylesheets back into de-hashed CSS modules

pub mod dehash;
pub mod globals;
pub mod split;

use std::path::Path;

use crate::config::RecoveryConfig;
use crate::domain::{CompiledBundle, RecoveryStats};
use crate::error::Result;
use crate::{git, scanner};

/// Compiled stylesheets for a project.
///
/// Live bundles win. Only when the static CSS directory is gone entirely are
/// the configured bundle paths read from the enclosing repository's `HEAD`.
pub fn collect_bundles(root: &Path, config: &RecoveryConfig) -> Result<Vec<CompiledBundle>> {
    if let Some(bundles) = scanner::stylesheet_bundles(root, config)? {
        return Ok(bundles);
    }

    tracing::info!(
        "{} missing, reading committed stylesheets instead",
        config.static_css_dir
    );
    let bundles: Vec<CompiledBundle> = git::show_head_files(root, &config.fallback_css_bundles)
        .into_iter()
        .filter(|(_, content)| !content.is_empty())
        .map(|(path, content)| CompiledBundle::new(path, content))
        .collect();

    tracing::debug!("recovered {} stylesheet bundle(s) from git", bundles.len());
    Ok(bundles)
}

/// Recover the global stylesheet and every CSS module into `root`
pub fn recover_css(root: &Path, config: &RecoveryConfig, force: bool) -> Result<RecoveryStats> {
    let bundles = collect_bundles(root, config)?;
    if bundles.is_empty() {
        return Ok(RecoveryStats::default());
    }

    let globals = globals::recover_globals(&bundles, root, config, force)?;
    let modules = split::recover_page_modules(&bundles, root, config, force)?;
    Ok(globals + modules)
}
