//! Recover command implementation
//!
//! Runs the recovery passes in order: sources from page bundles, then
//! stylesheets, then placeholders for whatever is still missing.

use std::path::{Path, PathBuf};

use console::Style;

use crate::config::RecoveryConfig;
use crate::domain::{CompiledBundle, RecoveryStats};
use crate::error::{Result, SalvageError};
use crate::{css, placeholder, scanner, sourcemap};

/// Outcome of one recovery run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecoverReport {
    /// Page bundles found under the server output
    pub page_bundles: usize,
    /// Sources recovered from inline source maps
    pub scripts: RecoveryStats,
    /// Global stylesheet and CSS modules
    pub styles: RecoveryStats,
    /// Placeholder files created (not part of the totals)
    pub placeholders: usize,
}

impl RecoverReport {
    pub fn total(&self) -> RecoveryStats {
        self.scripts + self.styles
    }
}

/// Resolve the project root, defaulting to the current directory
fn resolve_root(dashboard_dir: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match dashboard_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    // A directory that does not exist is reported as missing build output below.
    Ok(dunce::canonicalize(&dir).unwrap_or(dir))
}

/// Recover everything recoverable under `root`
pub fn recover(root: &Path, config: &RecoveryConfig, force: bool) -> Result<RecoverReport> {
    let build_dir = root.join(&config.build_dir);
    if !build_dir.exists() {
        return Err(SalvageError::BuildOutputMissing {
            path: build_dir.display().to_string(),
        });
    }

    let mut report = RecoverReport::default();

    for path in scanner::page_bundles(root, config) {
        report.page_bundles += 1;
        let bundle = CompiledBundle::read(&path)?;
        report.scripts += sourcemap::extract(&bundle, root, config, force)?;
    }

    report.styles = css::recover_css(root, config, force)?;
    report.placeholders = placeholder::write_placeholders(root, config)?;

    Ok(report)
}

fn print_report(report: &RecoverReport, config: &RecoveryConfig) {
    if report.page_bundles == 0 {
        println!(
            "{} No {}/{} found; skipping TS/TSX recovery.",
            Style::new().bold().yellow().apply_to("WARN:"),
            config.server_app_dir,
            config.page_bundle_glob
        );
    }

    let total = report.total();
    println!(
        "Recovered files written: {} (seen candidates: {})",
        Style::new().bold().green().apply_to(total.written),
        total.seen
    );
    println!("{}", Style::new().bold().apply_to("Next steps:"));
    println!("  1) Ensure package.json exists (recreate it if it was lost too).");
    println!("  2) npm install && npm run dev");
}

/// Run recover command
pub fn run(dashboard_dir: Option<PathBuf>, config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let root = resolve_root(dashboard_dir)?;
    let config = RecoveryConfig::load(&root, config_path.as_deref())?;

    tracing::debug!("recovering into {}", root.display());
    let report = recover(&root, &config, force)?;
    tracing::debug!(
        "scripts {:?}, styles {:?}, placeholders {}",
        report.scripts,
        report.styles,
        report.placeholders
    );

    print_report(&report, &config);
    Ok(())
}
