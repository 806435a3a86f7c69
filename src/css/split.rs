//! Page stylesheet splitting
//!
//! A compiled `page.css` concatenates every CSS module the page imports.
//! Each module starts with a `/*! ... */` banner naming its loader chain,
//! which ends in the module's project path (`!./components/Layout.module.css`).

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::dehash::dehash;
use crate::config::RecoveryConfig;
use crate::domain::{CompiledBundle, RecoveredFile, RecoveryStats, SourceKind, StylesheetSection};
use crate::error::Result;

const BANNER_START: &str = "/*!";
const BANNER_END: &str = "*/";
const MODULE_SUFFIX: &str = ".module.css";

#[allow(clippy::expect_used)]
static MODULE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\./([^!]+?\.module\.css)").expect("module path pattern is valid")
});

/// Split a compiled stylesheet into its module sections.
///
/// Sections whose banner never closes, or that declare no CSS module, are skipped.
pub fn sections(text: &str) -> Vec<StylesheetSection> {
    let mut starts: Vec<usize> = text.match_indices(BANNER_START).map(|(i, _)| i).collect();
    if starts.is_empty() {
        return Vec::new();
    }
    starts.push(text.len());

    starts
        .windows(2)
        .filter_map(|bounds| section(text, bounds[0], bounds[1]))
        .collect()
}

fn section(text: &str, start: usize, end: usize) -> Option<StylesheetSection> {
    let close = start + text[start..].find(BANNER_END)?;
    if close > end {
        tracing::debug!("unterminated banner at byte {start}");
        return None;
    }
    let banner_end = close + BANNER_END.len();

    let banner = &text[start..banner_end];
    let Some(captures) = MODULE_PATH.captures(banner) else {
        tracing::debug!("banner at byte {start} declares no CSS module");
        return None;
    };

    Some(StylesheetSection {
        module_path: captures[1].to_string(),
        body: text.get(banner_end..end).unwrap_or_default().to_string(),
    })
}

/// Class-name prefix of a module: its file name without `.module.css`
pub fn module_prefix(module_path: &str) -> &str {
    let name = Path::new(module_path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(module_path);
    name.strip_suffix(MODULE_SUFFIX).unwrap_or(name)
}

/// Rebuild the CSS modules of one page stylesheet
pub fn recover_modules(text: &str) -> Vec<RecoveredFile> {
    sections(text)
        .into_iter()
        .filter_map(|section| {
            let prefix = module_prefix(&section.module_path);
            let css = format!("{}\n", dehash(&section.body, prefix).trim());
            let file = RecoveredFile::new(&section.module_path, css, SourceKind::StylesheetModule);
            if file.is_none() {
                tracing::warn!(
                    "refusing to recover {}: path leaves the project",
                    section.module_path
                );
            }
            file
        })
        .collect()
}

/// Write the CSS modules of every page stylesheet in `bundles`
pub fn recover_page_modules(
    bundles: &[CompiledBundle],
    root: &Path,
    config: &RecoveryConfig,
    force: bool,
) -> Result<RecoveryStats> {
    let mut stats = RecoveryStats::default();

    for bundle in bundles.iter().filter(|b| b.is(&config.page_css_suffix)) {
        for file in recover_modules(&bundle.content) {
            stats.record(file.write(root, force)?);
        }
    }

    Ok(stats)
}
