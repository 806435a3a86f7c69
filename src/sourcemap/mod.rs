//! Source recovery from compiled page bundles
//!
//! Development builds wrap every module in an `eval` string that ends with
//! an inline source map followed by a `sourceURL` comment:
//!
//! ```text
//! eval("...\n//# sourceMappingURL=data:application/json;charset=utf-8;base64,eyJ2...\n//# sourceURL=webpack-internal:///(ssr)/./components/Layout.tsx\n");
//! ```
//!
//! Each `sourceURL` marker names a module. The map just before it carries
//! that module's original path and full text in `sources[0]` and
//! `sourcesContent[0]`. The association is positional: the nearest
//! preceding map is taken, so two markers can resolve to the same map.

pub mod path;
pub mod payload;

use std::path::Path;

use crate::config::RecoveryConfig;
use crate::domain::{CompiledBundle, RecoveredFile, RecoveryStats, SourceKind};
use crate::error::Result;

use self::path::BestKnownPath;

/// Start of every module identifier comment
pub const SOURCE_URL_MARKER: &str = "//# sourceURL=webpack-internal:///";

/// Compilation layers whose modules are project sources (server and React server)
const SERVER_LAYERS: &[&str] = &[
    "webpack-internal:///(ssr)/./",
    "webpack-internal:///(rsc)/./",
];

/// Newline as it appears inside an eval string: a backslash and an `n`
const ESCAPED_NEWLINE: &str = "\\n";

/// Find every recoverable source in a compiled page bundle
pub fn recover_sources(text: &str, config: &RecoveryConfig) -> Vec<RecoveredFile> {
    text.match_indices(SOURCE_URL_MARKER)
        .filter_map(|(start, _)| recover_one(text, start, config))
        .collect()
}

fn recover_one(text: &str, start: usize, config: &RecoveryConfig) -> Option<RecoveredFile> {
    let line_len = text[start..].find(ESCAPED_NEWLINE)?;
    let line = &text[start..start + line_len];

    if !SERVER_LAYERS.iter().any(|layer| line.contains(layer)) {
        return None;
    }

    let guessed = path::relative_from_marker(line)?;
    if !config.is_recoverable_source(guessed) {
        tracing::trace!("skipping module {guessed}");
        return None;
    }

    let Some(map) = payload::nearest_before(text, start) else {
        tracing::debug!("no usable source map for {guessed}");
        return None;
    };
    let (source, content) = map.primary_source()?;

    let best = BestKnownPath::new(guessed).with_source(source);
    let resolved = best.resolve();
    let file = RecoveredFile::new(resolved, content, SourceKind::Script);
    if file.is_none() {
        tracing::warn!("refusing to recover {resolved}: path leaves the project");
    }
    file
}

/// Recover sources from one page bundle into `root`
pub fn extract(
    bundle: &CompiledBundle,
    root: &Path,
    config: &RecoveryConfig,
    force: bool,
) -> Result<RecoveryStats> {
    let mut stats = RecoveryStats::default();

    for file in recover_sources(&bundle.content, config) {
        stats.record(file.write(root, force)?);
    }

    tracing::debug!(
        "{}: {} written, {} seen",
        bundle.path,
        stats.written,
        stats.seen
    );
    Ok(stats)
}
