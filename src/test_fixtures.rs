//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Builds synthetic `.next` output (webpack eval modules with inline source
//! maps, banner-delimited stylesheets) and throwaway git repositories.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, page_bundle, webpack_module};
//!
//! let temp = create_temp_dir();
//! let text = page_bundle(&[webpack_module(
//!     "(ssr)",
//!     "lib/api.ts",
//!     "webpack://dash/./lib/api.ts",
//!     "export {};",
//! )]);
//! ```

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tempfile::TempDir;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create a temp directory with a git repository initialized.
///
/// Returns the `TempDir` (which cleans up on drop) and the path to the repo.
///
/// # Panics
///
/// Panics if the temp directory or git repository cannot be created.
#[must_use]
pub fn create_git_repo() -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    let path = temp.path().to_path_buf();
    git2::Repository::init(&path).expect("Failed to init git repository");
    (temp, path)
}

/// Create test files under `base`.
///
/// Takes a list of (path, content) tuples; paths are relative to `base`.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(base: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = base.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// Stage every file in the work tree and commit it on `HEAD`.
///
/// # Panics
///
/// Panics if any git operation fails.
pub fn commit_all(repo_path: &Path, message: &str) {
    let repo = git2::Repository::open(repo_path).expect("Failed to open repository");
    let mut index = repo.index().expect("Failed to open index");
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .expect("Failed to stage files");
    index.write().expect("Failed to write index");
    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let signature =
        git2::Signature::now("Test", "test@example.com").expect("Failed to create signature");

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parents,
    )
    .expect("Failed to commit");
}

/// One module of a development page bundle, as webpack emits it.
///
/// `layer` is the compilation layer such as `(ssr)` or `(rsc)`, `rel` the
/// path in the `sourceURL` marker, `source` the map's `sources[0]`.
#[must_use]
pub fn webpack_module(layer: &str, rel: &str, source: &str, content: &str) -> String {
    let map = serde_json::json!({
        "version": 3,
        "file": "",
        "sources": [source],
        "sourcesContent": [content],
        "names": [],
        "mappings": "AAAA",
    });
    let payload = STANDARD.encode(map.to_string());

    format!(
        "/***/ \"{layer}/./{rel}\":\n\
         /***/ ((module, __webpack_exports__, __webpack_require__) => {{\n\n\
         \"use strict\";\n\
         eval(\"__webpack_require__.r(__webpack_exports__);\\n/* compiled */\\n\
         //# sourceMappingURL=data:application/json;charset=utf-8;base64,{payload}\\n\
         //# sourceURL=webpack-internal:///{layer}/./{rel}\\n\");\n\n\
         /***/ }}),\n\n"
    )
}

/// Wrap modules in a page bundle shell
#[must_use]
pub fn page_bundle(modules: &[String]) -> String {
    format!(
        "\"use strict\";\n(() => {{\nvar exports = {{}};\nexports.modules = {{\n\n{}}};\n}})();\n",
        modules.concat()
    )
}

/// A compiled stylesheet section with its module banner
#[must_use]
pub fn css_section(module_path: &str, body: &str) -> String {
    let stars = "*".repeat(module_path.len() + 10);
    format!(
        "/*!{stars}!*\\\n  !*** css ./node_modules/next/dist/build/webpack/loaders/css-loader/src/index.js??ruleSet[1].rules[3].oneOf[8].use[1]!./{module_path} ***!\n  \\{stars}*/\n{body}\n"
    )
}

/// A compiled layout stylesheet: global banner followed by the rules
#[must_use]
pub fn layout_css(body: &str) -> String {
    format!(
        "/*!*****************************!*\\\n  !*** css ./app/globals.css ***!\n  \\*****************************/\n{body}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_git_repo() {
        let (temp, path) = create_git_repo();
        assert!(path.join(".git").exists());
        assert!(temp.path().exists());
    }

    #[test]
    fn test_commit_all_moves_head() {
        let (_temp, path) = create_git_repo();
        create_test_files(&path, &[("a.txt", "one")]);
        commit_all(&path, "first");
        create_test_files(&path, &[("a.txt", "two")]);
        commit_all(&path, "second");

        let repo = git2::Repository::open(&path).expect("open");
        let head = repo.head().expect("head").peel_to_commit().expect("commit");
        assert_eq!(head.message(), Some("second"));
        assert_eq!(head.parent_count(), 1);
    }

    #[test]
    fn test_webpack_module_shape() {
        let module = webpack_module("(ssr)", "lib/api.ts", "webpack://d/./lib/api.ts", "x");
        assert!(module.contains("//# sourceURL=webpack-internal:///(ssr)/./lib/api.ts\\n"));
        assert!(module.contains("base64,"));
    }
}
