//! Committed snapshot retrieval
//!
//! When the local build output has been replaced (a fresh `next dev` wipes
//! the compiled stylesheets), the versions committed to the enclosing
//! repository are the only copy left. This module reads them from the
//! `HEAD` commit through libgit2; nothing is checked out or modified.

use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository};

use crate::common::fs::to_forward_slashes;
use crate::error::{self, Result};

/// Read access to the `HEAD` tree of the repository enclosing a project
pub struct HeadSnapshot {
    repo: Repository,
    /// Project root relative to the repository work tree
    prefix: PathBuf,
}

impl HeadSnapshot {
    /// Open the nearest repository enclosing `project_root`
    pub fn discover(project_root: &Path) -> Result<Self> {
        let repo = Repository::discover(project_root)?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| error::git::operation_failed("repository has no work tree"))?;

        let workdir = dunce::canonicalize(workdir)?;
        let project = dunce::canonicalize(project_root)?;
        let prefix = project
            .strip_prefix(&workdir)
            .map_err(|_| {
                error::git::operation_failed(format!(
                    "{} is outside {}",
                    project.display(),
                    workdir.display()
                ))
            })?
            .to_path_buf();

        Ok(Self { repo, prefix })
    }

    /// Repository path of a project-relative path
    fn repo_path(&self, relative: &str) -> String {
        let joined = to_forward_slashes(&self.prefix.join(relative));
        joined.trim_start_matches('/').to_string()
    }

    /// Content of a project-relative file as of the last commit
    pub fn read(&self, relative: &str) -> Result<String> {
        let repo_path = self.repo_path(relative);
        let tree = self.repo.head()?.peel_to_tree()?;
        let entry = tree.get_path(Path::new(&repo_path)).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                error::git::operation_failed(format!("{repo_path} is not in HEAD"))
            } else {
                e.into()
            }
        })?;
        let blob = entry.to_object(&self.repo)?.peel_to_blob()?;
        Ok(String::from_utf8_lossy(blob.content()).into_owned())
    }
}

/// Best-effort `git show HEAD:<path>` for each project-relative path.
///
/// Paths that cannot be read are left out; an unusable repository yields
/// nothing at all.
pub fn show_head_files(project_root: &Path, paths: &[String]) -> Vec<(String, String)> {
    let snapshot = match HeadSnapshot::discover(project_root) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::debug!("no committed snapshot available: {e}");
            return Vec::new();
        }
    };

    paths
        .iter()
        .filter_map(|path| match snapshot.read(path) {
            Ok(content) => Some((path.clone(), content)),
            Err(e) => {
                tracing::debug!("{path}: {e}");
                None
            }
        })
        .collect()
}
