//! Module path resolution
//!
//! A module's original path is known twice: guessed from its
//! `webpack-internal` URL, and declared by its own source map. The declared
//! one wins whenever it can be read.

/// Separator between the webpack context prefix and the project-relative path
const CONTEXT_SEPARATOR: &str = "/./";

/// Project-relative part of a webpack module identifier.
///
/// `webpack://dash/./components/Layout.tsx?3c8f` gives `components/Layout.tsx`.
/// Query suffixes are dropped. `None` without a `/./` separator or a path.
pub fn relative_from_source(source: &str) -> Option<&str> {
    let (_, rel) = source.split_once(CONTEXT_SEPARATOR)?;
    let path = rel.split_once('?').map_or(rel, |(path, _)| path);
    if path.is_empty() { None } else { Some(path) }
}

/// Project-relative part of a `sourceURL=` marker line, as written
pub fn relative_from_marker(line: &str) -> Option<&str> {
    let (_, url) = line.split_once("sourceURL=")?;
    let (_, rel) = url.split_once(CONTEXT_SEPARATOR)?;
    if rel.is_empty() { None } else { Some(rel) }
}

/// The two candidate paths of one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestKnownPath<'a> {
    pub guessed: &'a str,
    pub declared: Option<&'a str>,
}

impl<'a> BestKnownPath<'a> {
    pub fn new(guessed: &'a str) -> Self {
        Self {
            guessed,
            declared: None,
        }
    }

    /// Record the source map's first source identifier
    pub fn with_source(mut self, source: Option<&'a str>) -> Self {
        self.declared = source.and_then(relative_from_source);
        self
    }

    pub fn resolve(&self) -> &'a str {
        self.declared.unwrap_or(self.guessed)
    }
}
