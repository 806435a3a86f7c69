//! Recovery configuration
//!
//! Every fixed location, allow-list and piece of project-specific data the
//! recovery passes rely on lives in [`RecoveryConfig`]. The defaults describe
//! a stock Next.js `app/` router build. A project can override any field with
//! a YAML file (`.next-salvage.yaml` in the project root, or `--config`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

/// Name of the optional per-project configuration file
pub const CONFIG_FILE_NAME: &str = ".next-salvage.yaml";

/// Legacy custom property mapped onto a currently defined one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssAlias {
    /// Legacy variable name, including the leading `--`
    pub name: String,
    /// Value expression, e.g. `var(--primary)`
    pub value: String,
}

/// A route page synthesized when it could not be recovered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderPage {
    /// Project-relative output path
    pub path: String,
    pub title: String,
    pub body: String,
}

/// A navigation link rendered on every placeholder page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// CSS class applied to the link
    pub class: String,
}

/// Recovery configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryConfig {
    /// Build output root; its absence aborts the run
    pub build_dir: String,
    /// Directory holding compiled server page bundles
    pub server_app_dir: String,
    /// Directory holding compiled app stylesheets
    pub static_css_dir: String,
    /// Glob (relative to `server_app_dir`) selecting page bundles
    pub page_bundle_glob: String,
    /// Glob (relative to `static_css_dir`) selecting stylesheet bundles
    pub css_bundle_glob: String,

    /// Top-level source directories worth recovering, with trailing slash
    pub source_dirs: Vec<String>,
    /// Individual root-level files worth recovering
    pub source_files: Vec<String>,
    /// Extensions a recovered source may have
    pub source_extensions: Vec<String>,
    /// Extensions never taken from script bundles
    pub skipped_extensions: Vec<String>,

    /// Stylesheet bundles to read from the last commit when `static_css_dir` is gone
    pub fallback_css_bundles: Vec<String>,
    /// Bundle path suffix of the layout stylesheet
    pub layout_bundle_suffix: String,
    /// Bundle path suffix of per-page stylesheets
    pub page_css_suffix: String,
    /// Output path of the global stylesheet
    pub globals_output: String,
    /// Alias block appended once to the global stylesheet
    pub css_aliases: Vec<CssAlias>,

    /// Stylesheet modules created empty when absent
    pub placeholder_styles: Vec<String>,
    /// Route pages created when absent
    pub placeholder_pages: Vec<PlaceholderPage>,
    /// Links rendered on placeholder pages
    pub nav_links: Vec<NavLink>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn alias(name: &str, value: &str) -> CssAlias {
    CssAlias {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn page(path: &str, title: &str, body: &str) -> PlaceholderPage {
    PlaceholderPage {
        path: path.to_string(),
        title: title.to_string(),
        body: body.to_string(),
    }
}

fn link(label: &str, href: &str, class: &str) -> NavLink {
    NavLink {
        label: label.to_string(),
        href: href.to_string(),
        class: class.to_string(),
    }
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        const NOT_RECOVERED: &str =
            "This page wasn't recovered from the .next artifacts. Rebuild it if needed.";

        Self {
            build_dir: ".next".to_string(),
            server_app_dir: ".next/server/app".to_string(),
            static_css_dir: ".next/static/css/app".to_string(),
            page_bundle_glob: "**/page.js".to_string(),
            css_bundle_glob: "**/*.css".to_string(),

            source_dirs: strings(&["app/", "components/", "lib/"]),
            source_files: strings(&["next-env.d.ts"]),
            source_extensions: strings(&[".ts", ".tsx", ".js", ".jsx", ".d.ts", ".json"]),
            skipped_extensions: strings(&[".css"]),

            fallback_css_bundles: strings(&[
                ".next/static/css/app/layout.css",
                ".next/static/css/app/items/page.css",
                ".next/static/css/app/qafalas/page.css",
                ".next/static/css/app/recipes/page.css",
            ]),
            layout_bundle_suffix: "layout.css".to_string(),
            page_css_suffix: "page.css".to_string(),
            globals_output: "app/globals.css".to_string(),
            css_aliases: vec![
                alias("--color-primary", "var(--primary)"),
                alias("--color-primary-light", "var(--primary-light)"),
                alias("--color-background", "var(--background)"),
                alias("--color-card-background-light", "var(--surface-light)"),
                alias("--color-white", "var(--card-background)"),
                alias("--color-light-grey", "var(--border-light)"),
                alias("--color-text-primary-light", "var(--text-primary)"),
                alias("--color-text-secondary-light", "var(--text-secondary)"),
            ],

            placeholder_styles: strings(&["components/Modal.module.css"]),
            placeholder_pages: vec![
                page(
                    "app/page.tsx",
                    "Dashboard",
                    "Recovered dashboard home. Use the sidebar to navigate.",
                ),
                page("app/levels/page.tsx", "Levels", NOT_RECOVERED),
                page("app/leaderboard/page.tsx", "Leaderboard", NOT_RECOVERED),
            ],
            nav_links: vec![
                link("Items", "/items", "btn-primary"),
                link("Recipes", "/recipes", "btn-secondary"),
                link("Qafalas", "/qafalas", "btn-secondary"),
            ],
        }
    }
}

impl RecoveryConfig {
    /// Parse a configuration from YAML; absent fields keep their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load the configuration for a project.
    ///
    /// An explicit path must exist. Without one, `<root>/.next-salvage.yaml`
    /// is used when present and the defaults otherwise.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    tracing::debug!("no {CONFIG_FILE_NAME} in {}, using defaults", root.display());
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;

        let config = Self::from_yaml(&content).map_err(|e| match e {
            error::SalvageError::ConfigParseFailed { reason, .. } => {
                error::config::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })?;

        tracing::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Whether a guessed module path is a project source worth recovering
    pub fn is_recoverable_source(&self, rel: &str) -> bool {
        let in_scope = self.source_dirs.iter().any(|dir| rel.starts_with(dir.as_str()))
            || self.source_files.iter().any(|file| rel == file);
        if !in_scope {
            return false;
        }

        if self.skipped_extensions.iter().any(|ext| rel.ends_with(ext.as_str())) {
            return false;
        }

        self.source_extensions.iter().any(|ext| rel.ends_with(ext.as_str()))
    }

    /// Render the alias block appended to the global stylesheet
    pub fn alias_block(&self) -> String {
        let mut block =
            String::from("\n\n/* Aliases for older CSS vars used in some modules */\n:root {\n");
        for alias in &self.css_aliases {
            block.push_str(&format!("  {}: {};\n", alias.name, alias.value));
        }
        block.push_str("}\n");
        block
    }
}
