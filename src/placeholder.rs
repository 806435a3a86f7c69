//! Placeholder files
//!
//! Only routes visited during the original dev session were compiled, and
//! some stylesheet modules imported by recovered sources never reached a
//! compiled bundle. Stand-ins keep the recovered project building.

use std::path::Path;

use crate::config::{NavLink, PlaceholderPage, RecoveryConfig};
use crate::domain::{RecoveredFile, SourceKind};
use crate::error::Result;

const PLACEHOLDER_STYLE: &str = "/* recovered placeholder */\n";

/// JSON string literal, which is also a valid JS string literal
fn js_string(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

/// Render a client page showing `page` inside the project layout
pub fn render_page(page: &PlaceholderPage, links: &[NavLink]) -> String {
    let mut out = String::from(
        "'use client';\n\n\
         import Link from 'next/link';\n\
         import Layout from '@/components/Layout';\n\n\
         export default function Page() {\n  return (\n    <Layout>\n      <div className=\"card\">\n",
    );
    out.push_str(&format!(
        "        <h1 style={{{{ marginBottom: 12 }}}}>{{{}}}</h1>\n",
        js_string(&page.title)
    ));
    out.push_str(&format!(
        "        <p style={{{{ marginBottom: 16 }}}}>{{{}}}</p>\n",
        js_string(&page.body)
    ));
    out.push_str("        <div style={{ display: 'flex', gap: 12, flexWrap: 'wrap' }}>\n");
    for link in links {
        out.push_str(&format!(
            "          <Link className={} href={}>{{{}}}</Link>\n",
            js_string(&link.class),
            js_string(&link.href),
            js_string(&link.label)
        ));
    }
    out.push_str("        </div>\n      </div>\n    </Layout>\n  );\n}\n");
    out
}

/// Create missing placeholder stylesheets and pages.
///
/// Existing files are never overwritten, regardless of `--force`.
/// Returns how many files were created.
pub fn write_placeholders(root: &Path, config: &RecoveryConfig) -> Result<usize> {
    let mut created = 0;

    for path in &config.placeholder_styles {
        if let Some(file) = RecoveredFile::new(path, PLACEHOLDER_STYLE, SourceKind::Placeholder) {
            created += usize::from(file.write(root, false)?);
        }
    }

    for page in &config.placeholder_pages {
        let content = render_page(page, &config.nav_links);
        if let Some(file) = RecoveredFile::new(&page.path, content, SourceKind::Placeholder) {
            created += usize::from(file.write(root, false)?);
        }
    }

    Ok(created)
}
