//! CSS module class-name de-hashing
//!
//! Compiled CSS modules rename `.container` in `Layout.module.css` to
//! `.Layout_container__m5jTj`. Stripping the module prefix and the hash
//! restores the authored selector. Compound selectors need no special
//! handling: the hash stops at the next `.`.

use regex::Regex;

/// Pattern for one hashed class of the module named `module_prefix`
fn class_pattern(module_prefix: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"\.{}_(?P<local>[A-Za-z0-9_-]+?)__[A-Za-z0-9_-]+",
        regex::escape(module_prefix)
    ))
}

/// Rewrite every `.<prefix>_<local>__<hash>` in `body` to `.<local>`
pub fn dehash(body: &str, module_prefix: &str) -> String {
    match class_pattern(module_prefix) {
        Ok(pattern) => pattern.replace_all(body, ".${local}").into_owned(),
        Err(e) => {
            tracing::warn!("cannot de-hash classes of {module_prefix}: {e}");
            body.to_string()
        }
    }
}
