//! Inline source map payloads
//!
//! Webpack's `eval-source-map` devtool appends each module's map to its
//! eval string as a base64 `data:` URL. Only `sources` and `sourcesContent`
//! matter here; the mappings themselves are never decoded.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Deserialize;

/// Prefix of an inline source map data URL
pub const SOURCEMAP_PREFIX: &str = "sourceMappingURL=data:application/json;charset=utf-8;base64,";

/// Standard alphabet, padding optional
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A decoded source map, reduced to what recovery needs
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedSourceMap {
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub sources: Vec<Option<String>>,
    /// Index-aligned with `sources`
    #[serde(default)]
    pub sources_content: Vec<Option<String>>,
}

impl EmbeddedSourceMap {
    /// Decode a base64 payload into a map, `None` if it is not one
    pub fn decode(payload: &str) -> Option<Self> {
        let raw = match LENIENT_BASE64.decode(payload.trim()) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!("inline source map is not valid base64: {e}");
                return None;
            }
        };

        match serde_json::from_slice::<Self>(&raw) {
            Ok(map) => {
                tracing::trace!(
                    "decoded v{} source map for {:?}",
                    map.version.unwrap_or_default(),
                    map.file
                );
                Some(map)
            }
            Err(e) => {
                tracing::debug!("inline source map is not valid JSON: {e}");
                None
            }
        }
    }

    /// First source identifier and its full text, when both lists are populated
    pub fn primary_source(&self) -> Option<(Option<&str>, &str)> {
        if self.sources.is_empty() || self.sources_content.is_empty() {
            return None;
        }
        let source = self.sources[0].as_deref();
        let content = self.sources_content[0].as_deref().unwrap_or("");
        Some((source, content))
    }
}

/// Find the inline map closest before `end` and decode it.
///
/// The payload runs from the data URL prefix to the first literal `\n`
/// escape (two characters) inside the eval string.
pub fn nearest_before(text: &str, end: usize) -> Option<EmbeddedSourceMap> {
    let start = text[..end].rfind(SOURCEMAP_PREFIX)? + SOURCEMAP_PREFIX.len();
    let chunk = &text[start..end];
    let payload = chunk.split("\\n").next().unwrap_or(chunk);
    EmbeddedSourceMap::decode(payload)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};

    const MAP_JSON: &str = r#"{"version":3,"file":"x.js","sources":["webpack://dash/./lib/api.ts?5a1b"],"sourcesContent":["export const api = 1;\n"],"mappings":"AAAA"}"#;

    #[test]
    fn test_decode_padded_and_unpadded() {
        let padded = STANDARD.encode(MAP_JSON);
        let unpadded = STANDARD_NO_PAD.encode(MAP_JSON);

        for payload in [padded, unpadded] {
            let map = EmbeddedSourceMap::decode(&payload).unwrap();
            assert_eq!(map.version, Some(3));
            assert_eq!(
                map.primary_source(),
                Some((Some("webpack://dash/./lib/api.ts?5a1b"), "export const api = 1;\n"))
            );
        }
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(EmbeddedSourceMap::decode("%%% not base64 %%%").is_none());
        assert!(EmbeddedSourceMap::decode(&STANDARD.encode("not json")).is_none());
    }

    #[test]
    fn test_primary_source_requires_both_lists() {
        let map = EmbeddedSourceMap::decode(&STANDARD.encode(r#"{"sources":["a.ts"]}"#)).unwrap();
        assert!(map.primary_source().is_none());

        let map = EmbeddedSourceMap::decode(
            &STANDARD.encode(r#"{"sources":["a.ts"],"sourcesContent":[null]}"#),
        )
        .unwrap();
        assert_eq!(map.primary_source(), Some((Some("a.ts"), "")));
    }

    #[test]
    fn test_nearest_before_picks_closest_payload() {
        let far = STANDARD.encode(r#"{"sources":["far"],"sourcesContent":["far"]}"#);
        let near = STANDARD.encode(r#"{"sources":["near"],"sourcesContent":["near"]}"#);
        let text = format!(
            "eval(\"//# {SOURCEMAP_PREFIX}{far}\\n\");eval(\"//# {SOURCEMAP_PREFIX}{near}\\n//# MARK\");"
        );
        let end = text.find("MARK").unwrap();

        let map = nearest_before(&text, end).unwrap();
        assert_eq!(map.primary_source(), Some((Some("near"), "near")));
    }

    #[test]
    fn test_nearest_before_without_prefix() {
        assert!(nearest_before("no maps in here", 10).is_none());
    }
}
