use crate::catalog::{Catalog, EmojiRecord};
use crate::codepoint::{VARIATION_SELECTOR, VARIATION_SELECTOR_HTML};
use crate::error::{EmojiError, Result};
use crate::format::Format;
use crate::index::{IndexKind, ReverseIndices};
use std::str::FromStr;

/// Emoji transcoder - main interface for resolving and converting emoji
#[derive(Debug, Clone)]
pub struct EmojiTranscoder {
    catalog: Catalog,
    indices: ReverseIndices,
    /// Catalog positions sorted by descending character length, for the literal text pass
    pub(crate) literal_order: Vec<usize>,
}

impl EmojiTranscoder {
    /// Create a transcoder over the given catalog
    pub fn new(catalog: Catalog) -> Self {
        let indices = ReverseIndices::build(&catalog);
        let mut literal_order: Vec<usize> = (0..catalog.len()).collect();
        let records: Vec<&EmojiRecord> = catalog.iter().collect();
        literal_order.sort_by_key(|&i| std::cmp::Reverse(records[i].character.len()));
        log::debug!(
            "built emoji indices: {} names, {} html keys, {} escape keys",
            catalog.len(),
            indices.len(IndexKind::Html),
            indices.len(IndexKind::Escape)
        );
        Self {
            catalog,
            indices,
            literal_order,
        }
    }

    /// Create a transcoder over the embedded emoji table
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn indices(&self) -> &ReverseIndices {
        &self.indices
    }

    /// Resolve the canonical name denoted by `input`, in any representation.
    ///
    /// Lookups are exact after trimming surrounding whitespace and are tried
    /// in this order: canonical name, character, shortcode, HTML entity,
    /// HTML entity with a literal trailing variation selector, escape
    /// sequence, and finally the input wrapped in colons as a shortcode.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Some(record) = self.catalog.get(input) {
            return Some(record.name.as_str());
        }

        let found = self
            .indices
            .lookup(IndexKind::Character, input)
            .or_else(|| self.indices.lookup(IndexKind::Shortcode, input))
            .or_else(|| self.indices.lookup(IndexKind::Html, input))
            .or_else(|| self.resolve_hybrid_html(input))
            .or_else(|| self.indices.lookup(IndexKind::Escape, input))
            .or_else(|| {
                self.indices
                    .lookup(IndexKind::Shortcode, &format!(":{}:", input))
            });

        if found.is_none() {
            log::debug!("no emoji matches {:?}", input);
        }
        found
    }

    /// `&#x1f399;` followed by a literal selector, looked up as `&#x1f399;&#xfe0f;`
    fn resolve_hybrid_html(&self, input: &str) -> Option<&str> {
        if !input.contains("&#x") {
            return None;
        }
        let base = input.strip_suffix(VARIATION_SELECTOR)?;
        let normalized = format!("{}{}", base, VARIATION_SELECTOR_HTML);
        self.indices.lookup(IndexKind::Html, &normalized)
    }

    /// Convert `input` to the target representation
    pub fn transform(&self, input: &str, target: Format) -> Result<String> {
        Ok(self.get_info(input)?.get(target).to_string())
    }

    /// Convert `input` to a target representation given by name.
    ///
    /// The format name is validated before the input is resolved.
    pub fn transform_as(&self, input: &str, target: &str) -> Result<String> {
        let target = Format::from_str(target)?;
        self.transform(input, target)
    }

    /// Full record for the emoji denoted by `input`
    pub fn get_info(&self, input: &str) -> Result<&EmojiRecord> {
        self.resolve(input)
            .and_then(|name| self.catalog.get(name))
            .ok_or_else(|| EmojiError::NotFound(input.to_string()))
    }

    /// All canonical names. Callers must not rely on the order.
    pub fn list_supported(&self) -> Vec<&str> {
        self.catalog.names().collect()
    }

    /// True iff `input` resolves to a catalog entry
    pub fn is_supported(&self, input: &str) -> bool {
        self.resolve(input).is_some()
    }
}

impl Default for EmojiTranscoder {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcoder() -> EmojiTranscoder {
        EmojiTranscoder::builtin()
    }

    #[test]
    fn test_resolve_every_representation() {
        let t = transcoder();
        for input in [
            "smile",
            "\u{1f604}",
            ":smile:",
            "&#x1f604;",
            "\\U0001F604",
            "  smile\n",
        ] {
            assert_eq!(t.resolve(input), Some("smile"), "input {:?}", input);
        }
    }

    #[test]
    fn test_transform_name_to_formats() {
        let t = transcoder();
        assert_eq!(t.transform("smile", Format::Emoji).unwrap(), "\u{1f604}");
        assert_eq!(t.transform("smile", Format::Shortcode).unwrap(), ":smile:");
        assert_eq!(t.transform("smile", Format::Html).unwrap(), "&#x1f604;");
        assert_eq!(t.transform("smile", Format::Unicode).unwrap(), "\\U0001F604");
    }

    #[test]
    fn test_transform_between_formats() {
        let t = transcoder();
        assert_eq!(t.transform("\u{1f604}", Format::Shortcode).unwrap(), ":smile:");
        assert_eq!(t.transform("\u{1f60a}", Format::Shortcode).unwrap(), ":blush:");
        assert_eq!(t.transform("\u{1f308}", Format::Html).unwrap(), "&#x1f308;");
        assert_eq!(t.transform("\u{1f308}", Format::Unicode).unwrap(), "\\U0001F308");
        assert_eq!(t.transform(":sparkles:", Format::Emoji).unwrap(), "\u{2728}");
        assert_eq!(t.transform(":rainbow:", Format::Html).unwrap(), "&#x1f308;");
        assert_eq!(t.transform("&#x1f60a;", Format::Emoji).unwrap(), "\u{1f60a}");
        assert_eq!(t.transform("&#x2728;", Format::Shortcode).unwrap(), ":sparkles:");
        assert_eq!(t.transform("\\U0001F60A", Format::Emoji).unwrap(), "\u{1f60a}");
        assert_eq!(t.transform("\\U00002728", Format::Shortcode).unwrap(), ":sparkles:");
    }

    #[test]
    fn test_variation_selector_forms() {
        let t = transcoder();
        let expected = "\u{1f399}\u{fe0f}";
        for input in [
            "&#x1f399;&#xfe0f;",
            "&#x1f399;",
            "&#x1f399;\u{fe0f}",
            "\\U0001F399\\uFE0F",
            "\\U0001F399",
        ] {
            assert!(t.is_supported(input), "input {:?}", input);
            assert_eq!(t.transform(input, Format::Emoji).unwrap(), expected);
        }
        assert_eq!(t.transform("heart", Format::Emoji).unwrap(), "\u{2764}\u{fe0f}");
    }

    #[test]
    fn test_hybrid_normalization_without_index_key() {
        let t = transcoder();
        assert_eq!(t.resolve_hybrid_html("&#x2328;\u{fe0f}"), Some("keyboard"));
        assert_eq!(t.resolve_hybrid_html("\u{2328}\u{fe0f}"), None);
        assert_eq!(t.resolve_hybrid_html("&#x2328;"), None);
    }

    #[test]
    fn test_colonless_shortcode_fallback() {
        let catalog = Catalog::from_records(vec![EmojiRecord::new(
            "thumbs_up",
            "\u{1f44d}",
            ":+1:",
            "&#x1f44d;",
            "\\U0001F44D",
        )])
        .unwrap();
        let t = EmojiTranscoder::new(catalog);
        assert_eq!(t.resolve("+1"), Some("thumbs_up"));
        assert_eq!(t.resolve(":+1:"), Some("thumbs_up"));
        assert_eq!(t.transform("thumbs_up", Format::Shortcode).unwrap(), ":+1:");
    }

    #[test]
    fn test_name_takes_precedence_over_shortcode() {
        // "wink" is both a name and a shortcode of another record
        let catalog = Catalog::from_records(vec![
            EmojiRecord::new("wave", "\u{1f44b}", ":wink:", "&#x1f44b;", "\\U0001F44B"),
            EmojiRecord::new("wink", "\u{1f609}", ":winking:", "&#x1f609;", "\\U0001F609"),
        ])
        .unwrap();
        let t = EmojiTranscoder::new(catalog);
        assert_eq!(t.resolve("wink"), Some("wink"));
        assert_eq!(t.resolve(":wink:"), Some("wave"));
    }

    #[test]
    fn test_errors() {
        let t = transcoder();
        assert_eq!(
            t.transform("not-a-real-emoji", Format::Emoji),
            Err(EmojiError::NotFound("not-a-real-emoji".to_string()))
        );
        assert_eq!(t.transform("", Format::Emoji), Err(EmojiError::NotFound(String::new())));
        assert_eq!(
            t.transform_as("smile", "bogus"),
            Err(EmojiError::InvalidFormat("bogus".to_string()))
        );
        // format is checked before the input
        assert!(matches!(
            t.transform_as("not-a-real-emoji", "bogus"),
            Err(EmojiError::InvalidFormat(_))
        ));
        assert_eq!(t.transform_as("smile", "shortcode").unwrap(), ":smile:");
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let t = transcoder();
        assert!(!t.is_supported("SMILE"));
        assert!(!t.is_supported(":Smile:"));
    }

    #[test]
    fn test_get_info() {
        let t = transcoder();
        let info = t.get_info(":rocket:").unwrap();
        assert_eq!(info.name, "rocket");
        assert_eq!(info.character, "\u{1f680}");
        assert_eq!(info.html_entity, "&#x1f680;");
        assert!(t.get_info("invalid").unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_supported() {
        let t = transcoder();
        let names = t.list_supported();
        assert_eq!(names.len(), t.catalog().len());
        for expected in ["smile", "heart", "fire", "microphone", "rainbow"] {
            assert!(names.contains(&expected), "missing {}", expected);
        }
    }
}
