use crate::catalog::Catalog;
use crate::codepoint::{VARIATION_SELECTOR, VARIATION_SELECTOR_ESCAPE, VARIATION_SELECTOR_HTML};
use std::collections::HashMap;

/// Which reverse index a key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Character,
    Shortcode,
    Html,
    Escape,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexKind::Character => write!(f, "character"),
            IndexKind::Shortcode => write!(f, "shortcode"),
            IndexKind::Html => write!(f, "html"),
            IndexKind::Escape => write!(f, "escape"),
        }
    }
}

/// Format string to canonical name lookups derived from a [`Catalog`].
///
/// Construction registers keys in two phases over catalog order:
///
/// 1. the canonical key of every record in every index; on a collision the
///    first record keeps the key,
/// 2. the synthetic base and hybrid keys of variation-selector records, each
///    inserted only when the key is still vacant.
///
/// A synthetic key can therefore never shadow a canonical one, and between
/// two synthetic keys the earlier record wins.
#[derive(Debug, Clone, Default)]
pub struct ReverseIndices {
    character: HashMap<String, String>,
    shortcode: HashMap<String, String>,
    html: HashMap<String, String>,
    escape: HashMap<String, String>,
}

impl ReverseIndices {
    pub fn build(catalog: &Catalog) -> Self {
        let mut indices = Self::default();

        for record in catalog.iter() {
            indices.register_canonical(IndexKind::Character, &record.character, &record.name);
            indices.register_canonical(IndexKind::Shortcode, &record.shortcode, &record.name);
            indices.register_canonical(IndexKind::Html, &record.html_entity, &record.name);
            indices.register_canonical(IndexKind::Escape, &record.escape_sequence, &record.name);
        }

        for record in catalog.iter() {
            if let Some(base) = html_base_form(&record.html_entity) {
                let hybrid = format!("{}{}", base, VARIATION_SELECTOR);
                indices.register_synthetic(IndexKind::Html, base, &record.name);
                indices.register_synthetic(IndexKind::Html, &hybrid, &record.name);
            }
            if let Some(base) = escape_base_form(&record.escape_sequence) {
                indices.register_synthetic(IndexKind::Escape, base, &record.name);
            }
        }

        indices
    }

    /// Look up a key in one index
    pub fn lookup(&self, kind: IndexKind, key: &str) -> Option<&str> {
        self.map(kind).get(key).map(String::as_str)
    }

    /// Number of keys held by one index, synthetic keys included
    pub fn len(&self, kind: IndexKind) -> usize {
        self.map(kind).len()
    }

    fn map(&self, kind: IndexKind) -> &HashMap<String, String> {
        match kind {
            IndexKind::Character => &self.character,
            IndexKind::Shortcode => &self.shortcode,
            IndexKind::Html => &self.html,
            IndexKind::Escape => &self.escape,
        }
    }

    fn map_mut(&mut self, kind: IndexKind) -> &mut HashMap<String, String> {
        match kind {
            IndexKind::Character => &mut self.character,
            IndexKind::Shortcode => &mut self.shortcode,
            IndexKind::Html => &mut self.html,
            IndexKind::Escape => &mut self.escape,
        }
    }

    fn register_canonical(&mut self, kind: IndexKind, key: &str, name: &str) {
        let map = self.map_mut(kind);
        if let Some(existing) = map.get(key) {
            log::warn!(
                "{} key {:?} of {:?} already belongs to {:?}, keeping the first",
                kind,
                key,
                name,
                existing
            );
            return;
        }
        map.insert(key.to_string(), name.to_string());
    }

    fn register_synthetic(&mut self, kind: IndexKind, key: &str, name: &str) {
        let map = self.map_mut(kind);
        if let Some(existing) = map.get(key) {
            if existing != name {
                log::debug!(
                    "dropping synthetic {} key {:?} of {:?}, taken by {:?}",
                    kind,
                    key,
                    name,
                    existing
                );
            }
            return;
        }
        map.insert(key.to_string(), name.to_string());
    }
}

/// HTML entity with its trailing variation-selector entity removed
pub fn html_base_form(html: &str) -> Option<&str> {
    html.strip_suffix(VARIATION_SELECTOR_HTML)
        .or_else(|| html.strip_suffix("&#xFE0F;"))
        .filter(|base| !base.is_empty())
}

/// Escape sequence with its trailing variation-selector escape removed
pub fn escape_base_form(escape: &str) -> Option<&str> {
    escape
        .strip_suffix(VARIATION_SELECTOR_ESCAPE)
        .or_else(|| escape.strip_suffix("\\U0000FE0F"))
        .filter(|base| !base.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmojiRecord;

    #[test]
    fn test_base_forms() {
        assert_eq!(html_base_form("&#x1f399;&#xfe0f;"), Some("&#x1f399;"));
        assert_eq!(html_base_form("&#x1f604;"), None);
        assert_eq!(html_base_form("&#xfe0f;"), None);
        assert_eq!(escape_base_form("\\U0001F399\\uFE0F"), Some("\\U0001F399"));
        assert_eq!(escape_base_form("\\U0001F604"), None);
    }

    #[test]
    fn test_builtin_synthetic_keys() {
        let indices = ReverseIndices::build(&Catalog::builtin());
        assert_eq!(indices.lookup(IndexKind::Html, "&#x1f399;&#xfe0f;"), Some("microphone"));
        assert_eq!(indices.lookup(IndexKind::Html, "&#x1f399;"), Some("microphone"));
        assert_eq!(indices.lookup(IndexKind::Html, "&#x1f399;\u{fe0f}"), Some("microphone"));
        assert_eq!(indices.lookup(IndexKind::Escape, "\\U0001F399"), Some("microphone"));
        assert_eq!(indices.lookup(IndexKind::Shortcode, ":microphone:"), Some("microphone"));
        assert_eq!(indices.lookup(IndexKind::Character, "\u{1f399}\u{fe0f}"), Some("microphone"));
        // the base character is not a synthetic key
        assert_eq!(indices.lookup(IndexKind::Character, "\u{1f399}"), None);
    }

    #[test]
    fn test_canonical_key_beats_synthetic_key() {
        // "plain" owns the canonical entity that "styled" would derive as its base form
        let catalog = Catalog::from_records(vec![
            EmojiRecord::new(
                "styled",
                "\u{2764}\u{fe0f}",
                ":styled:",
                "&#x2764;&#xfe0f;",
                "\\U00002764\\uFE0F",
            ),
            EmojiRecord::new("plain", "\u{2764}", ":plain:", "&#x2764;", "\\U00002764"),
        ])
        .unwrap();
        let indices = ReverseIndices::build(&catalog);
        assert_eq!(indices.lookup(IndexKind::Html, "&#x2764;"), Some("plain"));
        assert_eq!(indices.lookup(IndexKind::Escape, "\\U00002764"), Some("plain"));
        assert_eq!(indices.lookup(IndexKind::Html, "&#x2764;\u{fe0f}"), Some("styled"));
    }

    #[test]
    fn test_first_synthetic_key_wins() {
        let catalog = Catalog::from_records(vec![
            EmojiRecord::new("first", "\u{2600}\u{fe0f}", ":first:", "&#x2600;&#xfe0f;", "\\U00002600\\uFE0F"),
            EmojiRecord::new(
                "second",
                "\u{2600}\u{fe0f}",
                ":second:",
                "&#x2600;&#xfe0f;",
                "\\U00002600\\uFE0F",
            ),
        ])
        .unwrap();
        let indices = ReverseIndices::build(&catalog);
        assert_eq!(indices.lookup(IndexKind::Html, "&#x2600;&#xfe0f;"), Some("first"));
        assert_eq!(indices.lookup(IndexKind::Html, "&#x2600;"), Some("first"));
        assert_eq!(indices.lookup(IndexKind::Character, "\u{2600}\u{fe0f}"), Some("first"));
        assert_eq!(indices.lookup(IndexKind::Shortcode, ":second:"), Some("second"));
    }
}
