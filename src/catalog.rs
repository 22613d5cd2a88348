use crate::codepoint::{codepoints_of_escape, codepoints_of_html};
use crate::data::EMOJI_TABLE;
use crate::error::{EmojiError, Result};
use crate::format::Format;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// All four representations of a single emoji
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmojiRecord {
    /// Canonical identifier, unique within a catalog
    pub name: String,
    /// Literal character sequence
    pub character: String,
    /// Colon-delimited alias
    pub shortcode: String,
    /// Concatenated `&#x<hex>;` entities
    pub html_entity: String,
    /// Concatenated `\U`/`\u` escapes
    pub escape_sequence: String,
}

impl EmojiRecord {
    /// Create a record from its parts
    pub fn new(
        name: impl Into<String>,
        character: impl Into<String>,
        shortcode: impl Into<String>,
        html_entity: impl Into<String>,
        escape_sequence: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            character: character.into(),
            shortcode: shortcode.into(),
            html_entity: html_entity.into(),
            escape_sequence: escape_sequence.into(),
        }
    }

    /// Project a single representation
    pub fn get(&self, format: Format) -> &str {
        match format {
            Format::Emoji => &self.character,
            Format::Shortcode => &self.shortcode,
            Format::Html => &self.html_entity,
            Format::Unicode => &self.escape_sequence,
        }
    }

    /// Check that every field is present and that the character, HTML and
    /// escape forms encode the same code points.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| EmojiError::InvalidRecord {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("empty name"));
        }
        for format in Format::ALL {
            if self.get(format).is_empty() {
                return Err(invalid(&format!("empty {} field", format)));
            }
        }

        let is_shortcode = self.shortcode.len() > 2
            && self.shortcode.starts_with(':')
            && self.shortcode.ends_with(':')
            && !self.shortcode[1..self.shortcode.len() - 1].contains(':');
        if !is_shortcode {
            return Err(invalid("shortcode must have the form :name:"));
        }

        let chars: Vec<char> = self.character.chars().collect();
        match codepoints_of_html(&self.html_entity) {
            Some(html) if html == chars => {}
            Some(_) => return Err(invalid("html entity does not match character")),
            None => return Err(invalid("malformed html entity")),
        }
        match codepoints_of_escape(&self.escape_sequence) {
            Some(escape) if escape == chars => {}
            Some(_) => return Err(invalid("escape sequence does not match character")),
            None => return Err(invalid("malformed escape sequence")),
        }

        Ok(())
    }
}

impl std::fmt::Display for EmojiRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name:      {}", self.name)?;
        writeln!(f, "Emoji:     {}", self.character)?;
        writeln!(f, "Shortcode: {}", self.shortcode)?;
        writeln!(f, "HTML:      {}", self.html_entity)?;
        write!(f, "Unicode:   {}", self.escape_sequence)
    }
}

/// Immutable name to record table.
///
/// Records keep their insertion order, which is also the registration order
/// used when deriving reverse indices.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<EmojiRecord>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Catalog backed by the embedded emoji table
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        catalog.records.reserve(EMOJI_TABLE.len());
        for &(name, character, shortcode, html_entity, escape_sequence) in EMOJI_TABLE {
            let record = EmojiRecord::new(name, character, shortcode, html_entity, escape_sequence);
            if catalog.insert(record).is_err() {
                log::debug!("skipping duplicate embedded emoji {}", name);
            }
        }
        catalog
    }

    /// Build a catalog from arbitrary records, validating each one
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = EmojiRecord>,
    {
        let mut catalog = Self::default();
        for record in records {
            record.validate()?;
            catalog.insert(record)?;
        }
        Ok(catalog)
    }

    /// Parse a JSON array of records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<EmojiRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Read a JSON array of records from disk
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| EmojiError::CatalogLoad(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    fn insert(&mut self, record: EmojiRecord) -> Result<()> {
        if self.by_name.contains_key(&record.name) {
            return Err(EmojiError::DuplicateName(record.name));
        }
        self.by_name.insert(record.name.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Look up a record by canonical name
    pub fn get(&self, name: &str) -> Option<&EmojiRecord> {
        self.by_name.get(name).map(|&i| &self.records[i])
    }

    /// Check whether a canonical name exists
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in registration order
    pub fn iter(&self) -> impl Iterator<Item = &EmojiRecord> {
        self.records.iter()
    }

    /// Canonical names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smile() -> EmojiRecord {
        EmojiRecord::new("smile", "\u{1f604}", ":smile:", "&#x1f604;", "\\U0001F604")
    }

    #[test]
    fn test_builtin_records_are_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), EMOJI_TABLE.len(), "embedded table has duplicate names");
        for record in catalog.iter() {
            if let Err(e) = record.validate() {
                panic!("{}", e);
            }
        }
    }

    #[test]
    fn test_builtin_characters_do_not_overlap() {
        let catalog = Catalog::builtin();
        let characters: Vec<&str> = catalog.iter().map(|r| r.character.as_str()).collect();
        let known: std::collections::HashSet<&str> = characters.iter().copied().collect();
        for a in &characters {
            for b in &characters {
                if a != b {
                    assert!(!b.contains(a), "{:?} occurs inside {:?}", a, b);
                }
                // two adjacent emoji must not spell a third one across the seam
                let joined = format!("{}{}", a, b);
                for (i, _) in a.char_indices().skip(1) {
                    for (j, _) in b.char_indices().skip(1) {
                        let straddling = &joined[i..a.len() + j];
                        assert!(!known.contains(straddling), "{:?} appears inside {:?}", straddling, joined);
                    }
                }
            }
        }
    }

    #[test]
    fn test_builtin_lookup() {
        let catalog = Catalog::builtin();
        let record = catalog.get("smile").unwrap();
        assert_eq!(record.character, "\u{1f604}");
        assert_eq!(record.get(Format::Shortcode), ":smile:");
        assert!(catalog.contains("microphone"));
        assert!(!catalog.contains("not-a-real-emoji"));
        assert_eq!(catalog.names().next(), Some("smile"));
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let result = Catalog::from_records(vec![smile(), smile()]);
        assert_eq!(result.unwrap_err(), EmojiError::DuplicateName("smile".to_string()));
    }

    #[test]
    fn test_validate_rejects_mismatch() {
        let mut record = smile();
        record.html_entity = "&#x1f609;".to_string();
        assert!(matches!(record.validate(), Err(EmojiError::InvalidRecord { .. })));

        let mut record = smile();
        record.escape_sequence = String::new();
        assert!(record.validate().is_err());

        let mut record = smile();
        record.shortcode = "smile".to_string();
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{
            "name": "wink",
            "character": "😉",
            "shortcode": ":wink:",
            "html_entity": "&#x1f609;",
            "escape_sequence": "\\U0001F609"
        }]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("wink").unwrap().character, "\u{1f609}");

        assert!(matches!(
            Catalog::from_json_str("{}"),
            Err(EmojiError::CatalogLoad(_))
        ));
    }

    #[test]
    fn test_record_display() {
        let text = smile().to_string();
        assert!(text.contains("Shortcode: :smile:"));
        assert!(text.ends_with("\\U0001F604"));
    }
}
