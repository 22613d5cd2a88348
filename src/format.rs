use crate::error::{EmojiError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Emoji representation types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Literal emoji character (🎙️)
    Emoji,
    /// Colon-delimited alias (:microphone:)
    Shortcode,
    /// HTML numeric entities (&#x1f399;&#xfe0f;)
    Html,
    /// Backslash escapes, one per code point (\U0001F399\uFE0F)
    Unicode,
}

impl Format {
    /// Every format, in declaration order
    pub const ALL: [Format; 4] = [Format::Emoji, Format::Shortcode, Format::Html, Format::Unicode];

    /// Get format name as string
    pub fn name(&self) -> &'static str {
        match self {
            Format::Emoji => "emoji",
            Format::Shortcode => "shortcode",
            Format::Html => "html",
            Format::Unicode => "unicode",
        }
    }
}

impl FromStr for Format {
    type Err = EmojiError;

    fn from_str(value: &str) -> Result<Self> {
        #[allow(clippy::enum_glob_use)]
        use Format::*;
        match value.trim().to_lowercase().as_str() {
            "emoji" | "char" | "character" => Ok(Emoji),
            "shortcode" => Ok(Shortcode),
            "html" | "entity" => Ok(Html),
            "unicode" | "escape" => Ok(Unicode),
            _ => Err(EmojiError::InvalidFormat(value.to_string())),
        }
    }
}

impl TryFrom<String> for Format {
    type Error = EmojiError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_str(value.as_str())
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_roundtrip() {
        for format in Format::ALL {
            assert_eq!(format.name().parse::<Format>().unwrap(), format);
        }
    }

    #[test]
    fn test_format_aliases() {
        assert_eq!(Format::from_str(" HTML ").unwrap(), Format::Html);
        assert_eq!(Format::from_str("escape").unwrap(), Format::Unicode);
        assert_eq!(Format::from_str("Character").unwrap(), Format::Emoji);
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(
            Format::from_str("bogus"),
            Err(EmojiError::InvalidFormat("bogus".to_string()))
        );
        assert!(Format::try_from(String::new()).is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Format::Shortcode).unwrap(), "\"shortcode\"");
        let parsed: Format = serde_json::from_str("\"unicode\"").unwrap();
        assert_eq!(parsed, Format::Unicode);
    }
}
