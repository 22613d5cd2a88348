use thiserror::Error;

/// Result type for emoji transcoder operations
pub type Result<T> = std::result::Result<T, EmojiError>;

/// Error types for emoji lookup and catalog construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmojiError {
    /// No resolution path matched the input
    #[error("emoji not found or not supported: {0:?}")]
    NotFound(String),

    /// Target format outside of emoji, shortcode, html, unicode
    #[error("invalid target format: {0:?}. Valid formats: emoji, shortcode, html, unicode")]
    InvalidFormat(String),

    /// Two catalog records share a name
    #[error("duplicate emoji name in catalog: {0}")]
    DuplicateName(String),

    /// A catalog record failed validation
    #[error("invalid catalog record {name:?}: {reason}")]
    InvalidRecord { name: String, reason: String },

    /// An external catalog could not be read or parsed
    #[error("failed to load catalog: {0}")]
    CatalogLoad(String),
}

impl From<std::io::Error> for EmojiError {
    fn from(err: std::io::Error) -> Self {
        EmojiError::CatalogLoad(err.to_string())
    }
}

impl From<serde_json::Error> for EmojiError {
    fn from(err: serde_json::Error) -> Self {
        EmojiError::CatalogLoad(err.to_string())
    }
}

impl EmojiError {
    /// True for the `NotFound` variant
    pub fn is_not_found(&self) -> bool {
        matches!(self, EmojiError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EmojiError::NotFound("nope".to_string());
        assert_eq!(err.to_string(), "emoji not found or not supported: \"nope\"");
        assert!(err.is_not_found());

        let err = EmojiError::InvalidFormat("bogus".to_string());
        assert!(err.to_string().contains("emoji, shortcode, html, unicode"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_json_error_conversion() {
        let err: EmojiError = serde_json::from_str::<Vec<u8>>("not json").unwrap_err().into();
        assert!(matches!(err, EmojiError::CatalogLoad(_)));
    }
}
