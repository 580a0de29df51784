use std::fmt;

/// Recognition language, e.g. `bn-BD`. Fixed configuration input; the
/// pipeline never auto-detects language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(tag: impl Into<String>) -> Result<Self, LanguageTagError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(LanguageTagError::Empty);
        }
        if !tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(LanguageTagError::InvalidCharacters(tag));
        }
        Ok(Self(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LanguageTagError {
    #[error("language tag is empty")]
    Empty,
    #[error("language tag contains invalid characters: {0}")]
    InvalidCharacters(String),
}
