use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unique identifier for a catalog word (a short stable token such as `"w1"`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(String);

impl WordId {
    /// Creates a new `WordId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string token
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordId({})", self.0)
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── WORD ENTRY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordEntryError {
    #[error("word id cannot be empty")]
    EmptyId,

    #[error("source text cannot be empty")]
    EmptySourceText,

    #[error("target text cannot be empty")]
    EmptyTargetText,
}

/// One vocabulary entry: a source-language phrase, its target-language
/// rendering, and a phonetic transliteration of the target text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    id: WordId,
    source_text: String,
    target_text: String,
    transliteration: String,
}

impl WordEntry {
    /// Build a validated entry. The transliteration may be empty; id, source,
    /// and target text may not.
    ///
    /// # Errors
    ///
    /// Returns `WordEntryError` when id, source text, or target text is blank.
    pub fn new(
        id: impl Into<String>,
        source_text: impl Into<String>,
        target_text: impl Into<String>,
        transliteration: impl Into<String>,
    ) -> Result<Self, WordEntryError> {
        let id = id.into();
        let source_text = source_text.into();
        let target_text = target_text.into();

        if id.trim().is_empty() {
            return Err(WordEntryError::EmptyId);
        }
        if source_text.trim().is_empty() {
            return Err(WordEntryError::EmptySourceText);
        }
        if target_text.trim().is_empty() {
            return Err(WordEntryError::EmptyTargetText);
        }

        Ok(Self {
            id: WordId::new(id),
            source_text,
            target_text,
            transliteration: transliteration.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &WordId {
        &self.id
    }

    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    #[must_use]
    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    #[must_use]
    pub fn transliteration(&self) -> &str {
        &self.transliteration
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_rejects_blank_id() {
        let err = WordEntry::new("  ", "Hello", "హలో", "halō").unwrap_err();
        assert_eq!(err, WordEntryError::EmptyId);
    }

    #[test]
    fn entry_rejects_blank_source_text() {
        let err = WordEntry::new("w1", " ", "హలో", "halō").unwrap_err();
        assert_eq!(err, WordEntryError::EmptySourceText);
    }

    #[test]
    fn entry_rejects_blank_target_text() {
        let err = WordEntry::new("w1", "Hello", "", "halō").unwrap_err();
        assert_eq!(err, WordEntryError::EmptyTargetText);
    }

    #[test]
    fn entry_allows_empty_transliteration() {
        let entry = WordEntry::new("w1", "Hello", "హలో", "").unwrap();
        assert_eq!(entry.transliteration(), "");
    }

    #[test]
    fn word_id_display_and_debug() {
        let id = WordId::new("w7");
        assert_eq!(id.to_string(), "w7");
        assert_eq!(format!("{id:?}"), "WordId(w7)");
    }
}
