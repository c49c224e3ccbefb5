use std::collections::HashSet;
use thiserror::Error;

use crate::model::{WordEntry, WordId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog cannot be empty")]
    Empty,

    #[error("duplicate word id: {0}")]
    DuplicateId(WordId),
}

/// The fixed, ordered list of vocabulary entries available to the app.
///
/// Immutable once built. Order matters only for cyclic flashcard navigation
/// and the daily rotation, never for ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<WordEntry>,
}

impl Catalog {
    /// Build a catalog from entries, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty list and
    /// `CatalogError::DuplicateId` when two entries share an id.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id()) {
                return Err(CatalogError::DuplicateId(entry.id().clone()));
            }
        }

        Ok(Self { entries })
    }

    /// The compiled-in English → Telugu starter dataset.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN_WORDS
            .iter()
            .map(|(id, en, te, tr)| WordEntry::new(*id, *en, *te, *tr))
            .collect::<Result<Vec<_>, _>>()
            .expect("builtin dataset entries are valid");
        Self::new(entries).expect("builtin dataset is a valid catalog")
    }

    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&WordEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&WordEntry> {
        self.entries.iter().find(|entry| entry.id().as_str() == id)
    }
}

const BUILTIN_WORDS: &[(&str, &str, &str, &str)] = &[
    ("w1", "Hello", "హలో", "halō"),
    ("w2", "Thank you", "ధన్యవాదాలు", "dhanyavādālu"),
    ("w3", "Water", "నీళ్లు", "nīḷḷu"),
    ("w4", "Food", "ఆహారం", "āhāraṁ"),
    ("w5", "How are you?", "మీరు ఎలా ఉన్నారు?", "mīru elā unnāru?"),
    ("w6", "Yes", "అవును", "avunu"),
    ("w7", "No", "లేదు", "lēdu"),
    ("w8", "Good morning", "శుభోదయం", "śubhōdayaṁ"),
    ("w9", "Sorry", "క్షమించండి", "kṣamin̄caṇḍi"),
    ("w10", "Please", "దయచేసి", "dayacēsi"),
];

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
