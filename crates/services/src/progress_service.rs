use storage::{ProgressStore, StorageError};
use vocab_core::{Catalog, ProgressDocument, QuizResult, WordEntry, WordId};

/// Progress counts for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStats {
    pub known: usize,
    pub total: usize,
}

/// Coordinates progress reads and writes around the store's fail-soft
/// contract. The presentation layer owns the working document and threads it
/// through these calls; every mutation is saved back explicitly.
#[derive(Clone)]
pub struct ProgressService {
    store: ProgressStore,
}

impl ProgressService {
    #[must_use]
    pub fn new(store: ProgressStore) -> Self {
        Self { store }
    }

    /// Load the persisted document, defaulting on any failure.
    #[must_use]
    pub fn load(&self) -> ProgressDocument {
        self.store.load()
    }

    /// Persist the working document.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failure; callers keep the in-memory
    /// document and treat the failure as non-fatal.
    pub fn save(&self, doc: &ProgressDocument) -> Result<(), StorageError> {
        self.store.save(doc)
    }

    /// Mark a word known and persist the document when the mark is new.
    ///
    /// The in-memory mark survives a failed save, so the current session
    /// still sees the word as known. Returns whether the id was newly added.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the save fails.
    pub fn mark_known_and_save(
        &self,
        doc: &mut ProgressDocument,
        id: WordId,
    ) -> Result<bool, StorageError> {
        if !doc.mark_known(id) {
            return Ok(false);
        }
        self.store.save(doc)?;
        Ok(true)
    }
}

/// Known-word entries in the order they were marked. Stale ids (no longer in
/// the catalog) are skipped, not errors.
#[must_use]
pub fn known_entries<'a>(doc: &ProgressDocument, catalog: &'a Catalog) -> Vec<&'a WordEntry> {
    doc.known()
        .iter()
        .filter_map(|id| catalog.find_by_id(id.as_str()))
        .collect()
}

#[must_use]
pub fn stats(doc: &ProgressDocument, catalog: &Catalog) -> ProgressStats {
    ProgressStats {
        known: doc.known_count(),
        total: catalog.len(),
    }
}

/// Quiz history, most recent first (display order).
#[must_use]
pub fn recent_history(doc: &ProgressDocument) -> Vec<QuizResult> {
    doc.quiz_history().iter().rev().copied().collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
