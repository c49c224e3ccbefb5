use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, warn};

use vocab_core::{ProgressDocument, QuizResult, QuizResultError, WordId};

/// Errors surfaced by storage backends.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Key-value string store contract: the only persistence seam of the app.
///
/// A single fixed key holds the whole progress document; writes are full
/// overwrites, never partial updates.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value for `key`, or `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

//
// ─── PERSISTED RECORDS ─────────────────────────────────────────────────────────
//

/// Persisted shape of one quiz history line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResultRecord {
    pub date: NaiveDate,
    pub score: u32,
    pub total: u32,
}

/// Persisted shape of the progress document.
///
/// Mirrors the domain `ProgressDocument` so the store can (de)serialize
/// without leaking wire concerns into the domain layer. Both fields default
/// so a bare `{}` loads as an empty document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(default)]
    pub known: Vec<String>,
    #[serde(default)]
    pub quizzes: Vec<QuizResultRecord>,
}

impl ProgressRecord {
    #[must_use]
    pub fn from_document(doc: &ProgressDocument) -> Self {
        Self {
            known: doc.known().iter().map(|id| id.as_str().to_owned()).collect(),
            quizzes: doc
                .quiz_history()
                .iter()
                .map(|result| QuizResultRecord {
                    date: result.date(),
                    score: result.score(),
                    total: result.total(),
                })
                .collect(),
        }
    }

    /// Convert the record back into a domain document. Duplicate known ids
    /// are silently dropped; stale ids are kept.
    ///
    /// # Errors
    ///
    /// Returns `QuizResultError` if any stored quiz line violates the
    /// `score <= total` / `total >= 1` invariants.
    pub fn into_document(self) -> Result<ProgressDocument, QuizResultError> {
        let known: Vec<WordId> = self.known.into_iter().map(WordId::new).collect();
        let quiz_history = self
            .quizzes
            .into_iter()
            .map(|record| QuizResult::new(record.date, record.score, record.total))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProgressDocument::from_parts(known, quiz_history))
    }
}

//
// ─── PROGRESS STORE ────────────────────────────────────────────────────────────
//

/// The fixed key under which the progress document lives.
pub const PROGRESS_KEY: &str = "progress";

/// Load/save of the progress document over a key-value backend.
///
/// `load` never fails: an absent key, an unreadable backend, or a malformed
/// stored value all fall back to the default (empty) document so the app
/// stays usable after storage corruption or on first run. `save` surfaces
/// backend failures; callers treat them as non-fatal and keep the in-memory
/// document for the current session.
#[derive(Clone)]
pub struct ProgressStore {
    backend: Arc<dyn KeyValueStore>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Build a store over a fresh in-memory backend.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }

    /// Read the persisted document, defaulting on every failure path.
    #[must_use]
    pub fn load(&self) -> ProgressDocument {
        let raw = match self.backend.get(PROGRESS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ProgressDocument::default(),
            Err(err) => {
                warn!(error = %err, "progress read failed; starting from an empty document");
                return ProgressDocument::default();
            }
        };

        let record = match serde_json::from_str::<ProgressRecord>(&raw) {
            Ok(record) => record,
            Err(err) => {
                warn!(error = %err, "stored progress is not valid JSON; starting from an empty document");
                return ProgressDocument::default();
            }
        };

        match record.into_document() {
            Ok(doc) => doc,
            Err(err) => {
                warn!(error = %err, "stored progress violates invariants; starting from an empty document");
                ProgressDocument::default()
            }
        }
    }

    /// Serialize and overwrite the persisted document.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when serialization or the backend write fails.
    pub fn save(&self, doc: &ProgressDocument) -> Result<(), StorageError> {
        let record = ProgressRecord::from_document(doc);
        let raw = serde_json::to_string(&record)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.backend.set(PROGRESS_KEY, &raw)?;
        debug!(
            known = doc.known_count(),
            quizzes = doc.quiz_history().len(),
            "progress saved"
        );
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn load_defaults_when_key_is_absent() {
        let store = ProgressStore::in_memory();
        let doc = store.load();
        assert!(doc.known().is_empty());
        assert!(doc.quiz_history().is_empty());
    }

    #[test]
    fn load_defaults_on_malformed_json() {
        let backend = Arc::new(InMemoryStore::new());
        backend.set(PROGRESS_KEY, "{not json").unwrap();

        let store = ProgressStore::new(backend);
        assert_eq!(store.load(), ProgressDocument::default());
    }

    #[test]
    fn load_defaults_on_invariant_violation() {
        let backend = Arc::new(InMemoryStore::new());
        backend
            .set(
                PROGRESS_KEY,
                r#"{"known":[],"quizzes":[{"date":"2025-01-03","score":9,"total":5}]}"#,
            )
            .unwrap();

        let store = ProgressStore::new(backend);
        assert_eq!(store.load(), ProgressDocument::default());
    }

    #[test]
    fn load_accepts_empty_object() {
        let backend = Arc::new(InMemoryStore::new());
        backend.set(PROGRESS_KEY, "{}").unwrap();

        let store = ProgressStore::new(backend);
        assert_eq!(store.load(), ProgressDocument::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = ProgressStore::in_memory();

        let mut doc = ProgressDocument::new();
        doc.mark_known(WordId::new("w1"));
        doc.mark_known(WordId::new("w4"));
        doc.record_quiz(QuizResult::new(date(2025, 1, 3), 3, 5).unwrap());

        store.save(&doc).unwrap();
        assert_eq!(store.load(), doc);
    }

    #[test]
    fn load_keeps_stale_ids_and_drops_duplicates() {
        let backend = Arc::new(InMemoryStore::new());
        backend
            .set(
                PROGRESS_KEY,
                r#"{"known":["w1","ghost","w1"],"quizzes":[]}"#,
            )
            .unwrap();

        let store = ProgressStore::new(backend);
        let doc = store.load();
        assert_eq!(doc.known(), &[WordId::new("w1"), WordId::new("ghost")]);
    }

    #[test]
    fn wire_shape_uses_quizzes_field() {
        let backend = Arc::new(InMemoryStore::new());
        let store = ProgressStore::new(backend.clone());

        let mut doc = ProgressDocument::new();
        doc.record_quiz(QuizResult::new(date(2025, 1, 3), 3, 5).unwrap());
        store.save(&doc).unwrap();

        let raw = backend.get(PROGRESS_KEY).unwrap().unwrap();
        assert!(raw.contains(r#""quizzes":[{"date":"2025-01-03","score":3,"total":5}]"#));
        assert!(raw.contains(r#""known":[]"#));
    }
}
