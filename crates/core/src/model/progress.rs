use chrono::NaiveDate;
use thiserror::Error;

use crate::model::word::WordId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizResultError {
    #[error("a quiz must present at least one question")]
    EmptyQuiz,

    #[error("score {score} exceeds total {total}")]
    ScoreExceedsTotal { score: u32, total: u32 },

    #[error("too many questions for a single quiz: {len}")]
    TooManyQuestions { len: usize },
}

/// Outcome of one completed quiz, as it appears in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    date: NaiveDate,
    score: u32,
    total: u32,
}

impl QuizResult {
    /// Build a validated result.
    ///
    /// # Errors
    ///
    /// Returns `QuizResultError::EmptyQuiz` if `total` is zero, or
    /// `QuizResultError::ScoreExceedsTotal` if `score > total`.
    pub fn new(date: NaiveDate, score: u32, total: u32) -> Result<Self, QuizResultError> {
        if total == 0 {
            return Err(QuizResultError::EmptyQuiz);
        }
        if score > total {
            return Err(QuizResultError::ScoreExceedsTotal { score, total });
        }

        Ok(Self { date, score, total })
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }
}

//
// ─── PROGRESS DOCUMENT ─────────────────────────────────────────────────────────
//

/// The single persisted aggregate: known-word ids plus quiz history.
///
/// `known` keeps insertion order and never holds duplicates. `quiz_history`
/// is append-only; insertion order is completion order. Ids that no longer
/// resolve against the catalog are kept (catalogs can change under a stored
/// document); consumers skip them on lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressDocument {
    known: Vec<WordId>,
    quiz_history: Vec<QuizResult>,
}

impl ProgressDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a document from persisted parts. Duplicate known ids are
    /// dropped, keeping the first occurrence.
    #[must_use]
    pub fn from_parts(known: Vec<WordId>, quiz_history: Vec<QuizResult>) -> Self {
        let mut doc = Self {
            known: Vec::with_capacity(known.len()),
            quiz_history,
        };
        for id in known {
            doc.mark_known(id);
        }
        doc
    }

    #[must_use]
    pub fn known(&self) -> &[WordId] {
        &self.known
    }

    #[must_use]
    pub fn quiz_history(&self) -> &[QuizResult] {
        &self.quiz_history
    }

    #[must_use]
    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    #[must_use]
    pub fn is_known(&self, id: &WordId) -> bool {
        self.known.contains(id)
    }

    /// Add a word to the known set. Idempotent: marking an id that is already
    /// present changes nothing. Returns whether the id was newly added.
    pub fn mark_known(&mut self, id: WordId) -> bool {
        if self.is_known(&id) {
            return false;
        }
        self.known.push(id);
        true
    }

    /// Append a completed quiz to the history.
    pub fn record_quiz(&mut self, result: QuizResult) {
        self.quiz_history.push(result);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
