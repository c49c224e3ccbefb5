use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

use vocab_core::{Catalog, WordEntry};

use super::session::QuizSession;
use crate::error::QuizError;

pub const DEFAULT_QUESTION_COUNT: usize = 5;
pub const DEFAULT_DISTRACTOR_COUNT: usize = 3;

/// Builds a quiz session by permuting the catalog and taking a bounded
/// prefix as the question order.
pub struct QuizBuilder<'a> {
    catalog: &'a Catalog,
    question_count: usize,
    distractor_count: usize,
}

impl<'a> QuizBuilder<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            question_count: DEFAULT_QUESTION_COUNT,
            distractor_count: DEFAULT_DISTRACTOR_COUNT,
        }
    }

    /// Override the number of questions. Clamped to at least 1: a session
    /// always asks something.
    #[must_use]
    pub fn with_question_count(mut self, count: usize) -> Self {
        self.question_count = count.max(1);
        self
    }

    /// Override the number of distractors per question.
    #[must_use]
    pub fn with_distractor_count(mut self, count: usize) -> Self {
        self.distractor_count = count;
        self
    }

    /// Start a session using the process-wide RNG.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyCatalog` when there are no entries.
    pub fn start(self) -> Result<QuizSession, QuizError> {
        let mut rng = rng();
        self.start_with(&mut rng)
    }

    /// Start a session with an injected RNG (deterministic in tests).
    ///
    /// Questions are drawn without replacement: a shuffled working copy of
    /// the catalog is truncated to `min(question_count, len)`, so no word
    /// repeats within one session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyCatalog` when there are no entries.
    pub fn start_with(self, rng: &mut impl Rng) -> Result<QuizSession, QuizError> {
        let mut pool: Vec<WordEntry> = self.catalog.entries().to_vec();
        if pool.is_empty() {
            return Err(QuizError::EmptyCatalog);
        }

        pool.shuffle(rng);
        pool.truncate(self.question_count.min(pool.len()));

        Ok(QuizSession::new(pool, self.distractor_count))
    }
}

/// Assemble the multiple-choice options for one question.
///
/// Picks `min(distractor_count, len - 1)` distractors uniformly without
/// replacement from the catalog excluding the question itself, adds the
/// correct entry, and shuffles the combined set so the correct slot is
/// uniformly distributed. Small catalogs silently yield fewer distractors.
#[must_use]
pub fn build_choices(
    question: &WordEntry,
    catalog: &Catalog,
    distractor_count: usize,
    rng: &mut impl Rng,
) -> Vec<WordEntry> {
    let mut choices: Vec<WordEntry> = catalog
        .entries()
        .iter()
        .filter(|entry| entry.id() != question.id())
        .cloned()
        .collect();

    choices.shuffle(rng);
    choices.truncate(distractor_count);
    choices.push(question.clone());
    choices.shuffle(rng);
    choices
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
