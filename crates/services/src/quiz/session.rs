use chrono::NaiveDate;
use rand::Rng;
use rand::rng;
use std::fmt;
use tracing::debug;

use vocab_core::{Catalog, ProgressDocument, QuizResult, QuizResultError, WordEntry, WordId};

use super::plan::build_choices;
use crate::error::QuizError;

/// Outcome of answering the current question.
///
/// An incorrect answer carries the correct id so a presentation layer can
/// reveal it. Comparison is by id, never by rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { correct: WordId },
}

/// Result of advancing past the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next,
    Complete,
}

/// Snapshot of how far a session has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

/// One in-progress multiple-choice quiz over a fixed question order.
///
/// Transient: a session dropped before `finish` leaves no trace in the
/// progress document, and `finish` consumes the session so a result can be
/// recorded at most once.
pub struct QuizSession {
    questions: Vec<WordEntry>,
    current: usize,
    score: u32,
    answered: usize,
    answered_current: bool,
    complete: bool,
    distractor_count: usize,
}

impl QuizSession {
    pub(crate) fn new(questions: Vec<WordEntry>, distractor_count: usize) -> Self {
        Self {
            questions,
            current: 0,
            score: 0,
            answered: 0,
            answered_current: false,
            complete: false,
            distractor_count,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[WordEntry] {
        &self.questions
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The question currently being asked, or `None` once complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&WordEntry> {
        if self.complete {
            None
        } else {
            Some(&self.questions[self.current])
        }
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.total_questions(),
            answered: self.answered,
            remaining: self.total_questions().saturating_sub(self.answered),
            is_complete: self.complete,
        }
    }

    /// Multiple-choice options for the current question, using the
    /// process-wide RNG. Empty once the session is complete.
    #[must_use]
    pub fn current_choices(&self, catalog: &Catalog) -> Vec<WordEntry> {
        let mut rng = rng();
        self.current_choices_with(catalog, &mut rng)
    }

    /// Multiple-choice options for the current question with an injected RNG.
    #[must_use]
    pub fn current_choices_with(&self, catalog: &Catalog, rng: &mut impl Rng) -> Vec<WordEntry> {
        self.current_question()
            .map(|question| build_choices(question, catalog, self.distractor_count, rng))
            .unwrap_or_default()
    }

    /// Score the chosen entry against the current question.
    ///
    /// Valid once per question: the answer latch only resets when the
    /// session advances, so the score can never be double-counted.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` after the session has completed and
    /// `QuizError::AlreadyAnswered` on a repeat call for the same question.
    pub fn answer(&mut self, chosen: &WordId) -> Result<AnswerOutcome, QuizError> {
        if self.complete {
            return Err(QuizError::Completed);
        }
        if self.answered_current {
            return Err(QuizError::AlreadyAnswered);
        }

        self.answered_current = true;
        self.answered += 1;

        let question = &self.questions[self.current];
        if question.id() == chosen {
            self.score += 1;
            Ok(AnswerOutcome::Correct)
        } else {
            Ok(AnswerOutcome::Incorrect {
                correct: question.id().clone(),
            })
        }
    }

    /// Move past the current question.
    ///
    /// On the last index this flips the session into its completed state and
    /// returns `Advance::Complete` (idempotently thereafter); the caller is
    /// expected to call [`QuizSession::finish`] next. Advancing an unanswered
    /// question is allowed and simply scores nothing.
    pub fn advance(&mut self) -> Advance {
        if self.complete {
            return Advance::Complete;
        }

        if self.current + 1 >= self.questions.len() {
            self.complete = true;
            debug!(
                score = self.score,
                total = self.questions.len(),
                "quiz session complete"
            );
            return Advance::Complete;
        }

        self.current += 1;
        self.answered_current = false;
        Advance::Next
    }

    /// Convert the completed session into a `QuizResult` appended to the
    /// progress document. The caller is responsible for persisting the
    /// document afterwards; the engine never touches the store.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotComplete` before the final `advance`.
    pub fn finish(
        self,
        progress: &mut ProgressDocument,
        today: NaiveDate,
    ) -> Result<QuizResult, QuizError> {
        if !self.complete {
            return Err(QuizError::NotComplete);
        }

        let total = u32::try_from(self.questions.len()).map_err(|_| {
            QuizResultError::TooManyQuestions {
                len: self.questions.len(),
            }
        })?;
        let result = QuizResult::new(today, self.score, total)?;
        progress.record_quiz(result);
        Ok(result)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("answered", &self.answered)
            .field("complete", &self.complete)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::plan::QuizBuilder;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use vocab_core::time::fixed_clock;

    fn start_session(seed: u64) -> (Catalog, QuizSession) {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(seed);
        let session = QuizBuilder::new(&catalog).start_with(&mut rng).unwrap();
        (catalog, session)
    }

    #[test]
    fn correct_answer_increments_score() {
        let (_catalog, mut session) = start_session(1);
        let correct = session.current_question().unwrap().id().clone();

        assert_eq!(session.answer(&correct).unwrap(), AnswerOutcome::Correct);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn incorrect_answer_reveals_the_correct_id() {
        let (_catalog, mut session) = start_session(2);
        let correct = session.current_question().unwrap().id().clone();
        let wrong = WordId::new("definitely-not-a-word");

        let outcome = session.answer(&wrong).unwrap();
        assert_eq!(outcome, AnswerOutcome::Incorrect { correct });
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn repeat_answer_is_rejected_and_never_double_counts() {
        let (_catalog, mut session) = start_session(3);
        let correct = session.current_question().unwrap().id().clone();

        session.answer(&correct).unwrap();
        let err = session.answer(&correct).unwrap_err();
        assert!(matches!(err, QuizError::AlreadyAnswered));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn session_walks_to_completion() {
        let (_catalog, mut session) = start_session(4);

        for step in 0..5 {
            assert!(session.current_question().is_some());
            let expected = if step == 4 {
                Advance::Complete
            } else {
                Advance::Next
            };
            assert_eq!(session.advance(), expected);
        }

        assert!(session.is_complete());
        assert!(session.current_question().is_none());
        assert_eq!(session.advance(), Advance::Complete);
        assert!(matches!(
            session.answer(&WordId::new("w1")).unwrap_err(),
            QuizError::Completed
        ));
    }

    #[test]
    fn finish_before_completion_is_rejected() {
        let (_catalog, session) = start_session(5);
        let mut progress = ProgressDocument::new();

        let err = session.finish(&mut progress, fixed_clock().today()).unwrap_err();
        assert!(matches!(err, QuizError::NotComplete));
        assert!(progress.quiz_history().is_empty());
    }

    #[test]
    fn three_of_five_appends_matching_result() {
        let (_catalog, mut session) = start_session(6);
        let mut progress = ProgressDocument::new();

        for step in 0..5 {
            let correct = session.current_question().unwrap().id().clone();
            if step < 3 {
                session.answer(&correct).unwrap();
            } else {
                session.answer(&WordId::new("wrong")).unwrap();
            }
            session.advance();
        }

        let today = fixed_clock().today();
        let result = session.finish(&mut progress, today).unwrap();

        assert_eq!(result.score(), 3);
        assert_eq!(result.total(), 5);
        assert_eq!(progress.quiz_history(), &[result]);
        assert_eq!(result.date(), today);
    }

    #[test]
    fn unanswered_questions_score_zero() {
        let (_catalog, mut session) = start_session(7);
        let mut progress = ProgressDocument::new();

        while session.advance() == Advance::Next {}
        let result = session.finish(&mut progress, fixed_clock().today()).unwrap();

        assert_eq!(result.score(), 0);
        assert_eq!(result.total(), 5);
    }

    #[test]
    fn score_never_exceeds_total_for_arbitrary_answer_sequences() {
        for seed in 0..20 {
            let (_catalog, mut session) = start_session(seed);
            let mut rng = StdRng::seed_from_u64(seed.wrapping_mul(31));
            let mut progress = ProgressDocument::new();

            loop {
                if rng.random_bool(0.7) {
                    let guess = if rng.random_bool(0.5) {
                        session.current_question().unwrap().id().clone()
                    } else {
                        WordId::new("w1")
                    };
                    let _ = session.answer(&guess);
                }
                if session.advance() == Advance::Complete {
                    break;
                }
            }

            let result = session.finish(&mut progress, fixed_clock().today()).unwrap();
            assert!(result.score() <= result.total());
        }
    }

    #[test]
    fn current_choices_cover_the_current_question() {
        let (catalog, session) = start_session(8);
        let mut rng = StdRng::seed_from_u64(99);

        let choices = session.current_choices_with(&catalog, &mut rng);
        let question = session.current_question().unwrap();

        assert_eq!(choices.len(), 4);
        assert!(choices.iter().any(|entry| entry.id() == question.id()));
    }
}
