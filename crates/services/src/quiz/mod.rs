mod plan;
mod session;

pub use plan::{DEFAULT_DISTRACTOR_COUNT, DEFAULT_QUESTION_COUNT, QuizBuilder, build_choices};
pub use session::{Advance, AnswerOutcome, QuizProgress, QuizSession};
