#![forbid(unsafe_code)]

pub mod daily_service;
pub mod error;
pub mod progress_service;
pub mod quiz;

pub use vocab_core::Clock;

pub use daily_service::DailyService;
pub use error::QuizError;
pub use progress_service::{ProgressService, ProgressStats, known_entries, recent_history, stats};
pub use quiz::{
    Advance, AnswerOutcome, DEFAULT_DISTRACTOR_COUNT, DEFAULT_QUESTION_COUNT, QuizBuilder,
    QuizProgress, QuizSession, build_choices,
};
