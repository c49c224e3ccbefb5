mod progress;
mod word;

pub use progress::{ProgressDocument, QuizResult, QuizResultError};
pub use word::{WordEntry, WordEntryError, WordId};
