#![forbid(unsafe_code)]

pub mod catalog;
pub mod daily;
pub mod error;
pub mod model;
pub mod navigator;
pub mod time;

pub use catalog::{Catalog, CatalogError};
pub use error::Error;
pub use model::{ProgressDocument, QuizResult, QuizResultError, WordEntry, WordEntryError, WordId};
pub use time::Clock;
