use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{QuizResultError, WordEntryError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Word(#[from] WordEntryError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    QuizResult(#[from] QuizResultError),
}
