use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{ActivityError, ExerciseError, LessonError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Exercise(#[from] ExerciseError),
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Activity(#[from] ActivityError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
