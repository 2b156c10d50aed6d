//! Shared error types for the services crate.

use thiserror::Error;

use pylearn_core::model::{ActivityId, LessonId};
use storage::sqlite::SqliteInitError;

/// Errors emitted by `AssistantService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssistantError {
    #[error("question is empty")]
    EmptyQuestion,
}

/// Errors emitted by `PracticeService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PracticeError {
    #[error("lesson {0} not found")]
    LessonNotFound(LessonId),
    #[error("activity {0} not found")]
    ActivityNotFound(ActivityId),
}

/// Errors emitted while reading `AppConfig` from the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid assistant delay {raw:?}: expected milliseconds")]
    InvalidAssistantDelay { raw: String },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Catalog(#[from] pylearn_core::Error),
}
