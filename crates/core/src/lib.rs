#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod filter;
pub mod grader;
pub mod model;
pub mod progress;
pub mod session;

pub use catalog::{Catalog, CatalogError};
pub use error::Error;
pub use progress::{CompletionOutcome, ProgressStore};
