#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    InMemoryRepository, ProgressRecord, SlotKey, SlotRepository, Storage, StorageError,
};
pub use sqlite::{SqliteInitError, SqliteRepository, normalize_sqlite_url};
