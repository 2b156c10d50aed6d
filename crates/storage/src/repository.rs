use async_trait::async_trait;
use pylearn_core::model::{Achievement, LessonId, UserProgress};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Named durable text slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKey {
    Progress,
    Theme,
}

impl SlotKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SlotKey::Progress => "python-learning-progress",
            SlotKey::Theme => "python-learning-theme",
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted shape of the progress slot.
///
/// Missing fields decode as their defaults. Achievement names stay plain
/// strings until `into_progress` resolves them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressRecord {
    pub completed_lessons: Vec<u32>,
    pub total_score: u64,
    pub current_streak: u32,
    pub achievements: Vec<String>,
}

impl ProgressRecord {
    #[must_use]
    pub fn from_progress(progress: &UserProgress) -> Self {
        Self {
            completed_lessons: progress
                .completed_lessons()
                .iter()
                .map(LessonId::value)
                .collect(),
            total_score: progress.total_score(),
            current_streak: progress.current_streak(),
            achievements: progress
                .achievements()
                .iter()
                .map(|a| a.name().to_owned())
                .collect(),
        }
    }

    /// Convert the record back into domain progress.
    ///
    /// Achievement names this build does not know are dropped.
    #[must_use]
    pub fn into_progress(self) -> UserProgress {
        let achievements = self.achievements.iter().filter_map(|name| {
            let achievement = Achievement::from_name(name);
            if achievement.is_none() {
                tracing::warn!(achievement = %name, "skipping unknown achievement in progress slot");
            }
            achievement
        });
        UserProgress::from_persisted(
            self.completed_lessons.iter().copied().map(LessonId::new),
            self.total_score,
            self.current_streak,
            achievements,
        )
    }

    /// Encode as the slot's JSON text.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(self).map_err(|err| StorageError::Serialization(err.to_string()))
    }

    /// Decode the slot's JSON text.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for malformed JSON.
    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))
    }
}

/// Repository contract for the named text slots.
#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Read a slot's current value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read. A slot that was
    /// never written is `Ok(None)`.
    async fn read_slot(&self, key: SlotKey) -> Result<Option<String>, StorageError>;

    /// Replace a slot's value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn write_slot(&self, key: SlotKey, value: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    slots: Arc<Mutex<HashMap<SlotKey, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl SlotRepository for InMemoryRepository {
    async fn read_slot(&self, key: SlotKey) -> Result<Option<String>, StorageError> {
        let guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&key).cloned())
    }

    async fn write_slot(&self, key: SlotKey, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key, value.to_owned());
        Ok(())
    }
}

/// Slot repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub slots: Arc<dyn SlotRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let slots: Arc<dyn SlotRepository> = Arc::new(InMemoryRepository::new());
        Self { slots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_keys_match_stored_names() {
        assert_eq!(SlotKey::Progress.as_str(), "python-learning-progress");
        assert_eq!(SlotKey::Theme.to_string(), "python-learning-theme");
    }

    #[test]
    fn record_uses_camel_case_keys() {
        let progress = UserProgress::from_persisted(
            [LessonId::new(2), LessonId::new(1)],
            20,
            2,
            [Achievement::FirstSteps],
        );
        let json = ProgressRecord::from_progress(&progress).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"completedLessons":[2,1],"totalScore":20,"currentStreak":2,"achievements":["First Steps"]}"#
        );
    }

    #[test]
    fn record_tolerates_missing_fields_and_unknown_names() {
        let record =
            ProgressRecord::from_json(r#"{"completedLessons":[4,0,4],"achievements":["Speed Demon","Python Explorer"]}"#)
                .unwrap();
        let progress = record.into_progress();
        assert_eq!(progress.completed_lessons(), [LessonId::new(4)]);
        assert_eq!(progress.total_score(), 0);
        assert_eq!(progress.current_streak(), 0);
        assert_eq!(progress.achievements(), [Achievement::PythonExplorer]);
    }

    #[test]
    fn malformed_record_is_a_serialization_error() {
        let err = ProgressRecord::from_json("{not json").unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
        assert!(ProgressRecord::from_json("null").is_err());
    }

    #[tokio::test]
    async fn in_memory_slots_round_trip() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.read_slot(SlotKey::Theme).await.unwrap(), None);

        repo.write_slot(SlotKey::Theme, "dark").await.unwrap();
        repo.write_slot(SlotKey::Theme, "light").await.unwrap();
        assert_eq!(
            repo.read_slot(SlotKey::Theme).await.unwrap().as_deref(),
            Some("light")
        );
        assert_eq!(repo.read_slot(SlotKey::Progress).await.unwrap(), None);
    }
}
