use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{SlotKey, SlotRepository, StorageError};

use super::SqliteRepository;

#[async_trait]
impl SlotRepository for SqliteRepository {
    async fn read_slot(&self, key: SlotKey) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM kv_slots WHERE key = ?1")
            .bind(key.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let value: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(value))
    }

    async fn write_slot(&self, key: SlotKey, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO kv_slots (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key.as_str())
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
