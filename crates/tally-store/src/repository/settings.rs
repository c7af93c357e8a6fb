//! # Settings Repository
//!
//! A small string key-value table for app-level flags. Its main job is
//! the first-run marker: present once the operator has answered the
//! initial sample-data prompt, so the prompt never reappears.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StoreResult;

/// Marker key written after the first-run bootstrap decision.
pub const FIRST_RUN_KEY: &str = "first_time";

/// Repository for the settings collection.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SettingsRepository { pool }
    }

    /// Reads a value, `None` when the key has never been set.
    pub async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM settings WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    /// Writes a value, replacing any previous one.
    pub async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        debug!(key = %key, "Writing setting");

        sqlx::query(
            r#"
            INSERT INTO settings (key, value)
            VALUES (?1, ?2)
            ON CONFLICT (key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Removes a key; removing an absent key is a no-op.
    pub async fn delete(&self, key: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM settings WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};

    async fn test_store() -> Store {
        Store::new(StoreConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn get_set_overwrite_delete() {
        let repo = test_store().await.settings();

        assert_eq!(repo.get("theme").await.unwrap(), None);

        repo.set("theme", "dark").await.unwrap();
        assert_eq!(repo.get("theme").await.unwrap(), Some("dark".to_string()));

        repo.set("theme", "light").await.unwrap();
        assert_eq!(repo.get("theme").await.unwrap(), Some("light".to_string()));

        repo.delete("theme").await.unwrap();
        assert_eq!(repo.get("theme").await.unwrap(), None);
        repo.delete("theme").await.unwrap();
    }

    #[tokio::test]
    async fn first_run_marker_persists() {
        let store = test_store().await;
        let repo = store.settings();

        assert!(repo.get(FIRST_RUN_KEY).await.unwrap().is_none());
        repo.set(FIRST_RUN_KEY, "1").await.unwrap();
        assert!(repo.get(FIRST_RUN_KEY).await.unwrap().is_some());
    }
}
