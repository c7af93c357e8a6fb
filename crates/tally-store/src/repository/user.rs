//! # User Repository
//!
//! Database operations for cashier accounts and credential checks.
//!
//! Passwords never touch the database in the clear: inserts hash the
//! draft password with Argon2id and a fresh salt, and login verifies
//! the candidate against the stored PHC string.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::repository::generate_id;
use tally_core::types::{User, UserDraft};

/// Repository for the users collection.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Inserts a new account, hashing the draft password.
    pub async fn insert(&self, draft: &UserDraft) -> StoreResult<User> {
        let id = generate_id();
        let password_hash = hash_password(&draft.password)?;

        debug!(id = %id, username = %draft.username, "Inserting user");

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, password_hash, role)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, username, password_hash, role
            "#,
        )
        .bind(&id)
        .bind(&draft.username)
        .bind(&password_hash)
        .bind(&draft.role)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Looks up an account by username and verifies the password.
    ///
    /// Returns `None` on an unknown username or a failed verification;
    /// the two cases are indistinguishable to the caller.
    pub async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, role
            FROM users
            WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        let Some(user) = user else {
            debug!(username = %username, "Login: unknown username");
            return Ok(None);
        };

        if verify_password(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            debug!(username = %username, "Login: password mismatch");
            Ok(None)
        }
    }

    /// Returns all accounts, username-ordered.
    pub async fn list_all(&self) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, role
            FROM users
            ORDER BY username ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Counts accounts.
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Hashes a password into a PHC string with a per-password salt.
fn hash_password(password: &str) -> StoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| StoreError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verifies a candidate password against a stored PHC string.
fn verify_password(password: &str, stored_hash: &str) -> StoreResult<bool> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| StoreError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
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

    fn cashier() -> UserDraft {
        UserDraft {
            username: "kasir".to_string(),
            password: "kasir123".to_string(),
            role: Some("cashier".to_string()),
        }
    }

    #[tokio::test]
    async fn password_is_stored_hashed() {
        let repo = test_store().await.users();
        let user = repo.insert(&cashier()).await.unwrap();

        assert_ne!(user.password_hash, "kasir123");
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn matching_credentials_find_the_user() {
        let repo = test_store().await.users();
        repo.insert(&cashier()).await.unwrap();

        let found = repo.find_by_credentials("kasir", "kasir123").await.unwrap();
        assert_eq!(
            found.and_then(|u| u.role),
            Some("cashier".to_string())
        );
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_both_miss() {
        let repo = test_store().await.users();
        repo.insert(&cashier()).await.unwrap();

        assert!(repo
            .find_by_credentials("kasir", "wrong")
            .await
            .unwrap()
            .is_none());
        assert!(repo
            .find_by_credentials("nobody", "kasir123")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn duplicate_username_is_a_unique_violation() {
        let repo = test_store().await.users();
        repo.insert(&cashier()).await.unwrap();

        let err = repo.insert(&cashier()).await.unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation { .. }));
    }
}
