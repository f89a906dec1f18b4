//! User operations.

use chrono::Utc;
use ledgerbook_core::{User, UserId};

use crate::error::{Result, StoreError};
use crate::store::LedgerStore;

const USER_COLUMNS: &str = "user_id, user_name, mobile_phone_number, created_at, updated_at";

impl LedgerStore {
    /// Fetch a single user by id. A missing row is logged and reported as
    /// `Ok(None)`, not an error.
    pub async fn get_user(&self, user_id: UserId) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = ?"
        ))
        .bind(user_id)
        .fetch_optional(self.pool())
        .await?;

        if user.is_none() {
            tracing::debug!(%user_id, "user not found");
        }

        Ok(user)
    }

    /// Look up a user by phone number. Backs login; an unknown number is a
    /// soft failure surfaced as `Ok(None)`.
    pub async fn find_user_by_phone(&self, mobile_phone_number: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE mobile_phone_number = ?"
        ))
        .bind(mobile_phone_number)
        .fetch_optional(self.pool())
        .await?;

        if user.is_none() {
            tracing::debug!(mobile_phone_number, "no user with this phone number");
        }

        Ok(user)
    }

    /// Register a new user.
    ///
    /// Pre-checks phone uniqueness, inserts, and re-fetches the created
    /// row, all inside one transaction so two concurrent registrations of
    /// the same number cannot both pass the check.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PhoneNumberTaken`] if the number is already
    /// registered.
    pub async fn create_user(&self, user_name: &str, mobile_phone_number: &str) -> Result<User> {
        let mut tx = self.pool().begin().await?;

        let existing: Option<(i64,)> =
            sqlx::query_as("SELECT user_id FROM users WHERE mobile_phone_number = ?")
                .bind(mobile_phone_number)
                .fetch_optional(&mut *tx)
                .await?;

        if existing.is_some() {
            return Err(StoreError::PhoneNumberTaken);
        }

        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO users (user_name, mobile_phone_number, created_at, updated_at) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(user_name)
        .bind(mobile_phone_number)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let user_id = result.last_insert_rowid();
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = ?"
        ))
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(%user_id, "user created");
        Ok(user)
    }
}
