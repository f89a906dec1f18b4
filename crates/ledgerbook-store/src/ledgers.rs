//! Ledger operations: listing, creation, rename, and the reference-counted
//! delete that backs sharing.

use chrono::Utc;
use ledgerbook_core::{generate_access_key, LedgerId, LedgerRecord, UserId};

use crate::error::{Result, StoreError};
use crate::store::LedgerStore;

const LEDGER_COLUMNS: &str = "ledger_id, user_id, ledger_name, access_key, created_at, updated_at";

impl LedgerStore {
    /// All ledgers a user can see: owned rows unioned with rows shared to
    /// them. An empty list is not an error.
    pub async fn ledgers_for_user(&self, user_id: UserId) -> Result<Vec<LedgerRecord>> {
        let ledgers = sqlx::query_as::<_, LedgerRecord>(&format!(
            "SELECT {LEDGER_COLUMNS} FROM ledgers WHERE user_id = ? \
             UNION \
             SELECT {LEDGER_COLUMNS} FROM ledger_sharing WHERE user_id = ?"
        ))
        .bind(user_id)
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;

        Ok(ledgers)
    }

    /// Create a ledger for a user, generating its access key.
    ///
    /// The ledger row and the owner's `access_key` lookup row are written
    /// in one transaction. Returns the new id and the generated key.
    pub async fn create_ledger(
        &self,
        user_id: UserId,
        ledger_name: &str,
    ) -> Result<(LedgerId, String)> {
        let access_key = generate_access_key();
        let now = Utc::now();

        let mut tx = self.pool().begin().await?;

        let result = sqlx::query(
            "INSERT INTO ledgers (user_id, ledger_name, access_key, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(ledger_name)
        .bind(&access_key)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let ledger_id = LedgerId::from_raw(result.last_insert_rowid());

        sqlx::query(
            "INSERT INTO access_key (ledger_id, user_id, access_key, created_at) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(ledger_id)
        .bind(user_id)
        .bind(&access_key)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(%ledger_id, %user_id, "ledger created");
        Ok((ledger_id, access_key))
    }

    /// Rename a ledger.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no ledger has this id.
    pub async fn rename_ledger(&self, ledger_id: LedgerId, ledger_name: &str) -> Result<()> {
        let result = sqlx::query(
            "UPDATE ledgers SET ledger_name = ?, updated_at = ? WHERE ledger_id = ?",
        )
        .bind(ledger_name)
        .bind(Utc::now())
        .bind(ledger_id)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "ledger",
                id: ledger_id.as_i64(),
            });
        }

        Ok(())
    }

    /// Remove a ledger from one user's view, cascading to its particulars
    /// only when nobody references the ledger any more.
    ///
    /// In one transaction: deletes the ownership row, the sharing row, and
    /// the access-key row for this (user, ledger) pair; then, if neither
    /// `ledgers` nor `ledger_sharing` still references the ledger id, its
    /// particulars are deleted (entries cascade through the foreign key).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the pair matched neither an
    /// ownership nor a sharing row.
    pub async fn delete_ledger(&self, user_id: UserId, ledger_id: LedgerId) -> Result<()> {
        let mut tx = self.pool().begin().await?;

        let owned = sqlx::query("DELETE FROM ledgers WHERE user_id = ? AND ledger_id = ?")
            .bind(user_id)
            .bind(ledger_id)
            .execute(&mut *tx)
            .await?;

        let shared = sqlx::query("DELETE FROM ledger_sharing WHERE user_id = ? AND ledger_id = ?")
            .bind(user_id)
            .bind(ledger_id)
            .execute(&mut *tx)
            .await?;

        if owned.rows_affected() == 0 && shared.rows_affected() == 0 {
            tracing::debug!(%ledger_id, %user_id, "ledger not found for delete");
            return Err(StoreError::NotFound {
                entity: "ledger",
                id: ledger_id.as_i64(),
            });
        }

        sqlx::query("DELETE FROM access_key WHERE user_id = ? AND ledger_id = ?")
            .bind(user_id)
            .bind(ledger_id)
            .execute(&mut *tx)
            .await?;

        let (remaining,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM ( \
                 SELECT ledger_id FROM ledgers WHERE ledger_id = ? \
                 UNION \
                 SELECT ledger_id FROM ledger_sharing WHERE ledger_id = ? \
             )",
        )
        .bind(ledger_id)
        .bind(ledger_id)
        .fetch_one(&mut *tx)
        .await?;

        if remaining == 0 {
            let cleaned = sqlx::query("DELETE FROM particulars WHERE ledger_id = ?")
                .bind(ledger_id)
                .execute(&mut *tx)
                .await?;
            tracing::info!(
                %ledger_id,
                particulars = cleaned.rows_affected(),
                "last reference removed, particulars deleted"
            );
        }

        tx.commit().await?;

        tracing::info!(%ledger_id, %user_id, "ledger deleted");
        Ok(())
    }
}
