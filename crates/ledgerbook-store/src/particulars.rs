//! Particular (category) operations.

use chrono::Utc;
use ledgerbook_core::{LedgerId, Particular, ParticularId};

use crate::error::{Result, StoreError};
use crate::store::LedgerStore;

const PARTICULAR_COLUMNS: &str =
    "particular_id, ledger_id, particular_name, created_at, updated_at";

impl LedgerStore {
    /// All particulars of a ledger. An empty list is not an error.
    pub async fn particulars_for_ledger(&self, ledger_id: LedgerId) -> Result<Vec<Particular>> {
        let particulars = sqlx::query_as::<_, Particular>(&format!(
            "SELECT {PARTICULAR_COLUMNS} FROM particulars WHERE ledger_id = ?"
        ))
        .bind(ledger_id)
        .fetch_all(self.pool())
        .await?;

        Ok(particulars)
    }

    /// Create a particular under a ledger, returning the new id.
    pub async fn create_particular(
        &self,
        ledger_id: LedgerId,
        particular_name: &str,
    ) -> Result<ParticularId> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO particulars (ledger_id, particular_name, created_at, updated_at) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(ledger_id)
        .bind(particular_name)
        .bind(now)
        .bind(now)
        .execute(self.pool())
        .await?;

        let particular_id = ParticularId::from_raw(result.last_insert_rowid());
        tracing::info!(%particular_id, %ledger_id, "particular created");
        Ok(particular_id)
    }

    /// Rename a particular.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no particular has this id.
    pub async fn rename_particular(
        &self,
        particular_id: ParticularId,
        particular_name: &str,
    ) -> Result<()> {
        let result = sqlx::query(
            "UPDATE particulars SET particular_name = ?, updated_at = ? WHERE particular_id = ?",
        )
        .bind(particular_name)
        .bind(Utc::now())
        .bind(particular_id)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "particular",
                id: particular_id.as_i64(),
            });
        }

        Ok(())
    }

    /// Delete a particular; its entries cascade through the foreign key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no particular has this id.
    pub async fn delete_particular(&self, particular_id: ParticularId) -> Result<()> {
        let result = sqlx::query("DELETE FROM particulars WHERE particular_id = ?")
            .bind(particular_id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "particular",
                id: particular_id.as_i64(),
            });
        }

        tracing::info!(%particular_id, "particular deleted");
        Ok(())
    }
}
