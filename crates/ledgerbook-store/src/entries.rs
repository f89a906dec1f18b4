//! Entry operations.

use chrono::Utc;
use ledgerbook_core::{Entry, EntryId, NewEntry, ParticularId};

use crate::error::{Result, StoreError};
use crate::store::LedgerStore;

pub(crate) const ENTRY_COLUMNS: &str =
    "entry_id, particular_id, amount, date, description, type, created_at, updated_at";

impl LedgerStore {
    /// All entries of a particular. An empty list is not an error.
    pub async fn entries_for_particular(&self, particular_id: ParticularId) -> Result<Vec<Entry>> {
        let entries = sqlx::query_as::<_, Entry>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries WHERE particular_id = ?"
        ))
        .bind(particular_id)
        .fetch_all(self.pool())
        .await?;

        Ok(entries)
    }

    /// Create an entry under a particular, returning the new id.
    ///
    /// The foreign key rejects particular ids that don't exist.
    pub async fn create_entry(
        &self,
        particular_id: ParticularId,
        entry: &NewEntry,
    ) -> Result<EntryId> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO entries (particular_id, amount, date, description, type, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(particular_id)
        .bind(entry.amount)
        .bind(entry.date)
        .bind(&entry.description)
        .bind(entry.entry_type)
        .bind(now)
        .bind(now)
        .execute(self.pool())
        .await?;

        let entry_id = EntryId::from_raw(result.last_insert_rowid());
        tracing::info!(%entry_id, %particular_id, "entry created");
        Ok(entry_id)
    }

    /// Overwrite an entry's amount, date, description, and type.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no entry has this id.
    pub async fn update_entry(&self, entry_id: EntryId, entry: &NewEntry) -> Result<()> {
        let result = sqlx::query(
            "UPDATE entries SET amount = ?, date = ?, description = ?, type = ?, updated_at = ? \
             WHERE entry_id = ?",
        )
        .bind(entry.amount)
        .bind(entry.date)
        .bind(&entry.description)
        .bind(entry.entry_type)
        .bind(Utc::now())
        .bind(entry_id)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "entry",
                id: entry_id.as_i64(),
            });
        }

        Ok(())
    }

    /// Delete an entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no entry has this id.
    pub async fn delete_entry(&self, entry_id: EntryId) -> Result<()> {
        let result = sqlx::query("DELETE FROM entries WHERE entry_id = ?")
            .bind(entry_id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "entry",
                id: entry_id.as_i64(),
            });
        }

        tracing::info!(%entry_id, "entry deleted");
        Ok(())
    }
}
