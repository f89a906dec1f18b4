//! Aggregate reads and access-key sharing.

use chrono::Utc;
use ledgerbook_core::{AccessKeyRow, Entry, ExportRow, LedgerId, UserId};

use crate::entries::ENTRY_COLUMNS;
use crate::error::Result;
use crate::store::LedgerStore;

impl LedgerStore {
    /// All entries under a ledger, across its particulars.
    ///
    /// Backs the ledger-sum endpoint; the client does the arithmetic, the
    /// service returns the rows.
    pub async fn entries_for_ledger(&self, ledger_id: LedgerId) -> Result<Vec<Entry>> {
        let entries = sqlx::query_as::<_, Entry>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries \
             WHERE particular_id IN ( \
                 SELECT particular_id FROM particulars WHERE ledger_id = ? \
             )"
        ))
        .bind(ledger_id)
        .fetch_all(self.pool())
        .await?;

        Ok(entries)
    }

    /// Entries joined with their particular's name, ordered ascending by
    /// date, for the PDF/account-book export.
    pub async fn export_rows(&self, ledger_id: LedgerId) -> Result<Vec<ExportRow>> {
        let rows = sqlx::query_as::<_, ExportRow>(
            "SELECT particular_name, description, date, amount, type \
             FROM entries \
             JOIN particulars ON entries.particular_id = particulars.particular_id \
             WHERE particulars.ledger_id = ? \
             ORDER BY date ASC",
        )
        .bind(ledger_id)
        .fetch_all(self.pool())
        .await?;

        Ok(rows)
    }

    /// Access-key rows for a (user, ledger) pair. The owner's row is
    /// written at ledger creation, recipients' rows at share redemption.
    pub async fn access_keys_for(
        &self,
        user_id: UserId,
        ledger_id: LedgerId,
    ) -> Result<Vec<AccessKeyRow>> {
        let rows = sqlx::query_as::<_, AccessKeyRow>(
            "SELECT ledger_id, user_id, access_key FROM access_key \
             WHERE user_id = ? AND ledger_id = ?",
        )
        .bind(user_id)
        .bind(ledger_id)
        .fetch_all(self.pool())
        .await?;

        Ok(rows)
    }

    /// Redeem an access key for a recipient: copy the matching ledger row
    /// into `ledger_sharing` and record the recipient's access-key row.
    ///
    /// Deliberately no existence check: a key matching zero ledgers
    /// silently copies zero rows and returns 0. Redeeming the same key
    /// twice is a no-op rather than an error.
    pub async fn share_ledger(&self, user_id: UserId, access_key: &str) -> Result<u64> {
        let now = Utc::now();
        let mut tx = self.pool().begin().await?;

        let result = sqlx::query(
            "INSERT OR IGNORE INTO ledger_sharing \
                 (ledger_id, user_id, ledger_name, access_key, created_at, updated_at) \
             SELECT ledger_id, ?, ledger_name, access_key, created_at, ? \
             FROM ledgers WHERE access_key = ?",
        )
        .bind(user_id)
        .bind(now)
        .bind(access_key)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT OR IGNORE INTO access_key (ledger_id, user_id, access_key, created_at) \
             SELECT ledger_id, ?, access_key, ? FROM ledgers WHERE access_key = ?",
        )
        .bind(user_id)
        .bind(now)
        .bind(access_key)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let copied = result.rows_affected();
        tracing::info!(%user_id, copied, "access key redeemed");
        Ok(copied)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ledgerbook_core::{EntryType, NewEntry};

    use crate::store::test_util::test_store;

    fn entry(amount: f64, date: &str, entry_type: EntryType) -> NewEntry {
        NewEntry {
            amount,
            date: date.parse::<NaiveDate>().unwrap(),
            description: format!("entry on {date}"),
            entry_type,
        }
    }

    #[tokio::test]
    async fn ledger_entries_span_particulars() {
        let (store, _dir) = test_store().await;
        let user = store.create_user("Ali", "0303-0000001").await.unwrap();
        let (ledger_id, _) = store.create_ledger(user.user_id, "Shop").await.unwrap();
        let food = store.create_particular(ledger_id, "Food").await.unwrap();
        let rent = store.create_particular(ledger_id, "Rent").await.unwrap();

        store.create_entry(food, &entry(10.0, "2024-01-05", EntryType::Debit)).await.unwrap();
        store.create_entry(rent, &entry(900.0, "2024-01-01", EntryType::Debit)).await.unwrap();

        let entries = store.entries_for_ledger(ledger_id).await.unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn export_rows_sorted_ascending_by_date() {
        let (store, _dir) = test_store().await;
        let user = store.create_user("Ali", "0303-0000002").await.unwrap();
        let (ledger_id, _) = store.create_ledger(user.user_id, "Shop").await.unwrap();
        let p = store.create_particular(ledger_id, "Misc").await.unwrap();

        store.create_entry(p, &entry(3.0, "2024-03-03", EntryType::Debit)).await.unwrap();
        store.create_entry(p, &entry(1.0, "2024-01-01", EntryType::Credit)).await.unwrap();
        store.create_entry(p, &entry(2.0, "2024-02-02", EntryType::Debit)).await.unwrap();

        let rows = store.export_rows(ledger_id).await.unwrap();
        let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(rows[0].particular_name, "Misc");
    }

    #[tokio::test]
    async fn owner_gets_access_key_row_on_creation() {
        let (store, _dir) = test_store().await;
        let user = store.create_user("Ali", "0303-0000003").await.unwrap();
        let (ledger_id, key) = store.create_ledger(user.user_id, "Shop").await.unwrap();

        let rows = store.access_keys_for(user.user_id, ledger_id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].access_key, key);
    }

    #[tokio::test]
    async fn share_copies_ledger_and_key_for_recipient() {
        let (store, _dir) = test_store().await;
        let owner = store.create_user("Owner", "0303-0000004").await.unwrap();
        let friend = store.create_user("Friend", "0303-0000005").await.unwrap();
        let (ledger_id, key) = store.create_ledger(owner.user_id, "Joint").await.unwrap();

        let copied = store.share_ledger(friend.user_id, &key).await.unwrap();
        assert_eq!(copied, 1);

        let ledgers = store.ledgers_for_user(friend.user_id).await.unwrap();
        assert_eq!(ledgers.len(), 1);
        assert_eq!(ledgers[0].ledger_id, ledger_id);

        let rows = store.access_keys_for(friend.user_id, ledger_id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].access_key, key);

        // Redeeming again is a silent no-op.
        let copied = store.share_ledger(friend.user_id, &key).await.unwrap();
        assert_eq!(copied, 0);
    }

    #[tokio::test]
    async fn unknown_access_key_copies_nothing() {
        let (store, _dir) = test_store().await;
        let user = store.create_user("Ali", "0303-0000006").await.unwrap();
        let copied = store.share_ledger(user.user_id, "NoSuchKey1").await.unwrap();
        assert_eq!(copied, 0);
        assert!(store.ledgers_for_user(user.user_id).await.unwrap().is_empty());
    }
}
