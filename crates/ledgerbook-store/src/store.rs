//! Connection pool lifecycle.

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::SqlitePool;

use crate::error::Result;

/// Maximum connections in the pool. A handful is plenty for SQLite; writes
/// serialize on the database lock anyway.
const MAX_CONNECTIONS: u32 = 5;

/// How long an acquire may wait before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Handle to the ledgerbook database.
///
/// Cheap to clone; all clones share the same pool. Create one at startup
/// with [`LedgerStore::connect`] and pass it into the handlers, call
/// [`LedgerStore::close`] on shutdown.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    pool: SqlitePool,
}

impl LedgerStore {
    /// Open (creating if missing) the database at `path`, run pending
    /// migrations, and return a ready store.
    ///
    /// WAL journaling keeps readers from blocking writers; foreign keys
    /// are switched on so entry rows cascade with their particular.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be created or a migration
    /// fails.
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await?;

        tracing::info!(path = %path.as_ref().display(), "database pool created");

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("migrations complete");

        Ok(Self { pool })
    }

    /// The underlying pool, for queries the typed methods don't cover.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the pool. Subsequent operations fail.
    pub async fn close(&self) {
        tracing::info!("closing database pool");
        self.pool.close().await;
    }

    /// Whether the database answers a trivial query.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}


#[cfg(test)]
mod tests {
    use super::test_util::test_store;

    #[tokio::test]
    async fn connect_runs_migrations_and_answers_queries() {
        let (store, _dir) = test_store().await;
        assert!(store.health_check().await);
    }

    #[tokio::test]
    async fn close_makes_queries_fail() {
        let (store, _dir) = test_store().await;
        store.close().await;
        assert!(!store.health_check().await);
    }
}
