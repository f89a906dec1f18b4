//! SQLite storage layer for ledgerbook.
//!
//! [`LedgerStore`] wraps a `sqlx::SqlitePool` and exposes one method per
//! API operation. Multi-statement sequences (user registration, ledger
//! creation and deletion, share redemption) run inside explicit
//! transactions so a crash or concurrent interleaving cannot leave
//! orphaned or duplicate rows.
//!
//! # Example
//!
//! ```no_run
//! use ledgerbook_store::LedgerStore;
//!
//! # async fn demo() -> Result<(), ledgerbook_store::StoreError> {
//! let store = LedgerStore::connect("/tmp/ledgerbook.db").await?;
//!
//! let user = store.create_user("Ali", "0345-2057798").await?;
//! let (ledger_id, access_key) = store.create_ledger(user.user_id, "Shop").await?;
//!
//! store.close().await;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entries;
pub mod error;
pub mod ledgers;
pub mod particulars;
pub mod reports;
pub mod store;
pub mod users;

pub use error::{Result, StoreError};
pub use store::LedgerStore;
