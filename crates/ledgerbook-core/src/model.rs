//! Domain row types.
//!
//! These structs mirror the relational schema one-to-one and double as the
//! JSON response shapes: every field name matches its column, so a fetched
//! row serializes straight into the API body.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{EntryId, LedgerId, ParticularId, UserId};

/// A registered user, identified by mobile phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Row id.
    pub user_id: UserId,
    /// Display name.
    pub user_name: String,
    /// Unique phone number used for login.
    pub mobile_phone_number: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A ledger row as seen by a user.
///
/// The same shape covers both rows of the `ledgers` table (owned ledgers)
/// and rows of `ledger_sharing` (ledgers shared to this user); the two are
/// UNIONed when listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct LedgerRecord {
    /// Row id of the ledger.
    pub ledger_id: LedgerId,
    /// Owner (or, for shared rows, recipient) user id.
    pub user_id: UserId,
    /// Display name.
    pub ledger_name: String,
    /// The sharing access key.
    pub access_key: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A particular: a category/sub-account within a ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Particular {
    /// Row id.
    pub particular_id: ParticularId,
    /// Owning ledger.
    pub ledger_id: LedgerId,
    /// Display name.
    pub particular_name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Direction of a monetary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum EntryType {
    /// Money in.
    Credit,
    /// Money out.
    Debit,
}

/// A single dated monetary transaction under a particular.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Entry {
    /// Row id.
    pub entry_id: EntryId,
    /// Owning particular.
    pub particular_id: ParticularId,
    /// Monetary amount.
    pub amount: f64,
    /// Date the transaction happened.
    pub date: NaiveDate,
    /// Free-form description.
    pub description: String,
    /// Credit or debit.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub entry_type: EntryType,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Field set for creating or updating an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    /// Monetary amount.
    pub amount: f64,
    /// Date the transaction happened.
    pub date: NaiveDate,
    /// Free-form description.
    pub description: String,
    /// Credit or debit.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

/// One row of the PDF/account-book export: an entry joined with the name
/// of its particular, ordered by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ExportRow {
    /// Name of the particular the entry belongs to.
    pub particular_name: String,
    /// Entry description.
    pub description: String,
    /// Entry date.
    pub date: NaiveDate,
    /// Entry amount.
    pub amount: f64,
    /// Credit or debit.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub entry_type: EntryType,
}

/// One row of the access-key lookup table: which key lets `user_id` open
/// `ledger_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AccessKeyRow {
    /// The ledger the key opens.
    pub ledger_id: LedgerId,
    /// The user holding the key.
    pub user_id: UserId,
    /// The 10-character access key.
    pub access_key: String,
}
