//! Identifier types for ledgerbook.
//!
//! All primary keys are database-assigned `AUTOINCREMENT` integers. The
//! newtypes below keep a user id from ever being passed where a ledger id
//! is expected, while staying transparent for serde (JSON numbers) and
//! sqlx (SQLite `INTEGER`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to define a row-id newtype with standard trait implementations.
///
/// Generates a transparent wrapper around `i64` implementing `Display`,
/// `FromStr` (for path parameters), serde, and sqlx encoding/decoding.
macro_rules! row_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw database row id.
            #[must_use]
            pub const fn from_raw(id: i64) -> Self {
                Self(id)
            }

            /// Return the underlying integer.
            #[must_use]
            pub const fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

row_id_type!(UserId, "A user row identifier.");
row_id_type!(LedgerId, "A ledger row identifier.");
row_id_type!(ParticularId, "A particular (category) row identifier.");
row_id_type!(EntryId, "An entry row identifier.");
