//! Core types for the ledgerbook service.
//!
//! This crate defines the domain model shared by the store and the HTTP
//! service:
//!
//! - Strongly-typed row identifiers ([`UserId`], [`LedgerId`],
//!   [`ParticularId`], [`EntryId`])
//! - Row types ([`User`], [`LedgerRecord`], [`Particular`], [`Entry`], ...)
//! - Access-key generation for ledger sharing
//!
//! No I/O happens here; the store crate owns all database operations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod access_key;
pub mod ids;
pub mod model;

pub use access_key::generate_access_key;
pub use ids::{EntryId, LedgerId, ParticularId, UserId};
pub use model::{AccessKeyRow, Entry, EntryType, ExportRow, LedgerRecord, NewEntry, Particular, User};
