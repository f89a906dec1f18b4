//! Ledgerbook HTTP API Service.
//!
//! This crate provides the HTTP façade over the ledgerbook store:
//!
//! - Phone-number login and registration (JWT issuance)
//! - Ledger, particular, and entry CRUD
//! - Aggregate reads (sums, account-book export, access keys)
//! - Access-key sharing
//!
//! Each endpoint marshals its parameters into exactly one store call and
//! serializes the result (or a typed error) as JSON.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Axum handlers all return Result, and several are async only to satisfy
// the routing signature.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unused_async)]

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
