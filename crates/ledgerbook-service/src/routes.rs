//! Router configuration.
//!
//! One route per store operation, mirroring the mobile client's API
//! surface. Paths are flat and unversioned.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{delete, get, post};
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{entries, health, ledgers, particulars, reports, users};
use crate::state::AppState;

/// Maximum concurrent requests across the API.
const API_MAX_CONCURRENT_REQUESTS: usize = 50;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Users
/// - `POST /login` - Phone-number login, returns user + token
/// - `POST /register` - Create a user
///
/// ## Ledgers
/// - `GET /ledgers/:user_id` - Owned and shared ledgers
/// - `POST /ledgers` - Create a ledger
/// - `PUT /ledgers/:ledger_id` - Rename a ledger
/// - `DELETE /ledgers/:user_id/:ledger_id` - Remove a ledger from a user's view
///
/// ## Particulars
/// - `GET /particulars/:ledger_id`, `POST /particulars`,
///   `PUT /particulars/:particular_id`, `DELETE /particulars/:particular_id`
///
/// ## Entries
/// - `GET /entries/:particular_id`, `POST /entries`,
///   `PUT /entries/:entry_id`, `DELETE /entries/:entry_id`
///
/// ## Reports & sharing
/// - `GET /ledgerSum/:ledger_id` - Entry rows across a ledger
/// - `GET /particularSum/:particular_id` - Entry rows of one particular
/// - `GET /createPDF/:ledger_id` - Date-ordered export rows
/// - `GET /accessKey/:user_id/:ledger_id` - Access-key lookup
/// - `POST /shareLedger` - Redeem an access key
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.cors_origins);
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let state = Arc::new(state);

    Router::new()
        .route("/health", get(health::health))
        // Users
        .route("/login", post(users::login))
        .route("/register", post(users::register))
        // Ledgers. GET takes a user id, PUT a ledger id; the segment is
        // named generically because both live on the same path.
        .route("/ledgers", post(ledgers::create_ledger))
        .route(
            "/ledgers/:id",
            get(ledgers::list_ledgers).put(ledgers::rename_ledger),
        )
        .route("/ledgers/:user_id/:ledger_id", delete(ledgers::delete_ledger))
        // Particulars. Same: GET takes a ledger id, PUT/DELETE a particular id.
        .route("/particulars", post(particulars::create_particular))
        .route(
            "/particulars/:id",
            get(particulars::list_particulars)
                .put(particulars::rename_particular)
                .delete(particulars::delete_particular),
        )
        // Entries. GET takes a particular id, PUT/DELETE an entry id.
        .route("/entries", post(entries::create_entry))
        .route(
            "/entries/:id",
            get(entries::list_entries)
                .put(entries::update_entry)
                .delete(entries::delete_entry),
        )
        // Reports & sharing
        .route("/ledgerSum/:ledger_id", get(reports::ledger_sum))
        .route("/particularSum/:particular_id", get(reports::particular_sum))
        .route("/createPDF/:ledger_id", get(reports::create_pdf))
        .route("/accessKey/:user_id/:ledger_id", get(reports::access_key))
        .route("/shareLedger", post(reports::share_ledger))
        // Global middleware
        .layer(ConcurrencyLimitLayer::new(API_MAX_CONCURRENT_REQUESTS))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
