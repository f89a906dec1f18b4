//! Ledger CRUD handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use ledgerbook_core::{LedgerId, LedgerRecord, UserId};

use crate::error::ApiError;
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// Owned and shared ledgers of a user. Empty list, not 404, when there
/// are none.
pub async fn list_ledgers(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<LedgerRecord>>, ApiError> {
    let ledgers = state.store.ledgers_for_user(user_id).await?;
    Ok(Json(ledgers))
}

/// Create-ledger request body.
#[derive(Debug, Deserialize)]
pub struct CreateLedgerRequest {
    /// Owning user.
    pub user_id: Option<UserId>,
    /// Display name.
    pub ledger_name: Option<String>,
}

/// Create-ledger response body.
#[derive(Debug, Serialize)]
pub struct CreateLedgerResponse {
    /// Id of the new ledger.
    pub ledger_id: LedgerId,
    /// Generated sharing key.
    pub access_key: String,
    /// Outcome message.
    pub message: String,
}

/// Create a ledger for a user.
pub async fn create_ledger(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateLedgerRequest>,
) -> Result<(StatusCode, Json<CreateLedgerResponse>), ApiError> {
    let (Some(user_id), Some(ledger_name)) = (body.user_id, body.ledger_name) else {
        return Err(ApiError::BadRequest(
            "User ID and Ledger Name are required".into(),
        ));
    };

    let (ledger_id, access_key) = state.store.create_ledger(user_id, &ledger_name).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLedgerResponse {
            ledger_id,
            access_key,
            message: "Ledger created successfully".into(),
        }),
    ))
}

/// Rename-ledger request body.
#[derive(Debug, Deserialize)]
pub struct RenameLedgerRequest {
    /// New display name.
    pub ledger_name: String,
}

/// Rename a ledger.
pub async fn rename_ledger(
    State(state): State<Arc<AppState>>,
    Path(ledger_id): Path<LedgerId>,
    Json(body): Json<RenameLedgerRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.rename_ledger(ledger_id, &body.ledger_name).await?;
    Ok(Json(MessageResponse::new("Ledger updated successfully")))
}

/// Remove a ledger from one user's view; cascades to particulars only
/// when the last ownership/sharing reference disappears.
pub async fn delete_ledger(
    State(state): State<Arc<AppState>>,
    Path((user_id, ledger_id)): Path<(UserId, LedgerId)>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete_ledger(user_id, ledger_id).await?;
    Ok(Json(MessageResponse::new("Ledger deleted successfully")))
}
