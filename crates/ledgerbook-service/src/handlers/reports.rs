//! Aggregate reads and access-key sharing handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use ledgerbook_core::{AccessKeyRow, Entry, ExportRow, LedgerId, ParticularId, UserId};

use crate::error::ApiError;
use crate::state::AppState;

/// Entry rows across a whole ledger. The client sums them; the service
/// only returns the rows.
pub async fn ledger_sum(
    State(state): State<Arc<AppState>>,
    Path(ledger_id): Path<LedgerId>,
) -> Result<Json<Vec<Entry>>, ApiError> {
    let entries = state.store.entries_for_ledger(ledger_id).await?;
    Ok(Json(entries))
}

/// Entry rows of one particular.
pub async fn particular_sum(
    State(state): State<Arc<AppState>>,
    Path(particular_id): Path<ParticularId>,
) -> Result<Json<Vec<Entry>>, ApiError> {
    let entries = state.store.entries_for_particular(particular_id).await?;
    Ok(Json(entries))
}

/// Date-ordered rows for the PDF/account-book export.
pub async fn create_pdf(
    State(state): State<Arc<AppState>>,
    Path(ledger_id): Path<LedgerId>,
) -> Result<Json<Vec<ExportRow>>, ApiError> {
    let rows = state.store.export_rows(ledger_id).await?;
    Ok(Json(rows))
}

/// Access-key rows for a (user, ledger) pair.
pub async fn access_key(
    State(state): State<Arc<AppState>>,
    Path((user_id, ledger_id)): Path<(UserId, LedgerId)>,
) -> Result<Json<Vec<AccessKeyRow>>, ApiError> {
    let rows = state.store.access_keys_for(user_id, ledger_id).await?;
    Ok(Json(rows))
}

/// Share-ledger request body.
#[derive(Debug, Deserialize)]
pub struct ShareLedgerRequest {
    /// Recipient user.
    pub user_id: Option<UserId>,
    /// The 10-character access key being redeemed.
    pub access_key: Option<String>,
}

/// Share-ledger response body.
#[derive(Debug, Serialize)]
pub struct ShareLedgerResponse {
    /// Outcome message.
    pub message: String,
    /// How many ledger rows were copied (0 when the key matched nothing
    /// or was already redeemed).
    pub copied: u64,
}

/// Redeem an access key, copying the matching ledger into the recipient's
/// shared view. A key matching nothing is a silent no-op, not an error.
pub async fn share_ledger(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ShareLedgerRequest>,
) -> Result<(StatusCode, Json<ShareLedgerResponse>), ApiError> {
    let (Some(user_id), Some(access_key)) = (body.user_id, body.access_key) else {
        return Err(ApiError::BadRequest(
            "user_id and access_key are required".into(),
        ));
    };

    let copied = state.store.share_ledger(user_id, &access_key).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShareLedgerResponse {
            message: "Ledger copied successfully".into(),
            copied,
        }),
    ))
}
