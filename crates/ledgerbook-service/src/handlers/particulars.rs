//! Particular CRUD handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use ledgerbook_core::{LedgerId, Particular, ParticularId};

use crate::error::ApiError;
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// All particulars of a ledger.
pub async fn list_particulars(
    State(state): State<Arc<AppState>>,
    Path(ledger_id): Path<LedgerId>,
) -> Result<Json<Vec<Particular>>, ApiError> {
    let particulars = state.store.particulars_for_ledger(ledger_id).await?;
    Ok(Json(particulars))
}

/// Create-particular request body.
#[derive(Debug, Deserialize)]
pub struct CreateParticularRequest {
    /// Owning ledger.
    pub ledger_id: Option<LedgerId>,
    /// Display name.
    pub particular_name: Option<String>,
}

/// Create-particular response body.
#[derive(Debug, Serialize)]
pub struct CreateParticularResponse {
    /// Id of the new particular.
    pub particular_id: ParticularId,
    /// Outcome message.
    pub message: String,
}

/// Create a particular under a ledger.
pub async fn create_particular(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateParticularRequest>,
) -> Result<(StatusCode, Json<CreateParticularResponse>), ApiError> {
    let (Some(ledger_id), Some(particular_name)) = (body.ledger_id, body.particular_name) else {
        return Err(ApiError::BadRequest(
            "Ledger ID and Particular Name are required".into(),
        ));
    };

    let particular_id = state
        .store
        .create_particular(ledger_id, &particular_name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateParticularResponse {
            particular_id,
            message: "Particular created successfully".into(),
        }),
    ))
}

/// Rename-particular request body.
#[derive(Debug, Deserialize)]
pub struct RenameParticularRequest {
    /// New display name.
    pub particular_name: String,
}

/// Rename a particular.
pub async fn rename_particular(
    State(state): State<Arc<AppState>>,
    Path(particular_id): Path<ParticularId>,
    Json(body): Json<RenameParticularRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .store
        .rename_particular(particular_id, &body.particular_name)
        .await?;
    Ok(Json(MessageResponse::new("Particular updated successfully")))
}

/// Delete a particular and (via cascade) its entries.
pub async fn delete_particular(
    State(state): State<Arc<AppState>>,
    Path(particular_id): Path<ParticularId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete_particular(particular_id).await?;
    Ok(Json(MessageResponse::new("Particular deleted successfully")))
}
