//! Entry CRUD handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use ledgerbook_core::{Entry, EntryId, NewEntry, ParticularId};

use crate::error::ApiError;
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// All entries of a particular.
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    Path(particular_id): Path<ParticularId>,
) -> Result<Json<Vec<Entry>>, ApiError> {
    let entries = state.store.entries_for_particular(particular_id).await?;
    Ok(Json(entries))
}

/// Create-entry request body: the entry fields plus the owning particular.
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    /// Owning particular.
    pub particular_id: ParticularId,
    /// Entry fields.
    #[serde(flatten)]
    pub entry: NewEntry,
}

/// Create-entry response body.
#[derive(Debug, Serialize)]
pub struct CreateEntryResponse {
    /// Id of the new entry.
    pub entry_id: EntryId,
    /// Outcome message.
    pub message: String,
}

/// Create an entry under a particular.
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<CreateEntryResponse>), ApiError> {
    let entry_id = state.store.create_entry(body.particular_id, &body.entry).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateEntryResponse {
            entry_id,
            message: "Entry created successfully".into(),
        }),
    ))
}

/// Overwrite an entry's fields.
pub async fn update_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<EntryId>,
    Json(body): Json<NewEntry>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.update_entry(entry_id, &body).await?;
    Ok(Json(MessageResponse::new("Entry updated successfully")))
}

/// Delete an entry.
pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<EntryId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete_entry(entry_id).await?;
    Ok(Json(MessageResponse::new("Entry deleted successfully")))
}
