//! Login and registration handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use ledgerbook_core::User;

use crate::auth::issue_token;
use crate::error::ApiError;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Phone number to authenticate.
    pub mobile_phone_number: Option<String>,
}

/// Login response body.
///
/// An unknown phone number is a soft failure: HTTP 200 with `user` and
/// `token` null and `error` set, which is what the mobile client expects.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// The authenticated user, if found.
    pub user: Option<User>,
    /// Signed bearer token, if authentication succeeded.
    pub token: Option<String>,
    /// Soft-failure message ("User not found").
    pub error: Option<String>,
}

/// Authenticate by phone number and issue a login token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let phone = body
        .mobile_phone_number
        .ok_or_else(|| ApiError::BadRequest("mobile_phone_number is required".into()))?;

    match state.store.find_user_by_phone(&phone).await? {
        Some(user) => {
            let token = issue_token(&user, &state.config.token_secret)?;
            tracing::info!(user_id = %user.user_id, "login succeeded");
            Ok(Json(LoginResponse {
                user: Some(user),
                token: Some(token),
                error: None,
            }))
        }
        None => {
            tracing::info!("login attempt for unknown phone number");
            Ok(Json(LoginResponse {
                user: None,
                token: None,
                error: Some("User not found".into()),
            }))
        }
    }
}

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    pub user_name: Option<String>,
    /// Unique phone number.
    pub mobile_phone_number: Option<String>,
}

/// Registration response body.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// The created user row.
    pub user: User,
    /// Outcome message.
    pub message: String,
}

/// Create a new user.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let (Some(user_name), Some(phone)) = (body.user_name, body.mobile_phone_number) else {
        return Err(ApiError::BadRequest(
            "User Name and Mobile Number is required".into(),
        ));
    };

    let user = state.store.create_user(&user_name, &phone).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user,
            message: "User created successfully.".into(),
        }),
    ))
}
