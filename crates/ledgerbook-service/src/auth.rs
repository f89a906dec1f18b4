//! Login-token issuance.
//!
//! A successful phone-number login is answered with a short-lived HS256
//! JWT carrying the user's identity. The service only issues tokens;
//! verification happens in the mobile client's API gateway and is out of
//! scope here.

use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use ledgerbook_core::{User, UserId};

use crate::error::ApiError;

/// Token lifetime in seconds (1 hour).
const TOKEN_TTL_SECS: i64 = 3600;

/// Claims embedded in an issued login token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// The user's row id.
    pub user_id: UserId,
    /// The user's display name.
    pub user_name: String,
    /// The phone number the user logged in with.
    pub mobile_phone_number: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
    /// Issued-at (seconds since epoch).
    pub iat: i64,
    /// Expiry (seconds since epoch).
    pub exp: i64,
}

/// Sign a login token for a user.
pub fn issue_token(user: &User, secret: &str) -> Result<String, ApiError> {
    let now = Utc::now().timestamp();
    let claims = TokenClaims {
        user_id: user.user_id,
        user_name: user.user_name.clone(),
        mobile_phone_number: user.mobile_phone_number.clone(),
        created_at: user.created_at,
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("token signing failed: {e}")))
}
