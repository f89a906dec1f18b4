//! HTTP request handlers.

pub mod entries;
pub mod health;
pub mod ledgers;
pub mod particulars;
pub mod reports;
pub mod users;

/// Uniform `{message}` body for update/delete responses.
#[derive(Debug, serde::Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
