//! Errors surfaced by REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Pages render `ApiError` via `Display`; `Unauthorized` is special-cased by
//! callers to drop the session and send the user back to `/login`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a call to the records API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The session token is missing, expired or rejected.
    #[error("session expired, please sign in again")]
    Unauthorized,

    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,

    /// The API rejected the payload.
    #[error("{0}")]
    Validation(String),

    /// Any other non-success status.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },

    /// The request never reached the API.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// REST calls are browser-only.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Map a non-success HTTP status and its body to an error.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            400 | 422 => Self::Validation(server_message(body).unwrap_or_else(|| "invalid data".to_owned())),
            _ => Self::Status {
                status,
                message: server_message(body).unwrap_or_else(|| "unexpected server error".to_owned()),
            },
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Extract a human-readable message from an error body.
///
/// Prefers `{"message": ...}` or `{"error": ...}` JSON and falls back to the
/// raw text otherwise.
pub(crate) fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    let keyed = serde_json::from_str::<serde_json::Value>(trimmed).ok().and_then(|value| {
        ["message", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
            .map(str::to_owned)
    });
    Some(keyed.unwrap_or_else(|| trimmed.to_owned()))
}
