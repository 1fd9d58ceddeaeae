//! Library Errors
//!
//! Only `NetworkFailure` and `ServiceError` ever reach the user. The rest are
//! absorbed where they occur.

use thiserror::Error;

pub type LibraryResult<T> = Result<T, LibraryError>;

const NETWORK_MESSAGE: &str = "Could not reach the library service. Check your connection and try again.";
const SERVICE_FALLBACK_MESSAGE: &str = "Something went wrong while loading your library.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// Token provider could not produce a token; recovered by anonymous fallback
    #[error("auth unavailable: {0}")]
    AuthUnavailable(String),

    /// Transport-level failure or non-2xx status
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// Structured error payload (or undecodable body) from the data service
    #[error("service error: {}", .message.as_deref().unwrap_or("no message"))]
    ServiceError { message: Option<String> },

    /// Result of a superseded request; never applied
    #[error("stale response (request {seq}, current {current})")]
    StaleResponse { seq: u64, current: u64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl LibraryError {
    pub fn service(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() { None } else { Some(message) };
        LibraryError::ServiceError { message }
    }

    /// Whether this error becomes visible view state
    pub fn is_user_visible(&self) -> bool {
        matches!(self, LibraryError::NetworkFailure(_) | LibraryError::ServiceError { .. })
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, LibraryError::StaleResponse { .. })
    }

    /// Message shown to the user. Never empty.
    pub fn user_message(&self) -> String {
        match self {
            LibraryError::NetworkFailure(_) => NETWORK_MESSAGE.to_string(),
            LibraryError::ServiceError { message: Some(msg) } => msg.clone(),
            LibraryError::ServiceError { message: None } => SERVICE_FALLBACK_MESSAGE.to_string(),
            LibraryError::InvalidInput(msg) => msg.clone(),
            LibraryError::AuthUnavailable(_) | LibraryError::StaleResponse { .. } => {
                SERVICE_FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
