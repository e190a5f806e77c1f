//! Backend error types

use thiserror::Error;

/// Shown when the backend rejects a request without saying why
pub const GENERIC_REJECTION: &str = "Assistant error";

/// Shown when a request fails without any usable message
pub const GENERIC_TRANSPORT_FAILURE: &str = "Network failure";

/// Why an assistant request did not produce an answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// Backend replied with a non-success status
    #[error(
        "backend rejected request (status {status}): {}",
        .message.as_deref().unwrap_or(GENERIC_REJECTION)
    )]
    Rejected {
        status: u16,
        /// The reply's `error` field, if any
        message: Option<String>,
    },

    /// Request never completed or the reply body was unusable
    #[error("transport failure: {0}")]
    Transport(String),
}

impl BackendError {
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected { status, message }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Text to show the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            Self::Rejected { .. } => GENERIC_REJECTION.to_string(),
            Self::Transport(message) if !message.is_empty() => message.clone(),
            Self::Transport(_) => GENERIC_TRANSPORT_FAILURE.to_string(),
        }
    }
}
