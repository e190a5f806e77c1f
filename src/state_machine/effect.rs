//! Effects produced by state transitions

use super::state::Message;
use crate::backend::AssistantRequest;

/// Effects to be applied, in order, after a state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Append an entry to the transcript
    AppendMessage { message: Message },

    /// Empty the input draft
    ClearDraft,

    /// Forget the last error shown to the user
    ClearError,

    /// Record an error for display
    SetError { message: String },

    /// Toggle the advisory in-flight flag
    SetInFlight(bool),

    /// Send one request to the backend
    DispatchRequest { request: AssistantRequest },
}

impl Effect {
    pub fn append(message: Message) -> Self {
        Effect::AppendMessage { message }
    }

    pub fn dispatch(text: impl Into<String>) -> Self {
        Effect::DispatchRequest {
            request: AssistantRequest { text: text.into() },
        }
    }

    pub fn set_error(message: impl Into<String>) -> Self {
        Effect::SetError {
            message: message.into(),
        }
    }
}
