//! Conversation state types

use crate::parser::ToolCall;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Transcript
// ============================================================================

/// Who authored a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the conversation transcript
///
/// Fields are private so that a user entry can never carry tool data; build
/// entries through [`Message::user`] or [`Message::assistant`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_call: Option<ToolCall>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tool_results: Vec<Value>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            tool_call: None,
            tool_results: Vec::new(),
        }
    }

    pub fn assistant(
        content: impl Into<String>,
        tool_call: Option<ToolCall>,
        tool_results: Vec<Value>,
    ) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            tool_call,
            tool_results,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tool_call(&self) -> Option<&ToolCall> {
        self.tool_call.as_ref()
    }

    pub fn tool_results(&self) -> &[Value] {
        &self.tool_results
    }
}

// ============================================================================
// Conversation State
// ============================================================================

/// Phase of the conversation controller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConvState {
    /// Ready for user input
    #[default]
    Idle,

    /// Request dispatched, waiting for the backend
    AwaitingResponse,

    /// Last turn failed; a new submission recovers
    Error { message: String },
}

impl ConvState {
    /// Check if a request is outstanding
    pub fn is_awaiting(&self) -> bool {
        matches!(self, ConvState::AwaitingResponse)
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            ConvState::Idle => "idle",
            ConvState::AwaitingResponse => "awaiting_response",
            ConvState::Error { .. } => "error",
        }
    }
}
