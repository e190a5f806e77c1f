//! Plain-text transcript rendering for terminals

use crate::runtime::ConversationState;
use crate::state_machine::{Message, Role};
use std::fmt::Write;

pub const EMPTY_TRANSCRIPT: &str = "No messages yet. Send your first request.";
pub const SENDING: &str = "Sending...";

/// Render one transcript entry, including any tool call and tool results
pub fn render_message(message: &Message) -> String {
    let label = match message.role() {
        Role::User => "You",
        Role::Assistant => "Assistant",
    };
    let mut out = format!("{label}: {}", message.content());

    if let Some(call) = message.tool_call() {
        let _ = write!(out, "\n  Action detected: {}", call.name);
        if let Some(arguments) = &call.arguments {
            let args = serde_json::to_string(arguments).unwrap_or_default();
            let _ = write!(out, " -> {args}");
        }
    }

    if !message.tool_results().is_empty() {
        out.push_str("\n  Tool results:");
        for result in message.tool_results() {
            let pretty = serde_json::to_string_pretty(result).unwrap_or_default();
            for line in pretty.lines() {
                let _ = write!(out, "\n    {line}");
            }
        }
    }

    out
}

/// Render the whole transcript, or the placeholder when it is empty
pub fn render_transcript(messages: &[Message]) -> String {
    if messages.is_empty() {
        return EMPTY_TRANSCRIPT.to_string();
    }
    messages
        .iter()
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Status line under the transcript: in-flight indicator or last error
pub fn render_status(state: &ConversationState) -> Option<String> {
    if state.in_flight() {
        return Some(SENDING.to_string());
    }
    state.last_error().map(|e| format!("Error: {e}"))
}
