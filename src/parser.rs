//! Assistant answer parsing
//!
//! The backend answers with free text that may embed a single tool-call
//! directive:
//!
//! ```text
//! Done. <tool_call>{"name":"check_balance","arguments":{"id":1}}</tool_call>
//! ```
//!
//! [`parse_answer`] splits such an answer into the prose shown to the user and
//! the decoded [`ToolCall`]. Only the first directive in an answer is
//! recognized; any later block is left in the text as-is.

#[cfg(test)]
mod proptests;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// First `<tool_call>...</tool_call>` block, markers case-insensitive,
/// body captured lazily with surrounding whitespace excluded.
static TOOL_CALL_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<tool_call>\s*([\s\S]*?)\s*</tool_call>")
        .expect("tool call pattern is valid")
});

/// A tool invocation requested by the assistant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Map<String, Value>>,
}

impl ToolCall {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: None,
        }
    }

    #[must_use]
    pub fn with_arguments(mut self, arguments: Map<String, Value>) -> Self {
        self.arguments = Some(arguments);
        self
    }
}

/// Result of splitting an answer into display text and directive
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedAnswer {
    /// Answer text with the directive block removed
    pub cleaned: String,
    /// Decoded directive, `None` when absent or malformed
    pub tool_call: Option<ToolCall>,
}

/// Extract the first tool-call directive from an assistant answer.
///
/// A malformed directive is still stripped from the display text; it just
/// yields no [`ToolCall`]. Answers without a directive come back untouched
/// (not even trimmed).
#[must_use]
pub fn parse_answer(answer: &str) -> ParsedAnswer {
    if answer.is_empty() {
        return ParsedAnswer::default();
    }

    let Some(captures) = TOOL_CALL_BLOCK.captures(answer) else {
        return ParsedAnswer {
            cleaned: answer.to_string(),
            tool_call: None,
        };
    };

    let tool_call = captures
        .get(1)
        .and_then(|body| serde_json::from_str::<ToolCall>(body.as_str()).ok());

    let cleaned = TOOL_CALL_BLOCK.replacen(answer, 1, "").trim().to_string();

    ParsedAnswer { cleaned, tool_call }
}
