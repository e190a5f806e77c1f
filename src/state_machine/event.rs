//! Events that can occur in a conversation

use crate::backend::AssistantReply;

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    /// User pressed send with the given draft text (untrimmed)
    UserSubmit { text: String },

    /// Backend answered with a success status
    ReplyReceived { reply: AssistantReply },

    /// Backend rejected the request or the request never completed
    ReplyFailed { message: String },
}
