//! Pure state transition function
//!
//! Given the current phase and an event, decide the next phase and the
//! ordered list of effects the controller must apply. No I/O happens here.

use super::state::Message;
use super::{ConvState, Effect, Event};
use crate::backend::AssistantReply;
use crate::parser::parse_answer;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ConvState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ConvState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("A request is already in flight, wait for the reply")]
    Busy,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
///
/// # Errors
///
/// Returns [`TransitionError::Busy`] for a submission while a request is
/// outstanding, and [`TransitionError::InvalidTransition`] for a reply that
/// arrives when none was requested.
pub fn transition(state: &ConvState, event: Event) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // ============================================================
        // User Submission
        // ============================================================

        // Blank input never leaves the current phase
        (_, Event::UserSubmit { text }) if text.trim().is_empty() => {
            Ok(TransitionResult::new(state.clone()))
        }

        // Idle/Error + UserSubmit -> AwaitingResponse
        (ConvState::Idle | ConvState::Error { .. }, Event::UserSubmit { text }) => {
            let text = text.trim();
            Ok(TransitionResult::new(ConvState::AwaitingResponse)
                .with_effect(Effect::append(Message::user(text)))
                .with_effect(Effect::ClearDraft)
                .with_effect(Effect::ClearError)
                .with_effect(Effect::SetInFlight(true))
                .with_effect(Effect::dispatch(text)))
        }

        (ConvState::AwaitingResponse, Event::UserSubmit { .. }) => Err(TransitionError::Busy),

        // ============================================================
        // Backend Replies
        // ============================================================

        // AwaitingResponse + ReplyReceived -> Idle
        (ConvState::AwaitingResponse, Event::ReplyReceived { reply }) => {
            Ok(TransitionResult::new(ConvState::Idle)
                .with_effect(Effect::append(assistant_message(reply)))
                .with_effect(Effect::SetInFlight(false)))
        }

        // AwaitingResponse + ReplyFailed -> Error
        (ConvState::AwaitingResponse, Event::ReplyFailed { message }) => {
            Ok(TransitionResult::new(ConvState::Error {
                message: message.clone(),
            })
            .with_effect(Effect::set_error(message))
            .with_effect(Effect::SetInFlight(false)))
        }

        // ============================================================
        // Invalid Transitions
        // ============================================================
        (state, event) => Err(TransitionError::InvalidTransition(format!(
            "No transition from {state:?} with event {event:?}"
        ))),
    }
}

/// Build the transcript entry for a successful reply
fn assistant_message(reply: AssistantReply) -> Message {
    let answer = reply.answer.unwrap_or_default();
    let parsed = parse_answer(&answer);

    let content = if parsed.cleaned.is_empty() {
        answer
    } else {
        parsed.cleaned
    };

    Message::assistant(
        content,
        parsed.tool_call,
        reply.tool_results.unwrap_or_default(),
    )
}
