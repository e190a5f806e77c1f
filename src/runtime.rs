//! Conversation controller
//!
//! Owns the per-session state, feeds events through the pure
//! [`transition`](crate::state_machine::transition) function and applies the
//! resulting effects. The single await point is the backend call inside
//! [`Conversation::send`].

#[cfg(test)]
pub mod testing;

use crate::backend::{AssistantBackend, AssistantReply, AssistantRequest, BackendError};
use crate::state_machine::{transition, ConvState, Effect, Event, Message, TransitionError};

/// Per-session conversation state
///
/// The transcript only ever grows; the other fields are transient UI state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationState {
    messages: Vec<Message>,
    draft: String,
    in_flight: bool,
    last_error: Option<String>,
    phase: ConvState,
}

impl ConversationState {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn phase(&self) -> &ConvState {
        &self.phase
    }
}

/// Drives one conversation against an assistant backend
pub struct Conversation<B: AssistantBackend> {
    state: ConversationState,
    backend: B,
}

impl<B: AssistantBackend> Conversation<B> {
    pub fn new(backend: B) -> Self {
        Self {
            state: ConversationState::default(),
            backend,
        }
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.state.messages
    }

    /// Replace the input draft
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.draft = text.into();
    }

    /// Submit the current draft and wait for the assistant's reply.
    ///
    /// Blank drafts are ignored. Backend failures are not returned as
    /// errors; they land in [`ConversationState::last_error`].
    ///
    /// Returns `true` when a request was actually dispatched.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Busy`] if a turn is already pending.
    pub async fn send(&mut self) -> Result<bool, TransitionError> {
        let Some(request) = self.begin_turn()? else {
            return Ok(false);
        };

        let outcome = self.backend.ask(&request).await;
        self.complete_turn(outcome)?;
        Ok(true)
    }

    /// Apply the user submission and return the request to dispatch, if any.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Busy`] if a turn is already pending.
    pub fn begin_turn(&mut self) -> Result<Option<AssistantRequest>, TransitionError> {
        let text = self.state.draft.clone();
        self.apply(Event::UserSubmit { text })
    }

    /// Apply the outcome of a dispatched request.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidTransition`] if no turn is pending.
    pub fn complete_turn(
        &mut self,
        outcome: Result<AssistantReply, BackendError>,
    ) -> Result<(), TransitionError> {
        let event = match outcome {
            Ok(reply) => Event::ReplyReceived { reply },
            Err(e) => {
                tracing::warn!(error = %e, "Assistant turn failed");
                Event::ReplyFailed {
                    message: e.user_message(),
                }
            }
        };
        self.apply(event).map(|_| ())
    }

    /// Run one transition and apply its effects in order.
    ///
    /// Returns the request to send when the transition dispatched one.
    fn apply(&mut self, event: Event) -> Result<Option<AssistantRequest>, TransitionError> {
        let result = transition(&self.state.phase, event).inspect_err(|e| {
            tracing::warn!(state = self.state.phase.name(), error = %e, "Rejected event");
        })?;

        if result.new_state != self.state.phase {
            tracing::debug!(
                from = self.state.phase.name(),
                to = result.new_state.name(),
                "Conversation state change"
            );
        }
        self.state.phase = result.new_state;

        let mut dispatch = None;
        for effect in result.effects {
            match effect {
                Effect::AppendMessage { message } => {
                    if let Some(call) = message.tool_call() {
                        tracing::info!(tool = %call.name, "Assistant requested tool call");
                    }
                    self.state.messages.push(message);
                }
                Effect::ClearDraft => self.state.draft.clear(),
                Effect::ClearError => self.state.last_error = None,
                Effect::SetError { message } => self.state.last_error = Some(message),
                Effect::SetInFlight(in_flight) => self.state.in_flight = in_flight,
                Effect::DispatchRequest { request } => {
                    tracing::info!(
                        endpoint = %self.backend.endpoint(),
                        text_len = request.text.len(),
                        "Dispatching assistant request"
                    );
                    dispatch = Some(request);
                }
            }
        }

        Ok(dispatch)
    }
}
