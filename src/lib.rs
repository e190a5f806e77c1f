//! Assistant relay
//!
//! A minimal conversational client for a tool-using assistant backend: a
//! conversation controller that parses `<tool_call>` directives out of the
//! assistant's answers, and a pass-through HTTP proxy in front of the backend.

pub mod api;
pub mod backend;
pub mod config;
pub mod parser;
pub mod render;
pub mod runtime;
pub mod state_machine;
