//! Minimal client for the Anthropic Messages API.
//!
//! Covers exactly what the debrief pipeline needs: one synchronous (awaited)
//! `messages` call with a system prompt and a single user message. No
//! streaming, no tool use, no retries — a failed call fails the run.

mod client;
mod error;
mod types;

pub use client::AnthropicClient;
pub use error::AnthropicError;
pub use types::{ContentBlock, Message, MessagesRequest, MessagesResponse, Usage};
