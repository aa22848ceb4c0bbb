//! Chat bridge for the NLP trainer.
//!
//! Prompts are built by the pure functions in [`prompts`], sent to a
//! [`TextGenerator`] (in production the [`GeminiClient`]) and the answer is
//! returned by [`ChatBridge`], which turns every failure into a readable
//! apology instead of an error.

pub mod bridge;
pub mod client;
pub mod error;
pub mod prompts;

pub use bridge::{ChatBridge, ChatKind, ChatPrompt, ChatReply, UNAVAILABLE};
pub use client::{GeminiClient, GeminiConfig, TextGenerator};
pub use error::{LlmError, LlmResult};
