//! Text-generation client library.
//!
//! [`TextGenerator`] is the seam the pipeline depends on; tests substitute
//! a fake. [`ChatCompletionsClient`] is the production implementation for
//! any OpenAI-compatible `/chat/completions` endpoint.

pub mod chat;
pub mod generator;

pub use chat::{ChatCompletionsClient, ChatConfig};
pub use generator::{GenerationError, TextGenerator};
