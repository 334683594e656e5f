//! Completion Client Adapters.
//!
//! Implementations of the CompletionClient port.
//!
//! ## Available Adapters
//!
//! - `MockCompletionClient` - Configurable mock for testing
//! - `OpenAIClient` - OpenAI chat completions API

mod mock_client;
mod openai_client;

pub use mock_client::{MockCompletionClient, MockFailure, MockReply};
pub use openai_client::{OpenAIClient, OpenAIConfig};
