//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Completion clients (OpenAI, mock)
//! - `http` - REST API exposure
//! - `storage` - Session history stores

pub mod ai;
pub mod http;
pub mod storage;

pub use ai::{MockCompletionClient, OpenAIClient, OpenAIConfig};
pub use http::{triage_routes, TriageAppState};
pub use storage::InMemorySessionStore;
