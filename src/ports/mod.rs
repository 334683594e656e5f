//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CompletionClient` - Port for the chat-completion service
//! - `SessionStore` - Port for per-session question history

mod completion_client;
mod session_store;

pub use completion_client::{
    ClientInfo, CompletionClient, CompletionError, CompletionRequest, CompletionResponse,
    FinishReason,
};
pub use session_store::{SessionStore, SessionStoreError};
