//! HTTP adapters - REST API implementations.

pub mod triage;

// Re-export key types for convenience
pub use triage::triage_routes;
pub use triage::TriageAppState;
pub use triage::SESSION_ID_HEADER;
