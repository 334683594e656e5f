//! Storage Adapters
//!
//! Implementations of the SessionStore port for per-session question history.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionStore** - Stores histories in memory; sessions live as
//!   long as the process, which is all a symptom check needs

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
