//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs)
//! - `session` - Per-session follow-up question history
//! - `triage` - Suggestion, follow-up, and analysis types with their prompts and decoders

pub mod foundation;
pub mod session;
pub mod triage;
