//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and identifiers that form the vocabulary
//! of the Symptom Scout domain.

mod confidence;
mod ids;

pub use confidence::{Confidence, ConfidenceOutOfRange};
pub use ids::SessionId;
