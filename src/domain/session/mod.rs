//! Session domain module.
//!
//! Holds the per-session follow-up question history. Sessions carry no other
//! state; suggestion and analysis requests are stateless.

mod question_history;

pub use question_history::{QuestionHistory, MAX_FOLLOWUP_QUESTIONS};
