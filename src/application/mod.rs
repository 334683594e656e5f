//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Each triage operation gets a command type and a handler that owns the
//! ports it needs.

pub mod handlers;

pub use handlers::{
    // Session lifecycle
    StartSessionCommand, StartSessionHandler,
    // Suggestion step
    SuggestSymptomsCommand, SuggestSymptomsHandler,
    // Follow-up interview
    NextQuestionCommand, NextQuestionError, NextQuestionHandler, NextQuestionResult,
    // Final analysis
    AnalyzeSymptomsCommand, AnalyzeSymptomsHandler,
};
