//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod triage;

pub use triage::{
    AnalyzeSymptomsCommand, AnalyzeSymptomsHandler, NextQuestionCommand, NextQuestionError,
    NextQuestionHandler, NextQuestionResult, StartSessionCommand, StartSessionHandler,
    SuggestSymptomsCommand, SuggestSymptomsHandler,
};
