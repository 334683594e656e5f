//! Triage command handlers.

mod analyze_symptoms;
mod next_question;
mod start_session;
mod suggest_symptoms;

pub use analyze_symptoms::{AnalyzeSymptomsCommand, AnalyzeSymptomsHandler};
pub use next_question::{
    NextQuestionCommand, NextQuestionError, NextQuestionHandler, NextQuestionResult,
};
pub use start_session::{StartSessionCommand, StartSessionHandler};
pub use suggest_symptoms::{SuggestSymptomsCommand, SuggestSymptomsHandler};
