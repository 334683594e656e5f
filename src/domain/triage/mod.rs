//! Triage domain module.
//!
//! The vocabulary of the three triage operations: suggestion lists,
//! follow-up questions, and analysis results, together with the prompt
//! templates that request them and the fail-closed decoders that read
//! completion replies back into typed values.

pub mod analysis;
pub mod decode;
pub mod followup;
pub mod prompts;
pub mod suggestions;

pub use analysis::{
    AnalysisResult, Condition, RecommendedTest, TestPriority, Urgency, MAX_CONDITIONS, MAX_TESTS,
};
pub use decode::{decode_analysis, decode_followup, decode_suggestions, strip_code_fences, DecodeError};
pub use followup::{FollowupOutcome, FollowupQuestion, QuestionKind};
pub use suggestions::{merge_unique, SuggestionList, COMMON_SYMPTOMS, SUGGESTION_COUNT};
