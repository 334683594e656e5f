//! Follow-up question types.

use serde::{Deserialize, Serialize};

/// Input control the client should render for a follow-up question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Intensity or duration scale.
    Slider,
    /// Multiple choice; carries options.
    Checkbox,
    /// Free-form answer.
    Text,
}

/// One follow-up question produced by the completion service.
///
/// Deserialization doubles as schema validation: a reply missing `question`
/// or carrying an unknown `type` token fails to decode and the interview is
/// closed out instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowupQuestion {
    /// The question text shown to the user.
    pub question: String,

    /// Which input control to render.
    #[serde(rename = "type")]
    pub kind: QuestionKind,

    /// Choice labels; only populated for checkbox questions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// Outcome of asking for the next follow-up question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowupOutcome {
    /// A new question to put to the user.
    Question(FollowupQuestion),
    /// The question cap was already reached; the interview is over.
    Exhausted,
    /// The upstream reply could not be used; the interview was closed out.
    Aborted,
}

impl FollowupOutcome {
    /// Whether this outcome ends the interview.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Question(_))
    }
}
