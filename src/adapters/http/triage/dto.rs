//! HTTP DTOs for triage endpoints.
//!
//! Request types take every field with a lenient default so partial or empty
//! bodies still reach the handlers; the triage operations degrade gracefully
//! instead of rejecting input.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::triage::{FollowupOutcome, FollowupQuestion};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request for symptom suggestions.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestSymptomsRequest {
    /// Raw text from the symptom input field.
    #[serde(default)]
    pub input: String,
}

/// Request for the next follow-up question.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitSymptomsRequest {
    /// Symptoms selected so far.
    #[serde(default)]
    pub symptoms: Vec<String>,
    /// Answers to previous follow-up questions, keyed by question text.
    #[serde(default)]
    pub detailed_symptoms: Map<String, Value>,
}

/// Request for the final analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub demographics: Map<String, Value>,
    #[serde(default)]
    pub history: Map<String, Value>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub detailed_symptoms: Map<String, Value>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for starting or resetting a session.
#[derive(Debug, Clone, Serialize)]
pub struct StartSessionResponse {
    pub session_id: String,
}

/// Response carrying the next follow-up question, or completion.
///
/// `question` is serialized even when absent; clients poll `completed` and
/// expect an explicit null once the interview is over.
#[derive(Debug, Clone, Serialize)]
pub struct FollowupResponse {
    pub question: Option<FollowupQuestion>,
    pub completed: bool,
}

impl FollowupResponse {
    /// Maps an interview outcome onto the wire shape.
    pub fn from_outcome(outcome: FollowupOutcome) -> Self {
        match outcome {
            FollowupOutcome::Question(question) => Self {
                question: Some(question),
                completed: false,
            },
            FollowupOutcome::Exhausted | FollowupOutcome::Aborted => Self {
                question: None,
                completed: true,
            },
        }
    }
}

/// Health probe response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub model: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::triage::QuestionKind;

    #[test]
    fn suggest_request_defaults_missing_input() {
        let req: SuggestSymptomsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.input, "");

        let req: SuggestSymptomsRequest =
            serde_json::from_str(r#"{"input": "headache"}"#).unwrap();
        assert_eq!(req.input, "headache");
    }

    #[test]
    fn submit_request_defaults_missing_fields() {
        let req: SubmitSymptomsRequest = serde_json::from_str("{}").unwrap();
        assert!(req.symptoms.is_empty());
        assert!(req.detailed_symptoms.is_empty());
    }

    #[test]
    fn analyze_request_accepts_full_report() {
        let json = r#"{
            "demographics": {"age": 34},
            "history": {"smoker": "no"},
            "symptoms": ["cough (dry)"],
            "detailed_symptoms": {"How long?": "3 days"}
        }"#;
        let req: AnalyzeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.symptoms.len(), 1);
        assert_eq!(req.demographics["age"], 34);
    }

    #[test]
    fn followup_response_carries_question() {
        let outcome = FollowupOutcome::Question(FollowupQuestion {
            question: "How severe is the pain?".to_string(),
            kind: QuestionKind::Slider,
            options: Vec::new(),
        });

        let response = FollowupResponse::from_outcome(outcome);
        assert!(!response.completed);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["question"]["question"], "How severe is the pain?");
        assert_eq!(json["question"]["type"], "slider");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn terminal_outcomes_serialize_null_question() {
        for outcome in [FollowupOutcome::Exhausted, FollowupOutcome::Aborted] {
            let response = FollowupResponse::from_outcome(outcome);
            let json = serde_json::to_value(&response).unwrap();
            assert_eq!(json["question"], serde_json::Value::Null);
            assert_eq!(json["completed"], true);
        }
    }

    #[test]
    fn error_response_internal_creates_correctly() {
        let error = ErrorResponse::internal("session storage failed");
        assert_eq!(error.code, "INTERNAL_ERROR");
        assert_eq!(error.message, "session storage failed");
    }
}
