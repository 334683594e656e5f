//! Analysis result types: conditions, recommended tests, urgency.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Confidence;

/// Upper bound on conditions in one analysis.
pub const MAX_CONDITIONS: usize = 3;

/// Upper bound on recommended tests in one analysis.
pub const MAX_TESTS: usize = 5;

/// A possible condition matching the reported symptoms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Condition name in plain language.
    pub name: String,
    /// Short explanation of why it matches.
    pub explanation: String,
    /// Match confidence, 0-100.
    pub confidence: Confidence,
}

/// How soon a recommended test should happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestPriority {
    High,
    Medium,
    Low,
}

/// A diagnostic test worth running for the reported symptoms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedTest {
    /// Test name in plain language.
    pub name: String,
    /// What the test would establish.
    pub explanation: String,
    /// Scheduling priority.
    pub priority: TestPriority,
    /// Usefulness confidence, 0-100.
    pub confidence: Confidence,
}

/// Overall urgency of seeking care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Routine,
    Urgent,
    Emergency,
}

/// Full analysis of a symptom report.
///
/// This type is both the decode target for the completion reply and the
/// response body, so its serde shape is the wire contract: three required
/// keys, lowercase enum tokens, range-checked confidences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Up to [`MAX_CONDITIONS`] possible conditions, most likely first.
    pub conditions: Vec<Condition>,
    /// Up to [`MAX_TESTS`] recommended tests, highest priority first.
    pub tests: Vec<RecommendedTest>,
    /// Overall urgency.
    pub urgency: Urgency,
}

impl AnalysisResult {
    /// The canned analysis returned when no upstream reply could be used.
    ///
    /// Deliberately non-alarming: it reports that no analysis was possible
    /// and points the user at a healthcare provider rather than guessing.
    pub fn fallback() -> Self {
        Self {
            conditions: vec![Condition {
                name: "Unable to analyze symptoms".to_string(),
                explanation: "Not enough information to make a reliable analysis".to_string(),
                confidence: Confidence::ZERO,
            }],
            tests: vec![RecommendedTest {
                name: "Consult healthcare provider".to_string(),
                explanation: "A proper medical evaluation is needed for accurate diagnosis"
                    .to_string(),
                priority: TestPriority::High,
                confidence: Confidence::new(95),
            }],
            urgency: Urgency::Routine,
        }
    }

    /// Drops entries beyond the documented bounds, keeping the head of
    /// each list since replies order by likelihood and priority.
    pub fn clamp_bounds(&mut self) {
        self.conditions.truncate(MAX_CONDITIONS);
        self.tests.truncate(MAX_TESTS);
    }
}
