//! AnalyzeSymptomsHandler - Command handler for the final symptom analysis.
//!
//! Takes the complete report (demographics, medical history, symptoms and
//! follow-up answers), asks the completion service for the structured
//! analysis, and falls back to the canned placeholder document when the
//! request fails or the reply cannot be decoded. Stateless: the follow-up
//! answers travel in the command, not in the session store.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::domain::triage::prompts::analysis_prompt;
use crate::domain::triage::{decode_analysis, AnalysisResult};
use crate::ports::{CompletionClient, CompletionRequest};

const ANALYSIS_TEMPERATURE: f32 = 0.3;

/// Command carrying the full symptom report.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeSymptomsCommand {
    /// Age, sex and similar patient facts.
    pub demographics: Map<String, Value>,
    /// Pre-existing conditions, medication and lifestyle answers.
    pub history: Map<String, Value>,
    /// Symptoms selected from the suggestion step.
    pub symptoms: Vec<String>,
    /// Follow-up answers, keyed by question text.
    pub detailed_symptoms: Map<String, Value>,
}

/// Handler for the full analysis.
pub struct AnalyzeSymptomsHandler {
    completion: Arc<dyn CompletionClient>,
}

impl AnalyzeSymptomsHandler {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        Self { completion }
    }

    /// Produces the structured analysis for the report.
    ///
    /// This operation cannot fail; upstream problems degrade to the canned
    /// placeholder analysis, which tells the user to consult a provider.
    pub async fn handle(&self, cmd: AnalyzeSymptomsCommand) -> AnalysisResult {
        let prompt = analysis_prompt(
            &cmd.demographics,
            &cmd.history,
            &cmd.symptoms,
            &cmd.detailed_symptoms,
        );
        let request = CompletionRequest::new(prompt).with_temperature(ANALYSIS_TEMPERATURE);

        let reply = match self.completion.complete(request).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "analysis request failed, using placeholder analysis");
                return AnalysisResult::fallback();
            }
        };

        match decode_analysis(&reply.content) {
            Ok(result) => {
                debug!(
                    conditions = result.conditions.len(),
                    tests = result.tests.len(),
                    "analysis produced"
                );
                result
            }
            Err(err) => {
                warn!(error = %err, "analysis reply undecodable, using placeholder analysis");
                AnalysisResult::fallback()
            }
        }
    }
}
