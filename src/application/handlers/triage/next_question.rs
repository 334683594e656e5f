//! NextQuestionHandler - Command handler for the follow-up interview.
//!
//! Each invocation asks the completion service for one more follow-up
//! question, constrained by the session's question history. The interview is
//! capped at [`MAX_FOLLOWUP_QUESTIONS`]; once the cap is hit, or a reply
//! cannot be used, the session is closed out and every later request reports
//! completion without touching the completion service again.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::domain::foundation::SessionId;
use crate::domain::session::QuestionHistory;
use crate::domain::triage::prompts::followup_prompt;
use crate::domain::triage::{decode_followup, FollowupOutcome};
use crate::ports::{CompletionClient, CompletionRequest, SessionStore, SessionStoreError};

const FOLLOWUP_TEMPERATURE: f32 = 0.3;

/// Command to fetch the next follow-up question for a session.
#[derive(Debug, Clone)]
pub struct NextQuestionCommand {
    /// Session presented by the caller; `None` starts a fresh one.
    pub session_id: Option<SessionId>,
    /// Symptoms selected so far.
    pub symptoms: Vec<String>,
    /// Answers to previous follow-up questions, keyed by question text.
    pub detailed_symptoms: Map<String, Value>,
}

/// Result of a follow-up request.
#[derive(Debug, Clone)]
pub struct NextQuestionResult {
    /// The session the outcome belongs to, echoed back to the caller.
    pub session_id: SessionId,
    /// What to do next: ask a question or stop.
    pub outcome: FollowupOutcome,
}

/// Follow-up interview errors.
///
/// Completion failures never surface here; they close the interview out
/// instead. Only the session store can fail this operation.
#[derive(Debug, thiserror::Error)]
pub enum NextQuestionError {
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

/// Handler for follow-up question requests.
pub struct NextQuestionHandler {
    completion: Arc<dyn CompletionClient>,
    sessions: Arc<dyn SessionStore>,
}

impl NextQuestionHandler {
    pub fn new(completion: Arc<dyn CompletionClient>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            completion,
            sessions,
        }
    }

    /// Produces the next follow-up question, or a terminal outcome.
    pub async fn handle(
        &self,
        cmd: NextQuestionCommand,
    ) -> Result<NextQuestionResult, NextQuestionError> {
        let session_id = match cmd.session_id {
            Some(id) => id,
            None => self.sessions.create().await?,
        };

        let mut history = match self.sessions.load(session_id).await {
            Ok(history) => history,
            // Stale or never-created ids get a fresh interview.
            Err(SessionStoreError::NotFound(_)) => QuestionHistory::new(),
            Err(err) => return Err(err.into()),
        };

        if history.is_exhausted() {
            debug!(session_id = %session_id, asked = history.len(), "interview already complete");
            return Ok(NextQuestionResult {
                session_id,
                outcome: FollowupOutcome::Exhausted,
            });
        }

        let prompt = followup_prompt(&cmd.symptoms, &cmd.detailed_symptoms, history.questions());
        let request = CompletionRequest::new(prompt).with_temperature(FOLLOWUP_TEMPERATURE);

        let outcome = match self.completion.complete(request).await {
            Ok(reply) => match decode_followup(&reply.content) {
                Ok(question) => {
                    history.record(&question.question);
                    debug!(
                        session_id = %session_id,
                        asked = history.len(),
                        "follow-up question produced"
                    );
                    FollowupOutcome::Question(question)
                }
                Err(err) => {
                    warn!(session_id = %session_id, error = %err, "follow-up reply undecodable, closing interview");
                    history.terminate();
                    FollowupOutcome::Aborted
                }
            },
            Err(err) => {
                warn!(session_id = %session_id, error = %err, "follow-up request failed, closing interview");
                history.terminate();
                FollowupOutcome::Aborted
            }
        };

        self.sessions.save(session_id, &history).await?;

        Ok(NextQuestionResult {
            session_id,
            outcome,
        })
    }
}
