//! HTTP handlers for triage endpoints.
//!
//! These handlers connect Axum routes to the application layer. Session
//! identity rides in the `x-session-id` header both ways: callers may present
//! one, and every session-touching response echoes the effective id so the
//! client can store it. Unparseable ids are treated as absent.
//!
//! The triage endpoints answer 200 even when the completion service fails;
//! the handlers behind them substitute canned fallbacks. Only a session
//! storage failure surfaces as an error status.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::application::handlers::triage::{
    AnalyzeSymptomsCommand, AnalyzeSymptomsHandler, NextQuestionCommand, NextQuestionError,
    NextQuestionHandler, StartSessionCommand, StartSessionHandler, SuggestSymptomsCommand,
    SuggestSymptomsHandler,
};
use crate::domain::foundation::SessionId;
use crate::ports::{CompletionClient, SessionStore, SessionStoreError};

use super::dto::{
    AnalyzeRequest, ErrorResponse, FollowupResponse, HealthResponse, StartSessionResponse,
    SubmitSymptomsRequest, SuggestSymptomsRequest,
};

/// Header carrying the symptom-check session id.
pub const SESSION_ID_HEADER: &str = "x-session-id";

// ════════════════════════════════════════════════════════════════════════════
// Application state
// ════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned per request; dependencies are Arc-wrapped for cheap sharing.
#[derive(Clone)]
pub struct TriageAppState {
    pub completion: Arc<dyn CompletionClient>,
    pub sessions: Arc<dyn SessionStore>,
}

impl TriageAppState {
    /// Create handlers on demand from the shared state.
    pub fn start_session_handler(&self) -> StartSessionHandler {
        StartSessionHandler::new(self.sessions.clone())
    }

    pub fn suggest_symptoms_handler(&self) -> SuggestSymptomsHandler {
        SuggestSymptomsHandler::new(self.completion.clone())
    }

    pub fn next_question_handler(&self) -> NextQuestionHandler {
        NextQuestionHandler::new(self.completion.clone(), self.sessions.clone())
    }

    pub fn analyze_symptoms_handler(&self) -> AnalyzeSymptomsHandler {
        AnalyzeSymptomsHandler::new(self.completion.clone())
    }
}

/// Reads the session id header, ignoring values that do not parse.
fn session_id_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get(SESSION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Start a session, or reset the one presented in the header
pub async fn start_session(
    State(state): State<TriageAppState>,
    headers: HeaderMap,
) -> Response {
    let cmd = StartSessionCommand {
        existing: session_id_from_headers(&headers),
    };

    match state.start_session_handler().handle(cmd).await {
        Ok(session_id) => (
            [(SESSION_ID_HEADER, session_id.to_string())],
            Json(StartSessionResponse {
                session_id: session_id.to_string(),
            }),
        )
            .into_response(),
        Err(err) => store_error(err),
    }
}

/// GET /health - Service health probe
pub async fn health(State(state): State<TriageAppState>) -> Response {
    let info = state.completion.client_info();
    let response = HealthResponse {
        status: "ok".to_string(),
        service: info.name,
        model: info.model,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /get_symptoms - Suggest symptoms for raw input
///
/// The body is a bare JSON array of exactly ten suggestion strings.
pub async fn get_symptoms(
    State(state): State<TriageAppState>,
    Json(req): Json<SuggestSymptomsRequest>,
) -> Response {
    let cmd = SuggestSymptomsCommand { input: req.input };
    let suggestions = state.suggest_symptoms_handler().handle(cmd).await;
    (StatusCode::OK, Json(suggestions)).into_response()
}

/// POST /submit_symptoms - Next follow-up question for the session
pub async fn submit_symptoms(
    State(state): State<TriageAppState>,
    headers: HeaderMap,
    Json(req): Json<SubmitSymptomsRequest>,
) -> Response {
    let cmd = NextQuestionCommand {
        session_id: session_id_from_headers(&headers),
        symptoms: req.symptoms,
        detailed_symptoms: req.detailed_symptoms,
    };

    match state.next_question_handler().handle(cmd).await {
        Ok(result) => (
            [(SESSION_ID_HEADER, result.session_id.to_string())],
            Json(FollowupResponse::from_outcome(result.outcome)),
        )
            .into_response(),
        Err(NextQuestionError::Store(err)) => store_error(err),
    }
}

/// POST /analyze - Full analysis of the symptom report
pub async fn analyze(
    State(state): State<TriageAppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Response {
    let cmd = AnalyzeSymptomsCommand {
        demographics: req.demographics,
        history: req.history,
        symptoms: req.symptoms,
        detailed_symptoms: req.detailed_symptoms,
    };
    let analysis = state.analyze_symptoms_handler().handle(cmd).await;
    (StatusCode::OK, Json(analysis)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn store_error(err: SessionStoreError) -> Response {
    error!(error = %err, "session store failure");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal("session storage failed")),
    )
        .into_response()
}
