//! Axum router configuration for triage endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    analyze, get_symptoms, health, start_session, submit_symptoms, TriageAppState,
};

/// Create the triage API router.
///
/// # Routes
/// - `GET /` - Start a session, or reset the one in the `x-session-id` header
/// - `GET /health` - Service health probe
/// - `POST /get_symptoms` - Suggest symptoms for raw input
/// - `POST /submit_symptoms` - Next follow-up question for the session
/// - `POST /analyze` - Full analysis of the symptom report
pub fn triage_routes() -> Router<TriageAppState> {
    Router::new()
        .route("/", get(start_session))
        .route("/health", get(health))
        .route("/get_symptoms", post(get_symptoms))
        .route("/submit_symptoms", post(submit_symptoms))
        .route("/analyze", post(analyze))
}
