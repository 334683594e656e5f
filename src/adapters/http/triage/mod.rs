//! HTTP adapter for triage endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnalyzeRequest, ErrorResponse, FollowupResponse, HealthResponse, StartSessionResponse,
    SubmitSymptomsRequest, SuggestSymptomsRequest,
};
pub use handlers::{TriageAppState, SESSION_ID_HEADER};
pub use routes::triage_routes;
