//! Session Store Port - Interface for per-session question history.
//!
//! The store keeps one [`QuestionHistory`] per session. The only consumer is
//! the follow-up interview, which loads the history before asking the
//! completion service for a question and saves it afterwards. Lookups of
//! unknown sessions are a normal event, not a fault: HTTP callers may present
//! stale or missing session identifiers and get a fresh history.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::session::QuestionHistory;

/// Session store errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    /// No history exists for the given session.
    #[error("session not found: {0}")]
    NotFound(SessionId),

    /// Backend failure while reading or writing.
    #[error("session storage failed: {0}")]
    Storage(String),
}

impl SessionStoreError {
    /// Creates a storage backend error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

/// Port for session history persistence.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Creates a fresh session with an empty question history.
    async fn create(&self) -> Result<SessionId, SessionStoreError>;

    /// Loads the question history for a session.
    ///
    /// Returns [`SessionStoreError::NotFound`] if the session was never
    /// created or has been dropped.
    async fn load(&self, session_id: SessionId) -> Result<QuestionHistory, SessionStoreError>;

    /// Saves the question history for a session, creating the session if it
    /// does not exist yet.
    async fn save(
        &self,
        session_id: SessionId,
        history: &QuestionHistory,
    ) -> Result<(), SessionStoreError>;

    /// Resets a session to an empty question history.
    ///
    /// Resetting an unknown session creates it empty; the result is the
    /// same either way.
    async fn reset(&self, session_id: SessionId) -> Result<(), SessionStoreError>;
}
