//! In-Memory Session Store Adapter
//!
//! Stores per-session question histories in memory. Sessions do not survive
//! a restart, which matches their short lifetime: one symptom check.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::domain::session::QuestionHistory;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for session question histories
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, QuestionHistory>>>,
}

impl InMemorySessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    /// Get the number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self) -> Result<SessionId, SessionStoreError> {
        let session_id = SessionId::new();
        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id, QuestionHistory::new());
        Ok(session_id)
    }

    async fn load(&self, session_id: SessionId) -> Result<QuestionHistory, SessionStoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&session_id)
            .cloned()
            .ok_or(SessionStoreError::NotFound(session_id))
    }

    async fn save(
        &self,
        session_id: SessionId,
        history: &QuestionHistory,
    ) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id, history.clone());
        Ok(())
    }

    async fn reset(&self, session_id: SessionId) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id, QuestionHistory::new());
        Ok(())
    }
}
