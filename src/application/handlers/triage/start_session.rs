//! StartSessionHandler - Command handler for starting a symptom check.
//!
//! Starting a check is what resets the follow-up interview: a fresh session
//! begins with an empty question history, and re-entering with a known
//! session wipes that session's history.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// Command to start (or restart) a symptom-check session.
#[derive(Debug, Clone, Default)]
pub struct StartSessionCommand {
    /// Existing session to reset; `None` mints a new session.
    pub existing: Option<SessionId>,
}

/// Handler for starting sessions.
pub struct StartSessionHandler {
    sessions: Arc<dyn SessionStore>,
}

impl StartSessionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: StartSessionCommand) -> Result<SessionId, SessionStoreError> {
        match cmd.existing {
            Some(session_id) => {
                self.sessions.reset(session_id).await?;
                debug!(session_id = %session_id, "session reset for new symptom check");
                Ok(session_id)
            }
            None => {
                let session_id = self.sessions.create().await?;
                debug!(session_id = %session_id, "session created");
                Ok(session_id)
            }
        }
    }
}
