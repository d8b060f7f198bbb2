//! Session data and its [`AuthService`] view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vetclinic_core::nav::AuthService;

/// What `vetclinic login` writes to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub user_id: String,
    pub username: String,
    pub role: String,
    pub api_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub logged_in_at: DateTime<Utc>,
}

/// Authentication state for one CLI invocation.
#[derive(Debug, Default)]
pub struct CliAuth {
    session: Option<StoredSession>,
}

impl CliAuth {
    pub fn new(session: Option<StoredSession>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> Option<&StoredSession> {
        self.session.as_ref()
    }

    /// The signed-in user's id, recorded on created and edited records.
    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user_id.as_str())
    }
}

impl AuthService for CliAuth {
    fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    fn user_role(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.role.as_str())
    }

    fn logout(&mut self) {
        self.session = None;
    }
}
