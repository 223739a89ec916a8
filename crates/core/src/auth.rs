use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bearer-token session issued by the auth provider.
///
/// The application only verifies and extends these rows; it does not
/// implement an authentication protocol of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// The authenticated caller, as resolved from a verified session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: String,
}
