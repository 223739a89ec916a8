use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A timestamped 1:1 meeting session for one member.
///
/// `ended_at` is null while the session is open and is set exactly once;
/// there is no reopen. At most one session per member may be open at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingSession {
    pub id: String,
    pub team_member_id: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl MeetingSession {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }
}

/// Membership of an agenda item in a session's snapshot.
///
/// Rows in one batch share `added_at`; `position` breaks the tie so the
/// snapshot reads back in stable insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionAgendaLink {
    pub session_id: String,
    pub agenda_item_id: String,
    pub added_at: DateTime<Utc>,
    pub position: i64,
}
