use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A discussion item on a member's agenda, optionally scheduled for a future date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaItem {
    pub id: String,
    pub team_member_id: String,
    pub content: String,
    pub completed: bool,
    pub scheduled_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Partial update for an agenda item.
///
/// `scheduled_date` is doubly optional: `None` leaves the date untouched,
/// `Some(None)` clears it, `Some(Some(d))` reschedules.
#[derive(Debug, Clone, Default)]
pub struct AgendaItemUpdate {
    pub content: Option<String>,
    pub completed: Option<bool>,
    pub scheduled_date: Option<Option<NaiveDate>>,
}

/// Whether an open agenda item is relevant "now": undated items always are,
/// dated items once their scheduled date has arrived.
///
/// `today` is the caller's local calendar date. Callers must use one
/// consistent calendar-day definition per request or day-boundary items
/// flicker between views.
#[must_use]
pub fn relevant_now_open(item: &AgendaItem, today: NaiveDate) -> bool {
    if item.completed {
        return false;
    }
    match item.scheduled_date {
        None => true,
        Some(date) => date <= today,
    }
}
