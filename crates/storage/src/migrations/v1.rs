//! Migration v1: Initial schema

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS teams (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    owner_user_id TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS team_members (
    id TEXT PRIMARY KEY,
    team_id TEXT NOT NULL REFERENCES teams(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    role TEXT,
    current_focus TEXT,
    growth_goals TEXT,
    one_on_one_themes TEXT,
    feedback_preferences TEXT,
    profile_raw_input TEXT,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS agenda_items (
    id TEXT PRIMARY KEY,
    team_member_id TEXT NOT NULL REFERENCES team_members(id) ON DELETE CASCADE,
    content TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0,
    scheduled_date TEXT,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS meeting_sessions (
    id TEXT PRIMARY KEY,
    team_member_id TEXT NOT NULL REFERENCES team_members(id) ON DELETE CASCADE,
    started_at TEXT NOT NULL,
    ended_at TEXT
);

CREATE TABLE IF NOT EXISTS meeting_session_agenda_items (
    session_id TEXT NOT NULL REFERENCES meeting_sessions(id) ON DELETE CASCADE,
    agenda_item_id TEXT NOT NULL REFERENCES agenda_items(id) ON DELETE CASCADE,
    added_at TEXT NOT NULL,
    position INTEGER NOT NULL,
    PRIMARY KEY (session_id, agenda_item_id)
);

CREATE INDEX IF NOT EXISTS idx_teams_owner ON teams(owner_user_id);
CREATE INDEX IF NOT EXISTS idx_members_team ON team_members(team_id);
CREATE INDEX IF NOT EXISTS idx_agenda_member ON agenda_items(team_member_id);
CREATE INDEX IF NOT EXISTS idx_sessions_member ON meeting_sessions(team_member_id);
CREATE INDEX IF NOT EXISTS idx_session_items_session ON meeting_session_agenda_items(session_id);
";
