//! Migration v2: at most one open session per member, enforced by the
//! database rather than read-then-write.

pub(super) const SQL: &str = "
CREATE UNIQUE INDEX IF NOT EXISTS idx_sessions_one_open_per_member
    ON meeting_sessions(team_member_id)
    WHERE ended_at IS NULL;
";
