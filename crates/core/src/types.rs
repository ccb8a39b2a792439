/// All database primary keys are SQLite INTEGER PRIMARY KEY (rowid) values.
pub type DbId = i64;

/// Current UTC time as ISO 8601 text with fixed millisecond precision.
///
/// Timestamps are persisted as TEXT; the fixed width keeps string comparison
/// consistent with chronological order (`updated_at >= created_at` is checked
/// lexicographically).
pub fn now_utc() -> String {
    chrono::Utc::now()
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
