/// Storage-assigned primary keys (SQLite `INTEGER PRIMARY KEY`).
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
