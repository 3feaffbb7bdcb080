/// Flow runs and tasks are identified by server-assigned UUIDs.
pub type RunId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
