/// Primary keys of serial tables are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Primary keys of externally addressable tables are UUIDs.
pub type Uid = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
