/// All database primary keys are PostgreSQL BIGINT. Generated keys are
/// BIGSERIAL; movie ids are the external catalog's numeric ids stored as-is.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
