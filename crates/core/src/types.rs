/// All generated primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Server-stamped timestamps (`criado_em`, `atualizado_em`) are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Caller-supplied instants are stored timezone-naive.
pub type LocalTimestamp = chrono::NaiveDateTime;
