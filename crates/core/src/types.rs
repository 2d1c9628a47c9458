/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Id value a record carries before the store has assigned one.
pub const UNASSIGNED_ID: DbId = 0;
