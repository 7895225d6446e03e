use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// A scheduling rule rejected a new competition
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("A competition must last at least 30 minutes")]
    Duration,

    #[error("There is already a competition scheduled at the same time")]
    SameTime,

    #[error("A venue cannot host more than 4 competitions on the same day")]
    Quantity,
}

/// Failure while validating or storing a new competition
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Rule(#[from] RuleViolation),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

