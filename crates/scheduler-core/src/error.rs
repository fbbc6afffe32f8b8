use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid task id: '{0}'")]
    InvalidId(String),

    #[error("Invalid date '{0}', expected YYYYMMDD")]
    MalformedDate(String),

    #[error("Repeat rule is empty")]
    EmptyRule,

    #[error("Invalid repeat rule: '{0}'")]
    MalformedRule(String),

    #[error("Repeat rule '{0}' is not supported yet")]
    UnsupportedRule(String),

    #[error("Interval of days must be between 1 and {max}, got {value}")]
    IntervalOutOfRange { value: String, max: u32 },

    #[error("Date is out of the supported calendar range")]
    DateOutOfRange,

    #[error("Task title is empty")]
    EmptyTitle,

    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),
}

impl CoreError {
    /// True when the error was caused by the caller's input rather than by
    /// the store or the environment.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            CoreError::Database(_) | CoreError::Migration(_) | CoreError::Io(_)
        )
    }
}
