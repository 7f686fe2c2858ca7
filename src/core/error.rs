use thiserror::Error;

/// Client input was malformed or incomplete. Nothing has been written yet.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("invalid JSON body: {0}")]
    MalformedBody(String),

    #[error("companyName and clientName are required")]
    MissingParty,

    #[error("at least one valid item required")]
    NoValidItems,

    #[error("invoice total is too large")]
    TotalOutOfRange,
}

/// The PDF artifact could not be produced or written.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write invoice document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to build invoice document: {0}")]
    Pdf(String),

    #[error("render task failed: {0}")]
    Task(String),
}

/// The invoice record could not be persisted or read back.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invoice {0} already exists")]
    Duplicate(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to serialize line items: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Maps a failed insert, turning primary key violations into `Duplicate`.
    pub fn from_insert(err: sqlx::Error, id: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::Duplicate(id.to_string())
            }
            _ => StoreError::Database(err),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
pub type RenderResult<T> = Result<T, RenderError>;
pub type StoreResult<T> = Result<T, StoreError>;
