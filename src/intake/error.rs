use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Contact {0} not found")]
    ContactNotFound(i64),

    #[error("{0}")]
    Api(String),

    #[error("Not signed in (run `intake login <email> <password>`)")]
    Unauthorized,
}

pub type Result<T> = std::result::Result<T, IntakeError>;
