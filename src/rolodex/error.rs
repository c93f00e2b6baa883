use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Duplicate contact id: {0}")]
    DuplicateId(String),

    #[error("Invalid page size: {0} (expected one of 5, 10, 20, 50)")]
    InvalidPageSize(String),

    #[error("Unknown sort key: {0} (expected none, dateCreated, name or email)")]
    UnknownSortKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RolodexError>;
