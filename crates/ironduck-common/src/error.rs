//! Error types for IronDuck

use thiserror::Error;

/// The main error type for IronDuck operations
#[derive(Error, Debug)]
pub enum Error {
    // Parser errors
    #[error("Parse error: {0}")]
    Parse(String),

    // Catalog errors
    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Schema not found: {0}")]
    SchemaNotFound(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Table already exists: {0}")]
    TableAlreadyExists(String),

    #[error("Schema already exists: {0}")]
    SchemaAlreadyExists(String),

    // Binder errors
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // General errors
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InvalidConfig(e.to_string())
    }
}

/// Result type alias using IronDuck's Error
pub type Result<T> = std::result::Result<T, Error>;
