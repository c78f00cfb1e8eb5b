use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Schema version mismatch: found {found}, expected {expected}")]
    SchemaVersionMismatch { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
