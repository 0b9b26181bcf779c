use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrdError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("Unknown phrasing mode: {0}")]
    UnknownPhrasing(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PrdError>;
