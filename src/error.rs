use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Input the caller should never have passed, e.g. a glossary document
    /// that is neither an entry array nor an object with a `terms` array.
    #[error("contract violation: {0}")]
    ContractViolation(String),

    #[error("configuration error: {0}")]
    Config(String),
}
