//! Error types for catalog construction, lookup and export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the catalog layer.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown topic `{0}`")]
    UnknownTopic(String),

    #[error("unknown subtopic `{id}` in topic `{topic}`")]
    UnknownSubtopic { topic: String, id: String },

    #[error("unknown category `{0}`")]
    UnknownCategory(String),

    #[error("invalid content path `{0}`; expected `topic/subtopic`")]
    InvalidPath(String),

    /// Only raised when strict id checking is enabled.
    #[error("duplicate subtopic id `{id}` in topic `{topic}`")]
    DuplicateId { topic: String, id: String },

    /// Only raised when strict id checking is enabled.
    #[error("duplicate topic id `{0}`")]
    DuplicateTopic(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("i/o error on `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
