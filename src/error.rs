use thiserror::Error;

use crate::models::ResourceKind;

#[derive(Debug, Error)]
pub enum ContractError {
    /// JSON did not have the shape of the requested record.
    #[error("payload does not match the {kind} shape: {source}")]
    Shape {
        kind: ResourceKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown resource kind: {0}")]
    UnknownKind(String),

    #[error("created_at is not an RFC 3339 timestamp: {value}")]
    Timestamp {
        value: String,
        #[source]
        source: time::error::Parse,
    },

    #[error("configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, ContractError>;
