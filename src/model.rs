// Core structs: PriceRecord, Snapshot, ChangeRecord, DiffResult and error types
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One player's price as captured from a single fetch.
/// `price` is in tenths of £m, exactly as the API reports `now_cost`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub name: String,
    pub team: String,
    pub price: u32,
}

/// Player id -> price record. Iteration order is insertion order.
pub type Snapshot = IndexMap<String, PriceRecord>;

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRecord {
    pub name: String,
    pub team: String,
    pub old_price: f64,
    pub new_price: f64,
    /// Always positive, direction is given by the list the record sits in.
    pub change: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffResult {
    pub risers: Vec<ChangeRecord>,
    pub fallers: Vec<ChangeRecord>,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.risers.is_empty() && self.fallers.is_empty()
    }
}

/// Identifier of a created post.
pub type PostId = String;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Data source responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Unexpected bootstrap payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error("Invalid deadline time '{0}'")]
    InvalidDeadline(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Snapshot I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Corrupt snapshot at {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Publisher rejected credentials after {attempts} attempt(s): {message}")]
    Unauthorized { attempts: u32, message: String },
    #[error("Publisher API error [{status}]: {body}")]
    Api { status: u16, body: String },
    #[error("Publisher HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to sign request: {0}")]
    Signing(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PublishError {
    /// Authorization-class failures are absorbed by the jobs, everything else is surfaced.
    pub fn is_auth(&self) -> bool {
        matches!(self, PublishError::Unauthorized { .. })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),
}

/// Anything that stops a job from completing.
#[derive(Debug, Error)]
pub enum JobError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}
