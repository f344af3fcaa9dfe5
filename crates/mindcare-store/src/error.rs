use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("object already exists: {key}")]
    AlreadyExists { key: String },

    #[error("invalid object key: {0:?}")]
    InvalidKey(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("read error for {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("write error for {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("delete error for {key}: {source}")]
    Delete {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("list error for {prefix}: {source}")]
    List {
        prefix: String,
        #[source]
        source: std::io::Error,
    },

    #[error("client not found: {0}")]
    ClientNotFound(Uuid),

    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    #[error("an assessment needs at least one selected symptom")]
    EmptySelection,

    #[error("invalid backup file: {0}")]
    InvalidBackup(String),

    #[error("backup version {found} is newer than this build supports ({supported})")]
    UnsupportedBackupVersion { found: String, supported: String },

    #[error(transparent)]
    InvalidRecord(#[from] mindcare_core::error::CoreError),
}
