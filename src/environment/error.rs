use std::path::PathBuf;

use crate::fsutil;

/// Errors that may occur while detecting or building an environment.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read the current working directory: {source}")]
    CurrentDir {
        #[source]
        source: std::io::Error,
    },
    #[error("unknown environment mode `{0}`")]
    UnknownMode(String),
    #[error("failed to set up environment directory: {0}")]
    SetupDir(#[from] fsutil::DirError),
    #[error(transparent)]
    FileOpen(#[from] fsutil::FileOpenError),
    #[error("failed to parse environment data in file `{path}`: {source}")]
    ParseDataFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse environment data: {0}")]
    ParseData(#[source] serde_json::Error),
    #[error("attribute `{name}` is read-only")]
    ReadOnlyAttribute { name: String },
    #[error("attribute `{name}` is reserved and cannot be supplied as environment data")]
    ReservedAttribute { name: String },
    #[error("attribute `{name}` must be a string path, got `{value}`")]
    InvalidPathOverride {
        name: String,
        value: serde_json::Value,
    },
    #[error("unknown attribute `{name}`")]
    UnknownAttribute { name: String },
    #[error("attribute `{name}` has an unexpected type: {source}")]
    AttributeType {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
