//! Error types for geosite-unpack.

use thiserror::Error;

/// Error type for unpack operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed geosite input
    #[error("failed to decode geosite list: {0}")]
    Decode(#[from] DecodeError),

    /// Selector references a tag missing from the index
    #[error("cannot find entry {0}")]
    UnknownTag(String),

    /// Rule carries a match type code outside the known range
    #[error("invalid domain type {0}")]
    InvalidRuleType(i32),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Failure while saving one output group
    #[error("failed to save {label}: {source}")]
    Save {
        label: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an error with the label of the group being written.
    pub fn saving(label: impl Into<String>, source: Error) -> Self {
        Error::Save {
            label: label.into(),
            source: Box::new(source),
        }
    }

    /// Strip any `Save` context and return the underlying error.
    pub fn root(&self) -> &Error {
        match self {
            Error::Save { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<prost::DecodeError> for Error {
    fn from(e: prost::DecodeError) -> Self {
        Error::Decode(DecodeError::Protobuf(e))
    }
}

/// Ways a geosite input can be malformed.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Invalid protobuf framing
    #[error("{0}")]
    Protobuf(prost::DecodeError),

    /// Corrupt or truncated gzip stream
    #[error("gzip: {0}")]
    Gzip(std::io::Error),
}

/// Result type alias for unpack operations.
pub type Result<T> = std::result::Result<T, Error>;
