use thiserror::Error;

/// Recoverable errors: configuration and user-supplied names.
///
/// Programmer errors (a placeholder sample format reaching the encoder, a
/// degenerate volume segment) are not represented here; they panic.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no configuration file found (looked for {0})")]
    ConfigMissing(String),

    #[error("failed to read {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is empty")]
    ConfigEmpty { path: String },

    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("unknown sample format \"{0}\"")]
    UnknownFormat(String),

    #[error("invalid volume range: min_db {min_db} is above max_db {max_db}")]
    InvalidVolumeRange { max_db: i64, min_db: i64 },

    #[error("sample format \"{0}\" cannot be used for output")]
    UnusableFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
