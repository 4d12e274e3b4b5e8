use std::path::PathBuf;
use thiserror::Error;

/// Error type shared by every healthd crate.
#[derive(Debug, Error)]
pub enum HealthError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("could not open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not enumerate '{}': {source}", path.display())]
    Enumeration {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("property error: {0}")]
    Property(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = HealthError> = std::result::Result<T, E>;
