//src/error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, UcError>;

/// Everything that can stop a report from being produced.
#[derive(Error, Debug)]
pub enum UcError {
    /// Missing, conflicting or invalid options (no mode, two modes, no label, ...)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An input or output path could not be opened
    #[error("cannot open '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Percentages were requested for a cluster with no label matches
    #[error("cluster {cluster} has no reads matching any label, percentages are undefined")]
    EmptyCluster { cluster: u32 },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl UcError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        UcError::Configuration(msg.into())
    }

    pub fn file_access<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        UcError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
