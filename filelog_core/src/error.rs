use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("cannot create log directory {path:?}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("cannot append to log file {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("the file {path:?} can't be parsed: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("configuration error: {0}")]
    Config(String),
}

impl LogError {
    /// True for failures of the append path.
    pub fn is_write(&self) -> bool {
        matches!(self, LogError::Write { .. })
    }

    /// True for failures of the read-all path.
    pub fn is_read(&self) -> bool {
        matches!(self, LogError::Read { .. })
    }

    /// Filesystem location the failure refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            LogError::CreateDir { path, .. }
            | LogError::Write { path, .. }
            | LogError::Read { path, .. } => Some(path),
            LogError::Config(_) => None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log level: {0}")]
pub struct UnknownLevel(pub String);

pub type Result<T> = std::result::Result<T, LogError>;
