use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to access one of the compared files. Covers open, read and
/// decoding failures; the comparator never recovers from any of them.
#[derive(Error, Debug)]
pub enum FileAccessError {
    #[error("cannot open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path:?} line {line} is not valid {encoding}")]
    Decode {
        path: PathBuf,
        line: usize,
        encoding: &'static str,
    },
}

impl FileAccessError {
    pub fn path(&self) -> &PathBuf {
        match self {
            FileAccessError::Open { path, .. }
            | FileAccessError::Read { path, .. }
            | FileAccessError::Decode { path, .. } => path,
        }
    }
}
