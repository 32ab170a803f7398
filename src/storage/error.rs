use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while moving a relation to or from disk. A load that fails
/// never hands back a partially filled relation.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("unable to open relation file {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("unable to read relation file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("unable to write relation file {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("relation file {path:?} is {len} bytes, which is not a whole number of {arity}-ary tuples")]
    Misaligned { path: PathBuf, len: u64, arity: usize },

    #[error("unable to allocate {bytes} bytes to load relation file {path:?}")]
    OutOfMemory { path: PathBuf, bytes: u64 },
}

pub type Result<T> = std::result::Result<T, StorageError>;
