use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum StoreError {
    /// The artifact directory could not be created for a reason other than
    /// "it already exists" (e.g. a permissions error, or a parent path that
    /// is itself a regular file).
    CreateDirectory { path: PathBuf, source: std::io::Error },

    /// A read or write against a file within an artifact directory failed.
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::CreateDirectory { path, source } => {
                write!(f, "failed to create artifact directory '{}': {source}", path.display())
            }
            StoreError::Io { path, source } => {
                write!(f, "I/O error on '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;
