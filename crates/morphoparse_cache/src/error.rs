use std::fmt;

#[derive(Debug)]
pub enum CacheError {
    /// The persisted blob existed but could not be decoded. Recovered by
    /// the caller treating the cache as empty — never propagated further
    /// than a logged warning.
    Corrupt(bincode::Error),
    Io(std::io::Error),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::Corrupt(e) => write!(f, "corrupt cache blob: {e}"),
            CacheError::Io(e) => write!(f, "I/O error on cache blob: {e}"),
        }
    }
}

impl std::error::Error for CacheError {}
