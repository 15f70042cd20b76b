use std::fmt;

#[derive(Debug)]
pub enum LmError {
    /// The estimator ran but its log never contained the expected
    /// verification string, or the ARPA file's mtime never advanced.
    Generation { message: String },

    /// The ARPA file's grammar could not be parsed.
    ArpaParse { message: String },

    /// A persisted trie blob could not be decoded.
    CorruptTrie(bincode::Error),

    Backend(morphoparse_process::ProcessError),
    Store(morphoparse_store::StoreError),
}

impl fmt::Display for LmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LmError::Generation { message } => write!(f, "ARPA generation failed: {message}"),
            LmError::ArpaParse { message } => write!(f, "malformed ARPA file: {message}"),
            LmError::CorruptTrie(e) => write!(f, "corrupt trie blob: {e}"),
            LmError::Backend(e) => write!(f, "subprocess backend error: {e}"),
            LmError::Store(e) => write!(f, "artifact store error: {e}"),
        }
    }
}

impl std::error::Error for LmError {}

impl From<morphoparse_process::ProcessError> for LmError {
    fn from(e: morphoparse_process::ProcessError) -> Self {
        LmError::Backend(e)
    }
}

impl From<morphoparse_store::StoreError> for LmError {
    fn from(e: morphoparse_store::StoreError) -> Self {
        LmError::Store(e)
    }
}

pub type LmResult<T> = Result<T, LmError>;
