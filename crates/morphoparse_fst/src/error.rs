use std::fmt;

#[derive(Debug)]
pub enum FstError {
    /// `apply` or `run_tests` was called on an object with no successfully
    /// compiled binary on disk.
    NotCompiled,

    /// The compiler ran to completion but its log never contained the
    /// expected verification substring, i.e. the script itself was
    /// malformed for the declared object type.
    VerificationMiss { object_type: String },

    /// The compiler's verification substring was present but either the
    /// exit code was non-zero or the binary's mtime never advanced.
    CompileFailed { message: String },

    /// The underlying subprocess could not be run at all.
    Backend(morphoparse_process::ProcessError),

    /// A filesystem operation against the artifact directory failed.
    Store(morphoparse_store::StoreError),
}

impl fmt::Display for FstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FstError::NotCompiled => write!(f, "no compiled binary is available"),
            FstError::VerificationMiss { object_type } => {
                write!(f, "script is not a well-formed {object_type}")
            }
            FstError::CompileFailed { message } => write!(f, "compilation failed: {message}"),
            FstError::Backend(e) => write!(f, "subprocess backend error: {e}"),
            FstError::Store(e) => write!(f, "artifact store error: {e}"),
        }
    }
}

impl std::error::Error for FstError {}

impl From<morphoparse_process::ProcessError> for FstError {
    fn from(e: morphoparse_process::ProcessError) -> Self {
        FstError::Backend(e)
    }
}

impl From<morphoparse_store::StoreError> for FstError {
    fn from(e: morphoparse_store::StoreError) -> Self {
        FstError::Store(e)
    }
}

pub type FstResult<T> = Result<T, FstError>;
