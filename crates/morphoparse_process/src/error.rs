use std::fmt;

/// Errors that can occur while spawning or waiting on an external process.
#[derive(Debug)]
pub enum ProcessError {
    /// The child process could not be started at all.
    Spawn { command: String, source: std::io::Error },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Spawn { command, source } => {
                write!(f, "failed to spawn '{command}': {source}")
            }
        }
    }
}

impl std::error::Error for ProcessError {}

pub type ProcessResult<T> = Result<T, ProcessError>;
