use std::fmt;

/// Error a collaborator implementation can raise while supplying data to
/// the engine (e.g. a database lookup failing).
#[derive(Debug)]
pub enum CollabError {
    Unavailable(String),
}

impl fmt::Display for CollabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollabError::Unavailable(msg) => write!(f, "collaborator unavailable: {msg}"),
        }
    }
}

impl std::error::Error for CollabError {}
