use std::fmt;

#[derive(Debug)]
pub enum LexiconError {
    Encode(bincode::Error),
    Decode(bincode::Error),
    Io(std::io::Error),
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconError::Encode(e) => write!(f, "failed to encode lexicon dictionary: {e}"),
            LexiconError::Decode(e) => write!(f, "failed to decode lexicon dictionary: {e}"),
            LexiconError::Io(e) => write!(f, "I/O error on lexicon dictionary: {e}"),
        }
    }
}

impl std::error::Error for LexiconError {}

pub type LexiconResult<T> = Result<T, LexiconError>;
