use std::fmt;

#[derive(Debug)]
pub enum ParserError {
    /// The parser's configuration is internally inconsistent, e.g. a
    /// configured rare delimiter that collides with a morpheme delimiter.
    Configuration(String),

    /// The composed morphophonology transducer failed to compile or apply.
    Backend(morphoparse_fst::FstError),

    /// The parse cache failed to persist.
    Cache(morphoparse_cache::CacheError),

    /// `parse`/`parse_one`/`get_candidates` was called before
    /// [`crate::MorphologicalParser::take_snapshot`] had been called at
    /// least once.
    NoSnapshot,
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::Configuration(message) => write!(f, "invalid parser configuration: {message}"),
            ParserError::Backend(e) => write!(f, "morphophonology backend error: {e}"),
            ParserError::Cache(e) => write!(f, "parse cache error: {e}"),
            ParserError::NoSnapshot => {
                write!(f, "parser has no morphology/language-model snapshot; call take_snapshot first")
            }
        }
    }
}

impl std::error::Error for ParserError {}

impl From<morphoparse_fst::FstError> for ParserError {
    fn from(e: morphoparse_fst::FstError) -> Self {
        ParserError::Backend(e)
    }
}

impl From<morphoparse_cache::CacheError> for ParserError {
    fn from(e: morphoparse_cache::CacheError) -> Self {
        ParserError::Cache(e)
    }
}

pub type ParserResult<T> = Result<T, ParserError>;
