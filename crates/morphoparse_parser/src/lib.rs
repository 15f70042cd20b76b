//! # morphoparse-parser
//!
//! Composes a compiled phonology and morphology into one morphophonology
//! transducer, applies it upward over surface transcriptions, disambiguates
//! and ranks the resulting candidates against a language model, and caches
//! the winning parse per transcription.
//!
//! # Design Principles
//!
//! A parser never reads its morphology or language model live — it reads a
//! [`snapshot`] frozen once at [`MorphologicalParser::take_snapshot`] time,
//! so that re-pointing a parser's configuration at different upstream
//! objects cannot silently change an already-compiled parser's answers
//! (and, by extension, invalidate its cache) without an explicit step. See
//! the [`snapshot`] module docs for the full rationale.
//!
//! # Error Categories
//!
//! | Category | Variants | Meaning |
//! |----------|----------|---------|
//! | State | `NoSnapshot` | `parse`/`parse_one` called before a snapshot was taken |
//! | Backend | `Backend` | The composed transducer failed to compile or apply |
//! | Persistence | `Cache` | The parse cache failed to flush |
//! | Configuration | `Configuration` | The parser's own configuration is inconsistent |

mod config;
mod disambiguate;
mod error;
mod morphophonology;
mod parser;
pub mod snapshot;

pub use config::{ParserConfig, BOUNDARIES};
pub use disambiguate::{split_morphemes_only, split_with_delimiters};
pub use error::{ParserError, ParserResult};
pub use morphophonology::{compose_script, OBJECT_TYPE, VERIFICATION_OBJECT_NAME};
pub use parser::MorphologicalParser;
pub use snapshot::{LanguageModelSnapshot, MorphologySnapshot, ParserSnapshot};
