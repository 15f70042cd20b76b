//! # morphoparse-lexicon
//!
//! The disambiguation lexicon dictionary a morphology built in
//! `rich_morphemes = false` mode relies on: a map from surface form to every
//! `(gloss, category)` pairing that form is attested with, persisted as a
//! single blob alongside the morphology's other artifacts.
//!
//! # Design Principles
//!
//! This crate has no knowledge of foma, subprocesses, or the parser's
//! ranking logic — it is purely the dictionary and its persistence.

mod dictionary;
mod error;

pub use dictionary::LexiconDictionary;
pub use error::LexiconError;
