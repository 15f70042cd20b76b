//! # morphoparse-collab
//!
//! Trait interfaces for the parser engine's external collaborators: the
//! lexicon source, the rules source, the acting user, and the clock.
//!
//! These are deliberately small and object-safe so production code can hand
//! the parser a `&dyn LexiconProvider` backed by a real database and tests
//! can hand it a plain struct holding a `Vec`, without either side needing
//! to know about the other.

mod clock;
mod error;

pub use clock::{Clock, SystemClock};
pub use error::CollabError;

/// Supplies the `(form, gloss, category)` triples a lexicon dictionary is
/// built from.
pub trait LexiconProvider {
    fn entries(&self) -> Result<Vec<(String, String, String)>, CollabError>;
}

/// Supplies the observed `(category_sequence, count)` pairs used to filter
/// disambiguation candidates.
pub trait RulesProvider {
    fn category_sequences(&self) -> Result<Vec<(String, u64)>, CollabError>;
}

/// Identifies the user on whose behalf an object is being compiled, for
/// attribution in artifact metadata.
pub trait UserIdentity {
    fn id(&self) -> String;
}
