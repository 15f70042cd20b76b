//! Replaces the original implementation's string-keyed `object_type`/
//! `tablename2object_type` maps with a closed enum, so every crate that
//! needs to branch on "which kind of FST object is this" does so
//! exhaustively instead of against string literals.

use std::fmt;

/// The kind of object an artifact directory, compiled FST, or n-gram model
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Phonology,
    Morphology,
    LanguageModel,
    Parser,
}

impl ObjectKind {
    /// The lowercase name used in `<name>_<id>` artifact directories.
    pub const fn directory_stem(self) -> &'static str {
        match self {
            ObjectKind::Phonology => "phonology",
            ObjectKind::Morphology => "morphology",
            ObjectKind::LanguageModel => "languagemodel",
            ObjectKind::Parser => "morphologicalparser",
        }
    }

    /// The stem used for the object's own files within its directory
    /// (before the file-type extension is appended).
    pub const fn file_stem(self) -> &'static str {
        self.directory_stem()
    }

    /// The foma `regex <name>;` identifier used when compiling phonology or
    /// morphology, and the verification phrase's object-type word.
    pub const fn regex_name(self) -> &'static str {
        match self {
            ObjectKind::Phonology => "phonology",
            ObjectKind::Morphology => "morphology",
            ObjectKind::LanguageModel => "languagemodel",
            ObjectKind::Parser => "morphologicalparser",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.directory_stem())
    }
}
