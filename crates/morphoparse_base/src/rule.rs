//! A morphotactic rule as it comes out of `rules_generated`: a sequence of
//! categories observed joined by whitespace, with the number of lexicon
//! entries that generated it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One observed category sequence, e.g. `"V Agr Tns"`, and how many times a
/// rules provider counted it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MorphotacticRule {
    pub category_sequence: String,
    pub count: u64,
}

impl MorphotacticRule {
    pub fn new(category_sequence: impl Into<String>, count: u64) -> Self {
        Self {
            category_sequence: category_sequence.into(),
            count,
        }
    }
}
