//! Configurable separators shared across phonology, morphology, and the
//! language model.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Character used to join `(form, gloss, category)` into a single token when
/// no morpheme delimiter could plausibly appear in any of the three fields.
///
/// Defaults to U+2980 (`⦀`, TRIPLE VERTICAL BAR DELIMITER), chosen because it
/// is vanishingly unlikely to occur in a field linguist's transcription.
pub const DEFAULT_RARE_DELIMITER: char = '\u{2980}';

/// Separators and sentinel symbols an object (phonology, morphology,
/// language model, or parser) is configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Delimiters {
    /// Joins `form`, `gloss`, and `category` into one rich-morpheme token.
    pub rare_delimiter: char,
    /// Characters that separate morphemes within a word, e.g. `['-']`.
    pub morpheme_delimiters: Vec<char>,
    /// Symbol marking a word boundary in FST output, e.g. `"#"`.
    pub word_boundary_symbol: String,
    /// Sentence-start symbol fed to the language model, e.g. `"<s>"`.
    pub start_symbol: String,
    /// Sentence-end symbol fed to the language model, e.g. `"</s>"`.
    pub end_symbol: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            rare_delimiter: DEFAULT_RARE_DELIMITER,
            morpheme_delimiters: vec!['-'],
            word_boundary_symbol: "#".to_string(),
            start_symbol: "<s>".to_string(),
            end_symbol: "</s>".to_string(),
        }
    }
}

impl Delimiters {
    /// True if `c` is one of the configured morpheme delimiters.
    pub fn is_morpheme_delimiter(&self, c: char) -> bool {
        self.morpheme_delimiters.contains(&c)
    }
}
