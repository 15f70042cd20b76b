//! A single gloss/category-tagged morpheme and its flattened token form.
//!
//! The FST backend has no notion of a three-field tuple; it only ever
//! produces and consumes a single string. [`RichMorpheme::to_token`] and
//! [`RichMorpheme::from_token`] are the named, tested round trip that keeps
//! the flattening logic in one place instead of ad hoc string building at
//! every call site.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A morpheme annotated with its gloss and grammatical category, as stored
/// in a lexicon dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RichMorpheme {
    pub form: String,
    pub gloss: String,
    pub category: String,
}

/// Error returned by [`RichMorpheme::from_token`] when a token does not
/// contain exactly two occurrences of the delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFormatError {
    pub token: String,
}

impl fmt::Display for TokenFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed rich morpheme token: {:?}", self.token)
    }
}

impl std::error::Error for TokenFormatError {}

impl RichMorpheme {
    pub fn new(form: impl Into<String>, gloss: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            gloss: gloss.into(),
            category: category.into(),
        }
    }

    /// Joins `form`, `gloss`, and `category` with `delimiter`.
    pub fn to_token(&self, delimiter: char) -> String {
        let mut s = String::with_capacity(self.form.len() + self.gloss.len() + self.category.len() + 2);
        s.push_str(&self.form);
        s.push(delimiter);
        s.push_str(&self.gloss);
        s.push(delimiter);
        s.push_str(&self.category);
        s
    }

    /// Inverse of [`Self::to_token`]. Fails if `token` does not split into
    /// exactly three fields on `delimiter`.
    pub fn from_token(token: &str, delimiter: char) -> Result<Self, TokenFormatError> {
        let parts: Vec<&str> = token.split(delimiter).collect();
        let [form, gloss, category] = parts.as_slice() else {
            return Err(TokenFormatError { token: token.to_string() });
        };
        Ok(Self::new(*form, *gloss, *category))
    }
}
