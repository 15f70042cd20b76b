use crate::error::{LexiconError, LexiconResult};
use morphoparse_base::RichMorpheme;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A surface form's every attested `(gloss, category)` analysis, as
/// synthesized from a `LexiconProvider`'s entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexiconDictionary {
    entries: HashMap<String, Vec<(String, String)>>,
}

impl LexiconDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from `(form, gloss, category)` triples, as
    /// supplied by a `LexiconProvider`.
    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = (String, String, String)>,
    {
        let mut entries: HashMap<String, Vec<(String, String)>> = HashMap::new();
        for (form, gloss, category) in triples {
            let analyses = entries.entry(form).or_default();
            let pair = (gloss, category);
            if !analyses.contains(&pair) {
                analyses.push(pair);
            }
        }
        Self { entries }
    }

    /// Every `(gloss, category)` analysis attested for `form`, or an empty
    /// slice if the form is unknown to the lexicon.
    pub fn analyses(&self, form: &str) -> &[(String, String)] {
        self.entries.get(form).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All rich-morpheme reconstructions for `form`: one [`RichMorpheme`]
    /// per attested `(gloss, category)` pairing.
    pub fn rich_morphemes(&self, form: &str) -> Vec<RichMorpheme> {
        self.analyses(form)
            .iter()
            .map(|(gloss, category)| RichMorpheme::new(form, gloss.clone(), category.clone()))
            .collect()
    }

    pub fn contains(&self, form: &str) -> bool {
        self.entries.contains_key(form)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_bytes(&self) -> LexiconResult<Vec<u8>> {
        bincode::serialize(self).map_err(LexiconError::Encode)
    }

    pub fn from_bytes(bytes: &[u8]) -> LexiconResult<Self> {
        bincode::deserialize(bytes).map_err(LexiconError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_triples_and_dedupes() {
        let dict = LexiconDictionary::from_triples(vec![
            ("chien".to_string(), "dog".to_string(), "N".to_string()),
            ("chien".to_string(), "dog".to_string(), "N".to_string()),
            ("chien".to_string(), "to.hound".to_string(), "V".to_string()),
        ]);
        assert_eq!(dict.analyses("chien").len(), 2);
        assert!(!dict.contains("chat"));
    }

    #[test]
    fn round_trips_through_bincode() {
        let dict = LexiconDictionary::from_triples(vec![("a".to_string(), "b".to_string(), "c".to_string())]);
        let bytes = dict.to_bytes().unwrap();
        let back = LexiconDictionary::from_bytes(&bytes).unwrap();
        assert_eq!(dict, back);
    }

    #[test]
    fn reconstructs_rich_morphemes() {
        let dict = LexiconDictionary::from_triples(vec![("chien".to_string(), "dog".to_string(), "N".to_string())]);
        let morphemes = dict.rich_morphemes("chien");
        assert_eq!(morphemes, vec![RichMorpheme::new("chien", "dog", "N")]);
    }
}
