//! The dependency-replication pattern: a parser never reads its morphology
//! or language model live. It reads a frozen copy taken once, at
//! [`crate::MorphologicalParser::take_snapshot`] time.
//!
//! In a multi-user setting, updating a referenced morphology or language
//! model object should not silently change an already-compiled parser's
//! behavior — the parser must be explicitly resnapshotted (and, in
//! practice, recompiled against the new morphophonology transducer) for
//! such a change to take effect. This matters specifically for the parse
//! cache: if a live reference could change a parser's answers out from
//! under it, the cache would keep serving parses that no longer reflect
//! what the parser would currently produce, with nothing to signal that
//! the cache needs clearing.

use morphoparse_base::MorphotacticRule;
use morphoparse_collab::{CollabError, LexiconProvider, RulesProvider};
use morphoparse_lexicon::LexiconDictionary;
use morphoparse_lm::LmConfig;
use morphoparse_lm::Trie;

/// A frozen copy of a morphology object's parsing-relevant state.
#[derive(Debug, Clone)]
pub struct MorphologySnapshot {
    pub rare_delimiter: char,
    /// When `true`, the morphology's own FST output already carries full
    /// `form⦀gloss⦀category` tokens and `disambiguate` is skipped entirely.
    pub rich_morphemes: bool,
    pub rules: Vec<MorphotacticRule>,
    pub dictionary: LexiconDictionary,
}

impl MorphologySnapshot {
    /// Builds a snapshot straight from a morphology's live collaborators —
    /// the usual way a caller takes one, since the dictionary and rule set
    /// otherwise live behind whatever storage backs `LexiconProvider`/
    /// `RulesProvider` (a database, in the original; anything object-safe
    /// here). Category sequences the rules provider counted fewer than
    /// `min_rule_count` times are dropped before they ever reach
    /// disambiguation.
    pub fn build(
        rare_delimiter: char,
        rich_morphemes: bool,
        lexicon: &dyn LexiconProvider,
        rules: &dyn RulesProvider,
        min_rule_count: u64,
    ) -> Result<Self, CollabError> {
        let dictionary = LexiconDictionary::from_triples(lexicon.entries()?);
        let rules = rules
            .category_sequences()?
            .into_iter()
            .filter(|(_, count)| *count >= min_rule_count)
            .map(|(sequence, count)| MorphotacticRule::new(sequence, count))
            .collect();
        Ok(Self { rare_delimiter, rich_morphemes, rules, dictionary })
    }
}

/// A frozen copy of a language model's scoring state.
#[derive(Debug, Clone)]
pub struct LanguageModelSnapshot {
    pub config: LmConfig,
    pub trie: Trie,
}

/// The pair of snapshots a compiled parser scores candidates against.
#[derive(Debug, Clone)]
pub struct ParserSnapshot {
    pub morphology: MorphologySnapshot,
    pub language_model: LanguageModelSnapshot,
}
