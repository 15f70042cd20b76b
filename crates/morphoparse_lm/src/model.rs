use crate::trie::Trie;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for a language model object, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LmConfig {
    pub order: u32,
    pub smoothing: String,
    pub rare_delimiter: char,
    pub start_symbol: String,
    pub end_symbol: String,
    /// When true, candidates are scored over their category sequence
    /// (the third rich-morpheme field) rather than their full
    /// `form⦀gloss⦀category` tokens.
    pub categorial: bool,
    pub generate_timeout_secs: u64,
}

impl Default for LmConfig {
    fn default() -> Self {
        Self {
            order: 3,
            smoothing: crate::toolkit::DEFAULT_SMOOTHING.to_string(),
            rare_delimiter: morphoparse_base::delimiters::DEFAULT_RARE_DELIMITER,
            start_symbol: "<s>".to_string(),
            end_symbol: "</s>".to_string(),
            categorial: false,
            generate_timeout_secs: 30 * 60,
        }
    }
}

impl LmConfig {
    pub fn generate_timeout(&self) -> Duration {
        Duration::from_secs(self.generate_timeout_secs)
    }
}

/// A compiled language model: configuration plus the trie it scores
/// sequences against.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    pub config: LmConfig,
    trie: Trie,
}

impl LanguageModel {
    pub fn new(config: LmConfig, trie: Trie) -> Self {
        Self { config, trie }
    }

    /// The log-probability of a single space-delimited sequence of
    /// morpheme tokens, with start/end sentinels added automatically.
    pub fn probability(&self, tokens: &[String]) -> f64 {
        let mut wrapped = Vec::with_capacity(tokens.len() + 2);
        wrapped.push(self.config.start_symbol.clone());
        wrapped.extend(tokens.iter().cloned());
        wrapped.push(self.config.end_symbol.clone());
        self.trie.sentence_logprob(&wrapped)
    }

    /// The log-probabilities of several morpheme sequences, keyed by the
    /// original (unwrapped) sequence.
    pub fn probabilities<'a, I>(&self, sequences: I) -> Vec<(String, f64)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        sequences
            .into_iter()
            .map(|seq| {
                let tokens: Vec<String> = seq.split_whitespace().map(str::to_string).collect();
                (seq.to_string(), self.probability(&tokens))
            })
            .collect()
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}
