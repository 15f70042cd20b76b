//! An in-memory back-off trie over token n-grams.
//!
//! Each node reached by following a token path stores the conditional
//! log-probability of the sequence ending there and, separately, a
//! back-off weight used when extending that same context by one more
//! token. Querying a context that was never seen at full length walks
//! back to shorter and shorter suffixes, accumulating back-off weights in
//! log space, down to the unigram floor.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Log-probability assigned to a token with no entry anywhere in the trie,
/// even at unigram length — the floor under which nothing is ever scored.
pub const UNIGRAM_FLOOR: f64 = -99.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct Node {
    logprob: Option<f64>,
    backoff: Option<f64>,
    children: HashMap<String, Node>,
}

/// A back-off n-gram trie, as generated from an ARPA file by [`crate::arpa::parse`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Trie {
    root: Node,
    /// The highest n-gram order actually inserted; bounds the sliding
    /// window a sentence score is computed over.
    order: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the log-probability of `ngram` (a full token sequence, the
    /// last token being the one conditioned on everything before it) and,
    /// optionally, the back-off weight for that same sequence used when
    /// extending it by one further token.
    pub fn insert(&mut self, ngram: &[String], logprob: f64, backoff: Option<f64>) {
        self.order = self.order.max(ngram.len());
        let mut node = &mut self.root;
        for token in ngram {
            node = node.children.entry(token.clone()).or_default();
        }
        node.logprob = Some(logprob);
        node.backoff = backoff;
    }

    fn find(&self, ngram: &[String]) -> Option<&Node> {
        let mut node = &self.root;
        for token in ngram {
            node = node.children.get(token)?;
        }
        Some(node)
    }

    pub fn lookup_logprob(&self, ngram: &[String]) -> Option<f64> {
        self.find(ngram).and_then(|n| n.logprob)
    }

    pub fn lookup_backoff(&self, ngram: &[String]) -> Option<f64> {
        self.find(ngram).and_then(|n| n.backoff)
    }

    /// The highest n-gram order seen during construction.
    pub fn order(&self) -> usize {
        self.order.max(1)
    }

    /// The conditional log-probability of the last token of `ngram` given
    /// everything before it, backing off to shorter contexts (dropping the
    /// oldest/leftmost token each time) when the full sequence was never
    /// observed, down to [`UNIGRAM_FLOOR`] if even the unigram is unknown.
    pub fn prob(&self, ngram: &[String]) -> f64 {
        if ngram.is_empty() {
            return UNIGRAM_FLOOR;
        }
        if let Some(lp) = self.lookup_logprob(ngram) {
            return lp;
        }
        if ngram.len() == 1 {
            return UNIGRAM_FLOOR;
        }
        let context = &ngram[..ngram.len() - 1];
        let backoff_weight = self.lookup_backoff(context).unwrap_or(0.0);
        let shortened = &ngram[1..];
        backoff_weight + self.prob(shortened)
    }

    /// The total log-probability of a token sequence (typically already
    /// wrapped in start/end sentinels), summing each position's
    /// conditional probability over a sliding window no longer than
    /// [`Self::order`].
    pub fn sentence_logprob(&self, tokens: &[String]) -> f64 {
        let order = self.order();
        let mut total = 0.0;
        for k in 0..tokens.len() {
            let start = k.saturating_sub(order.saturating_sub(1));
            total += self.prob(&tokens[start..=k]);
        }
        total
    }
}
