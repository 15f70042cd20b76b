//! A file-backed stand-in for the database-backed collaborators a real
//! deployment would supply. Production code hands [`morphoparse_parser`] a
//! `&dyn LexiconProvider`/`&dyn RulesProvider` backed by whatever store holds
//! a project's elicited lexicon and its observed morphotactic rules; this
//! CLI hands it the same pair of traits backed by one TOML fixture file
//! instead.

use morphoparse_collab::{CollabError, LexiconProvider, RulesProvider};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
struct LexiconEntry {
    form: String,
    gloss: String,
    category: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RuleEntry {
    sequence: String,
    count: u64,
}

/// `entries` feeds [`LexiconProvider`], `rules` feeds [`RulesProvider`] —
/// both read from the same file since a CLI invocation has no reason to
/// juggle two paths for what is, in production, two queries against the
/// same project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconFixture {
    #[serde(default)]
    entries: Vec<LexiconEntry>,
    #[serde(default)]
    rules: Vec<RuleEntry>,
}

impl LexiconFixture {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read lexicon fixture {}: {e}", path.display()))?;
        toml::from_str(&text).map_err(|e| format!("malformed lexicon fixture {}: {e}", path.display()).into())
    }
}

impl LexiconProvider for LexiconFixture {
    fn entries(&self) -> Result<Vec<(String, String, String)>, CollabError> {
        Ok(self
            .entries
            .iter()
            .map(|e| (e.form.clone(), e.gloss.clone(), e.category.clone()))
            .collect())
    }
}

impl RulesProvider for LexiconFixture {
    fn category_sequences(&self) -> Result<Vec<(String, u64)>, CollabError> {
        Ok(self.rules.iter().map(|r| (r.sequence.clone(), r.count)).collect())
    }
}
