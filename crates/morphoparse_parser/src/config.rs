use morphoparse_base::Delimiters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A parser's own morphophonology transducer is always applied with word
/// boundaries on, regardless of any configuration — ported from the
/// original's `MorphologicalParser.boundaries = True` class attribute,
/// which (unlike `Morphology.boundaries`) is never overridden per instance.
pub const BOUNDARIES: bool = true;

/// Tunables for a morphological parser object, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    pub delimiters: Delimiters,
    /// Whether `parse`/`parse_one` flush the cache to disk after running.
    pub persist_cache: bool,
    pub compile_timeout_secs: u64,
    pub apply_timeout_secs: u64,
    /// The minimum observed count a rules provider's category sequence must
    /// reach to become a recognized morphotactic rule; see
    /// [`crate::snapshot::MorphologySnapshot::build`].
    pub min_rule_count: u64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiters: Delimiters::default(),
            persist_cache: true,
            compile_timeout_secs: 30 * 60,
            apply_timeout_secs: 60,
            min_rule_count: 1,
        }
    }
}

impl ParserConfig {
    pub fn compile_timeout(&self) -> Duration {
        Duration::from_secs(self.compile_timeout_secs)
    }

    pub fn apply_timeout(&self) -> Duration {
        Duration::from_secs(self.apply_timeout_secs)
    }

    pub fn word_boundary_symbol(&self) -> &str {
        &self.delimiters.word_boundary_symbol
    }
}
