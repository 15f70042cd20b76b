use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for an FST object, loadable from TOML so a deployment can check
/// a phonology/morphology's configuration into version control alongside
/// its corpora.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FstConfig {
    pub word_boundary_symbol: String,
    pub rare_delimiter: char,
    pub compile_timeout_secs: u64,
    pub apply_timeout_secs: u64,
}

impl Default for FstConfig {
    fn default() -> Self {
        Self {
            word_boundary_symbol: crate::spec::DEFAULT_WORD_BOUNDARY_SYMBOL.to_string(),
            rare_delimiter: morphoparse_base::delimiters::DEFAULT_RARE_DELIMITER,
            compile_timeout_secs: 30 * 60,
            apply_timeout_secs: 60,
        }
    }
}

impl FstConfig {
    pub fn compile_timeout(&self) -> Duration {
        Duration::from_secs(self.compile_timeout_secs)
    }

    pub fn apply_timeout(&self) -> Duration {
        Duration::from_secs(self.apply_timeout_secs)
    }
}
