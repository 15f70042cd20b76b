//! The n-gram estimator binding. Only MITLM ships today, but the command
//! construction and verification contract are behind a trait so a second
//! toolkit could be added without touching [`crate::generate`]'s public API.

use std::path::Path;

/// A command-line n-gram estimator toolkit.
pub trait Toolkit {
    fn executable(&self) -> &'static str;

    /// The argv (excluding the executable itself) for generating an ARPA
    /// file of the given order/smoothing from a corpus, optionally
    /// constrained to a vocabulary.
    fn command_args(&self, order: u32, smoothing: &str, corpus_path: &Path, arpa_path: &Path, vocabulary_path: Option<&Path>) -> Vec<String>;

    /// The substring the estimator's log contains on success.
    fn verification_string(&self, arpa_path: &Path) -> String;
}

/// MIT Language Modeling toolkit (`estimate-ngram`), the only toolkit the
/// original implementation supports.
#[derive(Debug, Default, Clone, Copy)]
pub struct MitlmToolkit;

impl Toolkit for MitlmToolkit {
    fn executable(&self) -> &'static str {
        "estimate-ngram"
    }

    fn command_args(&self, order: u32, smoothing: &str, corpus_path: &Path, arpa_path: &Path, vocabulary_path: Option<&Path>) -> Vec<String> {
        let mut args = vec![
            "-o".to_string(),
            order.to_string(),
            "-s".to_string(),
            smoothing.to_string(),
            "-t".to_string(),
            corpus_path.display().to_string(),
            "-wl".to_string(),
            arpa_path.display().to_string(),
        ];
        if let Some(vocab) = vocabulary_path {
            args.push("-v".to_string());
            args.push(vocab.display().to_string());
        }
        args
    }

    fn verification_string(&self, arpa_path: &Path) -> String {
        format!("Saving LM to {}", arpa_path.display())
    }
}

/// The default smoothing algorithm, matching the original's fallback when
/// none is configured.
pub const DEFAULT_SMOOTHING: &str = "ModKN";
