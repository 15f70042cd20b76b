//! Shared fakes and fixtures for the integration suite.
//!
//! [`ScriptedRunner`] implements [`morphoparse_fst::CommandRunner`], the one
//! subprocess seam both `morphoparse-fst` and `morphoparse-parser` drive
//! through, so the same fake stands in for `foma`/`flookup` whether it's
//! reached via a bare phonology/morphology object or through a composed
//! parser.

use morphoparse_base::MorphotacticRule;
use morphoparse_fst::runner::CommandRunner as FstCommandRunner;
use morphoparse_fst::FstError;
use morphoparse_lexicon::LexiconDictionary;
use morphoparse_lm::{LmConfig, Trie};
use morphoparse_parser::{LanguageModelSnapshot, MorphologySnapshot};
use morphoparse_process::CommandOutcome;
use std::cell::Cell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// A scripted stand-in for `foma`/`flookup`: `compile` writes a fixed binary
/// and logs a fixed verification string (or fails, if `compile_ok` is
/// false); `apply` looks each already-wrapped input line up in a fixed
/// response table, falling back to `+?` (no analysis) for anything absent.
pub struct ScriptedRunner {
    binary_path: PathBuf,
    verification: String,
    pub compile_ok: bool,
    responses: HashMap<String, Vec<String>>,
    pub compile_calls: Cell<u32>,
    pub apply_calls: Cell<u32>,
}

impl ScriptedRunner {
    pub fn new(binary_path: PathBuf, verification: impl Into<String>) -> Self {
        Self {
            binary_path,
            verification: verification.into(),
            compile_ok: true,
            responses: HashMap::new(),
            compile_calls: Cell::new(0),
            apply_calls: Cell::new(0),
        }
    }

    pub fn failing(mut self) -> Self {
        self.compile_ok = false;
        self
    }

    pub fn with_response(mut self, input: impl Into<String>, outputs: Vec<String>) -> Self {
        self.responses.insert(input.into(), outputs);
        self
    }
}

impl FstCommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String], stdin: Option<&[u8]>, _timeout: Duration) -> Result<CommandOutcome, FstError> {
        match program {
            "sh" => {
                self.compile_calls.set(self.compile_calls.get() + 1);
                if self.compile_ok {
                    std::fs::write(&self.binary_path, b"fake-binary").unwrap();
                    Ok(CommandOutcome {
                        status: Some(0),
                        stdout: format!("{}\n", self.verification).into_bytes(),
                        stderr: Vec::new(),
                        timed_out: false,
                    })
                } else {
                    Ok(CommandOutcome { status: Some(1), stdout: Vec::new(), stderr: b"syntax error\n".to_vec(), timed_out: false })
                }
            }
            "flookup" => {
                self.apply_calls.set(self.apply_calls.get() + 1);
                let _ = args;
                let input_text = String::from_utf8_lossy(stdin.expect("flookup is always fed stdin"));
                let mut stdout = String::new();
                for line in input_text.lines() {
                    if line.is_empty() {
                        continue;
                    }
                    let outputs = self.responses.get(line).cloned().unwrap_or_else(|| vec!["+?".to_string()]);
                    for output in outputs {
                        stdout.push_str(line);
                        stdout.push('\t');
                        stdout.push_str(&output);
                        stdout.push('\n');
                    }
                }
                Ok(CommandOutcome { status: Some(0), stdout: stdout.into_bytes(), stderr: Vec::new(), timed_out: false })
            }
            other => panic!("unexpected program invoked: {other}"),
        }
    }
}

/// Panics if the backend is ever invoked — proves a code path short-circuits
/// before reaching a subprocess at all.
pub struct PanicsIfCalled;

impl FstCommandRunner for PanicsIfCalled {
    fn run(&self, _: &str, _: &[String], _: Option<&[u8]>, _: Duration) -> Result<CommandOutcome, FstError> {
        panic!("backend should not have been invoked")
    }
}

pub fn french_dictionary() -> LexiconDictionary {
    LexiconDictionary::from_triples(vec![
        ("chien".to_string(), "dog".to_string(), "N".to_string()),
        ("s".to_string(), "PL".to_string(), "PHI".to_string()),
        ("s".to_string(), "POSS".to_string(), "GEN".to_string()),
    ])
}

pub fn french_morphology_snapshot(rich_morphemes: bool) -> MorphologySnapshot {
    MorphologySnapshot {
        rare_delimiter: '\u{2980}',
        rich_morphemes,
        rules: vec![MorphotacticRule::new("N-PHI", 5), MorphotacticRule::new("N-GEN", 1)],
        dictionary: french_dictionary(),
    }
}

/// A back-off trie scoring every `(token, logprob)` pair given, plus the
/// default `<s>`/`</s>` sentinels, all as unigrams — enough to bias
/// `get_most_probable` toward whichever candidate's tokens score higher,
/// without needing a real n-gram corpus.
pub fn lm_snapshot(entries: &[(&str, f64)]) -> LanguageModelSnapshot {
    let mut trie = Trie::new();
    trie.insert(&["<s>".to_string()], -0.1, Some(0.0));
    trie.insert(&["</s>".to_string()], -0.1, None);
    for (token, score) in entries {
        trie.insert(&[token.to_string()], *score, None);
    }
    LanguageModelSnapshot { config: LmConfig::default(), trie }
}
