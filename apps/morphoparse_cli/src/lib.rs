//! `morphoparse` CLI
//!
//! Command-line interface over the morphological parser engine: compile
//! phonologies/morphologies/language models/parsers and run apply/parse
//! passes against a filesystem artifact root, with no database and no
//! server in the loop.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `phonology-compile` | Save and compile a phonology script |
//! | `phonology-apply` | Apply a compiled phonology up or down |
//! | `morphology-compile` | Save and compile a morphology (regex or lexc) script |
//! | `morphology-apply` | Apply a compiled morphology up or down |
//! | `lm-generate` | Estimate an ARPA file and its back-off trie |
//! | `lm-score` | Score a token sequence under a generated language model |
//! | `parser-compile` | Compose a phonology and morphology into a parser |
//! | `parser-parse` | Parse a batch of surface transcriptions |
//! | `parser-clear-cache` | Discard a parser's persisted parse cache |
//!
//! # Module Structure
//!
//! - [`cli`] — command-line argument parsing and dispatch
//! - [`config`] — per-object TOML configuration loading
//! - [`fixtures`] — file-backed stand-ins for the database-backed
//!   lexicon/rules collaborators

pub mod cli;
pub mod config;
pub mod fixtures;

/// Entry point for the CLI. Parses command-line arguments and executes the
/// appropriate command. See [`cli::run_cli`] for details.
pub use cli::run_cli;
