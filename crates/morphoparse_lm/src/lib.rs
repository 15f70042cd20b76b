//! # morphoparse-lm
//!
//! An ARPA-backed n-gram morpheme language model: generates an ARPA file
//! via an external estimator toolkit, parses it into a back-off [`Trie`],
//! and scores morpheme (or, in "categorial" mode, category) sequences.
//!
//! # Design Principles
//!
//! [`Trie`] and [`arpa`] are pure data structures with no I/O of their own;
//! [`toolkit`] and [`generate`] own the one external-process boundary this
//! crate has (invoking the n-gram estimator), behind the same small
//! `CommandRunner` seam `morphoparse-fst` uses, so both crates' subprocess
//! work can be test-doubled the same way.
//!
//! # Error Categories
//!
//! | Category | Variants | Meaning |
//! |----------|----------|---------|
//! | Estimation | `Generation` | The toolkit ran but didn't produce a valid ARPA file |
//! | Parsing | `ArpaParse` | The ARPA file's grammar was malformed |
//! | Persistence | `CorruptTrie` | A persisted trie blob could not be decoded |

pub mod arpa;
mod error;
pub mod generate;
pub mod model;
pub mod runner;
pub mod toolkit;
pub mod trie;

pub use error::LmError;
pub use generate::generate_attempt;
pub use model::{LanguageModel, LmConfig};
pub use runner::{CommandRunner, ProcessCommandRunner};
pub use toolkit::{MitlmToolkit, Toolkit};
pub use trie::Trie;
