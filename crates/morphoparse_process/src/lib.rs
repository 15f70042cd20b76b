//! # morphoparse-process
//!
//! A subprocess runner for the external toolkits (`foma`, `flookup`,
//! `estimate-ngram`) the parser engine shells out to.
//!
//! Every invocation is bounded by a wall-clock timeout. On timeout the whole
//! process tree is killed in one signal by running the child in its own
//! process group, rather than walking `ps` output to find descendants the
//! way the system this crate replaces did.
//!
//! # Error Categories
//!
//! | Category | Variants | Meaning |
//! |----------|----------|---------|
//! | Launch | `Spawn` | The child process could not be started |
//! | Bound | `Timeout` | The child ran past its wall-clock budget and was killed |
//! | Logging | `LogOpen` | A log file could not be opened (recovered: falls back to the null device) |

mod error;
mod runner;

pub use error::ProcessError;
pub use runner::{CommandOutcome, ProcessRunner};
