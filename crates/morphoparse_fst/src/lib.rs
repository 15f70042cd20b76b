//! # morphoparse-fst
//!
//! A driver for foma-compiled finite-state transducers: save a script,
//! compile it to a binary, apply it to a batch of transcriptions, and run
//! any `#test` lines embedded in the script.
//!
//! Rather than a phonology/morphology class hierarchy, this crate has a
//! single [`driver`] that both [`phonology`] and [`morphology`] configure
//! with an [`FstSpec`](spec::FstSpec) describing how their script type's
//! verification substring is built and which extra files they need. This
//! mirrors what the original system achieves through subclassing, without
//! the brittleness of overriding half a dozen methods to change one string.
//!
//! # Error Categories
//!
//! | Category | Variants | Meaning |
//! |----------|----------|---------|
//! | State | `NotCompiled` | `apply`/`run_tests` called before a successful compile |
//! | Compile | `VerificationMiss`, `CompileFailed` | The compiler ran but didn't produce a valid binary |
//! | Backend | `Backend` | The external process itself failed to run |

pub mod config;
pub mod driver;
mod error;
pub mod morphology;
pub mod phonology;
pub mod runner;
pub mod spec;

pub use config::FstConfig;
pub use driver::compile_attempt;
pub use error::FstError;
pub use runner::{CommandRunner, ProcessCommandRunner};
pub use spec::{Direction, FstSpec};
