//! The morphology specialization: a foma transducer generated from either a
//! `regex` script or a `lexc` lexicon, with an attached disambiguation
//! dictionary and an optional "rich morphemes" mode.

use crate::config::FstConfig;
use crate::driver;
use crate::error::FstResult;
use crate::runner::CommandRunner;
use crate::spec::{Direction, FstSpec};
use morphoparse_store::ArtifactLayout;
use std::collections::HashMap;

pub const OBJECT_TYPE: &str = "morphology";

/// Which kind of source script a morphology was generated from; each has a
/// different compiler verification contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptType {
    /// A `regex`-defined transducer, same contract as phonology.
    Regex,
    /// A `lexc` lexicon, which the compiler reports success for with the
    /// literal string `"Done!"` instead of `"defined <type>: "`.
    Lexc,
}

/// Builds the [`FstSpec`] for a morphology object, choosing the
/// verification substring appropriate to `script_type`.
pub fn spec(script_type: ScriptType) -> FstSpec {
    let verification_substring = match script_type {
        ScriptType::Lexc => "Done!".to_string(),
        ScriptType::Regex => FstSpec::regex_verification(OBJECT_TYPE),
    };
    FstSpec {
        object_type: OBJECT_TYPE.to_string(),
        boundaries: false,
        verification_substring,
    }
}

pub fn save_script(layout: &ArtifactLayout, script: &str) -> FstResult<()> {
    driver::save_script(layout, script, OBJECT_TYPE)
}

pub fn compile(runner: &dyn CommandRunner, layout: &ArtifactLayout, script_type: ScriptType, config: &FstConfig) -> FstResult<()> {
    driver::compile(runner, layout, &spec(script_type), config.compile_timeout())
}

/// Applies the compiled morphology. `boundaries` defaults to `false` unless
/// the caller's configuration says otherwise (unlike phonology, which is
/// always `true`).
pub fn apply(
    runner: &dyn CommandRunner,
    layout: &ArtifactLayout,
    direction: Direction,
    inputs: &[String],
    boundaries: bool,
    config: &FstConfig,
) -> FstResult<HashMap<String, Vec<String>>> {
    driver::apply(runner, layout, direction, inputs, boundaries, &config.word_boundary_symbol, config.apply_timeout())
}

/// When `rich_morphemes` is `false`, the morphology emits only form
/// sequences (e.g. `chien-s`) and relies on its disambiguation dictionary
/// (persisted separately by `morphoparse-lexicon`) for the parser to
/// reconstruct gloss/category analyses; when `true`, the FST output already
/// carries the full `form⦀gloss⦀category` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MorphologyMode {
    pub rich_morphemes: bool,
}

impl Default for MorphologyMode {
    fn default() -> Self {
        Self { rich_morphemes: false }
    }
}
