//! The phonology specialization: a morpheme-boundary-respecting foma
//! transducer that always applies with word boundaries on.

use crate::config::FstConfig;
use crate::driver;
use crate::error::FstResult;
use crate::runner::CommandRunner;
use crate::spec::{Direction, FstSpec};
use morphoparse_store::ArtifactLayout;
use std::collections::HashMap;

pub const OBJECT_TYPE: &str = "phonology";

/// Builds the [`FstSpec`] for a phonology object compiled from a `regex`
/// script (phonologies have no lexc variant).
pub fn spec() -> FstSpec {
    FstSpec {
        object_type: OBJECT_TYPE.to_string(),
        boundaries: true,
        verification_substring: FstSpec::regex_verification(OBJECT_TYPE),
    }
}

pub fn save_script(layout: &ArtifactLayout, script: &str) -> FstResult<()> {
    driver::save_script(layout, script, OBJECT_TYPE)
}

pub fn compile(runner: &dyn CommandRunner, layout: &ArtifactLayout, config: &FstConfig) -> FstResult<()> {
    driver::compile(runner, layout, &spec(), config.compile_timeout())
}

/// Phonologies always apply with word boundaries on, regardless of config.
pub fn apply(
    runner: &dyn CommandRunner,
    layout: &ArtifactLayout,
    direction: Direction,
    inputs: &[String],
    config: &FstConfig,
) -> FstResult<HashMap<String, Vec<String>>> {
    driver::apply(runner, layout, direction, inputs, true, &config.word_boundary_symbol, config.apply_timeout())
}
