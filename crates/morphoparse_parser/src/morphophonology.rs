//! Composes an already-compiled phonology and morphology's script sources
//! into the parser's own "morphophonology" transducer, then drives it
//! through the same generic compile/apply machinery
//! `morphoparse-fst`'s phonology and morphology specializations use.
//!
//! The original implementation builds this composed transducer in its
//! database model layer, which was not retrieved alongside `parser.py` —
//! only the `MorphologicalParser` class driving an already-compiled
//! artifact survives in the available source. The composition strategy
//! here is therefore a deliberate decision rather than a direct port:
//! foma's standard transducer-composition operator joins the morphology's
//! analysis-to-lexical mapping with the phonology's lexical-to-surface
//! mapping, `define morphologicalparser morphology .o. phonology;` — the
//! same `.o.` idiom the original's own test fixtures use to compose two
//! phonological rules (`define phonology eDrop .o. breakDrop;`).

use crate::config::ParserConfig;
use morphoparse_fst::driver;
use morphoparse_fst::runner::CommandRunner;
use morphoparse_fst::spec::{Direction, FstSpec};
use morphoparse_fst::FstError;
use morphoparse_store::ArtifactLayout;
use std::collections::HashMap;

/// The foma `regex <name>;` identifier the composed transducer is compiled
/// under.
pub const OBJECT_TYPE: &str = "morphologicalparser";

/// `object_type2file_name` in the original maps `"morphologicalparser"` to
/// `"morphophonology"` for the compiler's verification string only — the
/// `regex` identifier used to *define* the composed transducer and the
/// substring checked in its compile log are deliberately different words.
pub const VERIFICATION_OBJECT_NAME: &str = "morphophonology";

pub fn spec() -> FstSpec {
    FstSpec {
        object_type: OBJECT_TYPE.to_string(),
        boundaries: true,
        verification_substring: FstSpec::regex_verification(VERIFICATION_OBJECT_NAME),
    }
}

/// Combines a compiled phonology's and morphology's own `.script` sources
/// (each already defining a regex named `phonology`/`morphology`
/// respectively) into one script defining the composed
/// `morphologicalparser` regex over both.
pub fn compose_script(phonology_script: &str, morphology_script: &str) -> String {
    format!("{phonology_script}\n{morphology_script}\ndefine {OBJECT_TYPE} morphology .o. phonology;\n")
}

pub fn save_script(layout: &ArtifactLayout, script: &str) -> Result<(), FstError> {
    driver::save_script(layout, script, OBJECT_TYPE)
}

pub fn compile(runner: &dyn CommandRunner, layout: &ArtifactLayout, config: &ParserConfig) -> Result<(), FstError> {
    driver::compile(runner, layout, &spec(), config.compile_timeout())
}

/// Applies the composed transducer. Always applies with word boundaries on
/// (see [`crate::config::BOUNDARIES`]), regardless of configuration.
pub fn apply(
    runner: &dyn CommandRunner,
    layout: &ArtifactLayout,
    direction: Direction,
    inputs: &[String],
    config: &ParserConfig,
) -> Result<HashMap<String, Vec<String>>, FstError> {
    driver::apply(
        runner,
        layout,
        direction,
        inputs,
        crate::config::BOUNDARIES,
        config.word_boundary_symbol(),
        config.apply_timeout(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_phonology_and_morphology_via_foma_composition() {
        let script = compose_script("define phonology id;", "define morphology id;");
        assert!(script.contains("define phonology id;"));
        assert!(script.contains("define morphology id;"));
        assert!(script.contains("define morphologicalparser morphology .o. phonology;"));
    }

    #[test]
    fn verification_checks_the_morphophonology_name_not_the_regex_name() {
        let spec = spec();
        assert_eq!(spec.object_type, "morphologicalparser");
        assert_eq!(spec.verification_substring, "defined morphophonology: ");
    }
}
