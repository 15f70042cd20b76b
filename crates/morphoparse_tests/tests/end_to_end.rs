//! End-to-end scenarios exercising a composed parser (and, for the
//! phonology-only scenario, a bare phonology object) through the same
//! scripted `foma`/`flookup` seam a real deployment would drive through an
//! installed toolkit.

mod common;

use common::{french_morphology_snapshot, lm_snapshot, PanicsIfCalled, ScriptedRunner};
use morphoparse_base::ObjectKind;
use morphoparse_fst::{phonology, Direction, FstConfig};
use morphoparse_parser::{MorphologicalParser, ParserConfig};
use morphoparse_store::{ArtifactLayout, FileType};
use tempfile::tempdir;

fn new_parser() -> (tempfile::TempDir, MorphologicalParser) {
    let tmp = tempdir().unwrap();
    let layout = ArtifactLayout::new(tmp.path(), ObjectKind::Parser, 1, "morphologicalparser_1");
    let parser = MorphologicalParser::new(layout, ParserConfig::default(), Box::new(morphoparse_cache::BlobParseCache::in_memory()));
    (tmp, parser)
}

fn morphophonology_runner(binary_path: std::path::PathBuf) -> ScriptedRunner {
    ScriptedRunner::new(binary_path, morphoparse_fst::FstSpec::regex_verification(morphoparse_parser::VERIFICATION_OBJECT_NAME))
}

/// Scenario 1: a toy French phonology/morphology pair whose morphology
/// already emits rich (`form⦀gloss⦀category`) tokens parses "tombait" in
/// one pass, no dictionary disambiguation needed.
#[test]
fn parses_a_toy_french_rich_morpheme_form() {
    let (_tmp, mut parser) = new_parser();
    parser.save_script("define phonology id;\n", "define morphology id;\n").unwrap();

    let runner = morphophonology_runner(parser.layout().path(FileType::Binary)).with_response(
        "#tombait#",
        vec!["#tombe\u{2980}fall\u{2980}V-ait\u{2980}3SG.IMPV\u{2980}AGR#".to_string()],
    );
    parser.compile(&runner).unwrap();

    let mut morphology = french_morphology_snapshot(true);
    morphology.rules.clear(); // rich-morpheme mode never consults the rule set
    let language_model = lm_snapshot(&[("tombe\u{2980}fall\u{2980}V", -0.2), ("ait\u{2980}3SG.IMPV\u{2980}AGR", -0.3)]);
    parser.take_snapshot(morphology, language_model).unwrap();

    let result = parser.parse_one(&runner, "tombait").unwrap();
    assert_eq!(result, Some("tombe\u{2980}fall\u{2980}V-ait\u{2980}3SG.IMPV\u{2980}AGR".to_string()));
}

/// Scenarios 2 and 3: re-pointing the language model a parser scores
/// against does not disturb an answer already sitting in the cache; only
/// after the cache is explicitly cleared does the new language model's
/// preference take effect.
#[test]
fn repointing_the_language_model_only_changes_answers_after_the_cache_is_cleared() {
    let (_tmp, mut parser) = new_parser();
    parser.save_script("define phonology id;\n", "define morphology id;\n").unwrap();

    let candidate_plural = "chien\u{2980}dog\u{2980}N-s\u{2980}PL\u{2980}PHI";
    let candidate_genitive = "chien\u{2980}dog\u{2980}N-s\u{2980}POSS\u{2980}GEN";
    let runner = morphophonology_runner(parser.layout().path(FileType::Binary))
        .with_response("#chiens#", vec!["#chien-s#".to_string()]);
    parser.compile(&runner).unwrap();

    // The language model scores each `-`-split morpheme separately, not the
    // whole candidate string; "chien⦀dog⦀N" is shared by both readings, so
    // only the scores of the second morpheme need to differ to flip which
    // candidate wins.
    let morphology = french_morphology_snapshot(false);
    let lm_favoring_plural =
        lm_snapshot(&[("chien\u{2980}dog\u{2980}N", -0.2), ("s\u{2980}PL\u{2980}PHI", -0.1), ("s\u{2980}POSS\u{2980}GEN", -5.0)]);
    parser.take_snapshot(morphology.clone(), lm_favoring_plural).unwrap();

    let first = parser.parse_one(&runner, "chiens").unwrap();
    assert_eq!(first, Some(candidate_plural.to_string()));

    // Re-point at a language model favoring the other reading, but the
    // cache is untouched: the already-cached answer must not move, and the
    // backend must not be touched to re-derive it.
    let lm_favoring_genitive =
        lm_snapshot(&[("chien\u{2980}dog\u{2980}N", -0.2), ("s\u{2980}PL\u{2980}PHI", -5.0), ("s\u{2980}POSS\u{2980}GEN", -0.1)]);
    parser.take_snapshot(morphology, lm_favoring_genitive).unwrap();
    let still_cached = parser.parse_one(&PanicsIfCalled, "chiens").unwrap();
    assert_eq!(still_cached, first);

    // Clearing the cache and re-parsing lets the new language model's
    // preference take effect.
    parser.clear_cache(false).unwrap();
    let after_clear = parser.parse_one(&runner, "chiens").unwrap();
    assert_eq!(after_clear, Some(candidate_genitive.to_string()));
}

/// Scenario 4: with an impoverished morphology (`rich_morphemes = false`),
/// disambiguation against the dictionary reconstructs a full rich-morpheme
/// parse string from the FST's bare-form output.
#[test]
fn disambiguates_an_impoverished_morphology_into_a_rich_parse_string() {
    let (_tmp, mut parser) = new_parser();
    parser.save_script("define phonology id;\n", "define morphology id;\n").unwrap();

    let runner = morphophonology_runner(parser.layout().path(FileType::Binary))
        .with_response("#chiens#", vec!["#chien-s#".to_string()]);
    parser.compile(&runner).unwrap();

    let morphology = french_morphology_snapshot(false);
    let language_model = lm_snapshot(&[
        ("chien\u{2980}dog\u{2980}N", -0.2),
        ("s\u{2980}PL\u{2980}PHI", -0.1),
        ("s\u{2980}POSS\u{2980}GEN", -5.0),
    ]);
    parser.take_snapshot(morphology, language_model).unwrap();

    let result = parser.parse_one(&runner, "chiens").unwrap();
    assert_eq!(result, Some("chien\u{2980}dog\u{2980}N-s\u{2980}PL\u{2980}PHI".to_string()));
}

/// Scenario 5: an unknown surface form yields an explicit null parse, and
/// that null is itself cached, so a second call never touches the backend.
#[test]
fn an_unparseable_surface_form_yields_a_cached_null() {
    let (_tmp, mut parser) = new_parser();
    parser.save_script("define phonology id;\n", "define morphology id;\n").unwrap();

    let runner = morphophonology_runner(parser.layout().path(FileType::Binary));
    parser.compile(&runner).unwrap();

    let morphology = french_morphology_snapshot(true);
    let language_model = lm_snapshot(&[]);
    parser.take_snapshot(morphology, language_model).unwrap();

    let first = parser.parse_one(&runner, "xyzzy").unwrap();
    assert_eq!(first, None);
    assert_eq!(runner.apply_calls.get(), 1);

    let second = parser.parse_one(&PanicsIfCalled, "xyzzy").unwrap();
    assert_eq!(second, None);
}

/// Scenario 6: a phonology composing two rewrite rules (`eDrop`, `breakDrop`
/// in the original's own fixtures) applies down on "nage-ait" to yield
/// "nageait".
#[test]
fn composed_phonology_rules_apply_down_correctly() {
    let tmp = tempdir().unwrap();
    let layout = ArtifactLayout::new(tmp.path(), ObjectKind::Phonology, 1, "phonology_1");
    phonology::save_script(&layout, "define phonology eDrop .o. breakDrop;\n").unwrap();

    let runner = ScriptedRunner::new(layout.path(FileType::Binary), morphoparse_fst::FstSpec::regex_verification("phonology"))
        .with_response("#nage-ait#", vec!["#nageait#".to_string()]);
    phonology::compile(&runner, &layout, &FstConfig::default()).unwrap();

    let result = phonology::apply(&runner, &layout, Direction::Down, &["nage-ait".to_string()], &FstConfig::default()).unwrap();
    assert_eq!(result.get("nage-ait"), Some(&vec!["nageait".to_string()]));
}
