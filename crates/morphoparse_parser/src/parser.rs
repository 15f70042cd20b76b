//! The morphological parser: compiles a composed morphophonology
//! transducer, generates and ranks candidate parses against a frozen
//! snapshot of its morphology/language-model state, and caches the result
//! per transcription.

use crate::config::ParserConfig;
use crate::disambiguate;
use crate::error::{ParserError, ParserResult};
use crate::morphophonology;
use crate::snapshot::{LanguageModelSnapshot, MorphologySnapshot, ParserSnapshot};
use morphoparse_base::{Delimiters, RichMorpheme};
use morphoparse_cache::ParseCache;
use morphoparse_fst::runner::CommandRunner;
use morphoparse_fst::spec::Direction;
use morphoparse_lm::LanguageModel;
use morphoparse_store::ArtifactLayout;
use std::collections::HashMap;

/// A compiled (or at least script-saved) morphological parser bound to one
/// artifact directory, plus the cache it consults before re-deriving a
/// parse.
pub struct MorphologicalParser {
    layout: ArtifactLayout,
    config: ParserConfig,
    snapshot: Option<ParserSnapshot>,
    cache: Box<dyn ParseCache + Send>,
}

impl MorphologicalParser {
    pub fn new(layout: ArtifactLayout, config: ParserConfig, cache: Box<dyn ParseCache + Send>) -> Self {
        Self { layout, config, snapshot: None, cache }
    }

    /// Freezes the morphology/language-model state this parser will use
    /// from now on. `parse`/`parse_one`/`get_candidates` return
    /// [`ParserError::NoSnapshot`] until this has been called at least
    /// once. Calling it again re-points the parser at new state — but, per
    /// the module docs on [`crate::snapshot`], any parses already sitting
    /// in the cache are not automatically invalidated; callers that change
    /// the underlying morphology or language model in a way that would
    /// change parse results should clear the cache explicitly.
    ///
    /// Rejects the snapshot with [`ParserError::Configuration`] if its rare
    /// delimiter or start/end symbols disagree with this parser's own
    /// configured delimiters, before the snapshot is stored and well before
    /// any subprocess is ever spawned against it.
    pub fn take_snapshot(&mut self, morphology: MorphologySnapshot, language_model: LanguageModelSnapshot) -> ParserResult<()> {
        Self::check_configuration_agreement(&self.config.delimiters, &morphology, &language_model)?;
        self.snapshot = Some(ParserSnapshot { morphology, language_model });
        Ok(())
    }

    /// Confirms the rare delimiter and LM start/end sentinels agree across
    /// the parser's own configuration, the morphology snapshot, and the
    /// language-model snapshot. A mismatch here would otherwise surface much
    /// later as silently wrong candidate splitting or LM scoring.
    fn check_configuration_agreement(
        delimiters: &Delimiters,
        morphology: &MorphologySnapshot,
        language_model: &LanguageModelSnapshot,
    ) -> ParserResult<()> {
        if delimiters.rare_delimiter != morphology.rare_delimiter {
            return Err(ParserError::Configuration(format!(
                "parser's rare delimiter {:?} does not match morphology's rare delimiter {:?}",
                delimiters.rare_delimiter, morphology.rare_delimiter
            )));
        }
        if delimiters.rare_delimiter != language_model.config.rare_delimiter {
            return Err(ParserError::Configuration(format!(
                "parser's rare delimiter {:?} does not match language model's rare delimiter {:?}",
                delimiters.rare_delimiter, language_model.config.rare_delimiter
            )));
        }
        if delimiters.start_symbol != language_model.config.start_symbol {
            return Err(ParserError::Configuration(format!(
                "parser's start symbol {:?} does not match language model's start symbol {:?}",
                delimiters.start_symbol, language_model.config.start_symbol
            )));
        }
        if delimiters.end_symbol != language_model.config.end_symbol {
            return Err(ParserError::Configuration(format!(
                "parser's end symbol {:?} does not match language model's end symbol {:?}",
                delimiters.end_symbol, language_model.config.end_symbol
            )));
        }
        Ok(())
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    fn my_morphology(&self) -> ParserResult<&MorphologySnapshot> {
        self.snapshot.as_ref().map(|s| &s.morphology).ok_or(ParserError::NoSnapshot)
    }

    fn my_language_model(&self) -> ParserResult<&LanguageModelSnapshot> {
        self.snapshot.as_ref().map(|s| &s.language_model).ok_or(ParserError::NoSnapshot)
    }

    /// Composes `phonology_script` and `morphology_script` into this
    /// parser's own morphophonology script and writes it, alongside the
    /// compiler invocation, to the artifact directory.
    pub fn save_script(&self, phonology_script: &str, morphology_script: &str) -> ParserResult<()> {
        let script = morphophonology::compose_script(phonology_script, morphology_script);
        morphophonology::save_script(&self.layout, &script)?;
        Ok(())
    }

    pub fn compile(&self, runner: &dyn CommandRunner) -> ParserResult<()> {
        if let Some(snapshot) = &self.snapshot {
            Self::check_configuration_agreement(&self.config.delimiters, &snapshot.morphology, &snapshot.language_model)?;
        }
        morphophonology::compile(runner, &self.layout, &self.config)?;
        Ok(())
    }

    /// Applies the composed transducer upward: surface transcriptions in,
    /// candidate parses out, with no disambiguation or ranking applied.
    pub fn applyup(&self, runner: &dyn CommandRunner, transcriptions: &[String]) -> ParserResult<HashMap<String, Vec<String>>> {
        Ok(morphophonology::apply(runner, &self.layout, Direction::Up, transcriptions, &self.config)?)
    }

    /// Parses every transcription, consulting and updating the cache for
    /// each, then flushes the cache once at the end if
    /// `self.config.persist_cache`.
    pub fn parse(
        &mut self,
        runner: &dyn CommandRunner,
        transcriptions: &[String],
    ) -> ParserResult<HashMap<String, Option<String>>> {
        let mut out = HashMap::with_capacity(transcriptions.len());
        for transcription in transcriptions {
            let parse = self.parse_one(runner, transcription)?;
            out.insert(transcription.clone(), parse);
        }
        if self.config.persist_cache {
            self.cache.flush()?;
        }
        Ok(out)
    }

    /// Parses a single transcription. A cache hit — whether "never
    /// attempted" or "attempted, no valid parse" — short-circuits before
    /// the backend is touched at all; see [`morphoparse_cache::ParseCache::get`].
    pub fn parse_one(&mut self, runner: &dyn CommandRunner, transcription: &str) -> ParserResult<Option<String>> {
        if let Some(cached) = self.cache.get(transcription) {
            return Ok(cached);
        }
        let candidates = self.get_candidates(runner, transcription)?;
        let parse = self.get_most_probable(&candidates)?;
        self.cache.put(transcription.to_string(), parse.clone());
        Ok(parse)
    }

    /// The morphophonologically valid candidate parses of `transcription`,
    /// disambiguated against the dictionary unless the morphology already
    /// emits rich morphemes.
    fn get_candidates(&self, runner: &dyn CommandRunner, transcription: &str) -> ParserResult<Vec<String>> {
        let batch = [transcription.to_string()];
        let applied = self.applyup(runner, &batch)?;
        let candidates = applied.get(transcription).cloned().unwrap_or_default();
        let morphology = self.my_morphology()?;
        if morphology.rich_morphemes {
            Ok(candidates)
        } else {
            Ok(disambiguate::disambiguate(&candidates, &self.config.delimiters, morphology))
        }
    }

    /// Scores every candidate under the language model (morphemes only,
    /// wrapped in start/end sentinels; categories only, in categorial
    /// mode) and returns the highest-scoring one. Ties go to whichever
    /// candidate the FST returned first (a stable sort on
    /// `(score desc, fst_order asc)`).
    fn get_most_probable(&self, candidates: &[String]) -> ParserResult<Option<String>> {
        if candidates.is_empty() {
            return Ok(None);
        }
        let morphology = self.my_morphology()?;
        let lm_snapshot = self.my_language_model()?;
        let lm = LanguageModel::new(lm_snapshot.config.clone(), lm_snapshot.trie.clone());

        let mut best: Option<(String, f64)> = None;
        for candidate in candidates {
            let morphemes = disambiguate::split_morphemes_only(candidate, &self.config.delimiters);
            let lm_input: Vec<String> = if lm_snapshot.config.categorial {
                morphemes
                    .iter()
                    .map(|token| {
                        RichMorpheme::from_token(token, morphology.rare_delimiter)
                            .map(|rm| rm.category)
                            .unwrap_or_else(|_| token.clone())
                    })
                    .collect()
            } else {
                morphemes
            };
            let score = lm.probability(&lm_input);
            let replace = match &best {
                None => true,
                Some((_, best_score)) => score > *best_score,
            };
            if replace {
                best = Some((candidate.clone(), score));
            }
        }
        Ok(best.map(|(candidate, _)| candidate))
    }

    /// Empties the parse cache. When `persist` is true, also flushes
    /// immediately so the cleared state reaches disk without waiting on the
    /// next `parse` call — mirroring the original `Cache.clear(persist=...)`.
    pub fn clear_cache(&mut self, persist: bool) -> ParserResult<()> {
        self.cache.clear(persist)?;
        Ok(())
    }

    pub fn layout(&self) -> &ArtifactLayout {
        &self.layout
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphoparse_base::{MorphotacticRule, ObjectKind};
    use morphoparse_cache::BlobParseCache;
    use morphoparse_fst::FstError;
    use morphoparse_lexicon::LexiconDictionary;
    use morphoparse_lm::{LmConfig, Trie};
    use morphoparse_process::CommandOutcome;
    use std::cell::Cell;
    use std::time::Duration;
    use tempfile::tempdir;

    /// Answers every call as a successful `flookup` invocation mapping one
    /// fixed (boundary-wrapped) surface form to one fixed analysis, and
    /// counts how many times it was actually invoked.
    struct FakeFlookupRunner {
        surface: &'static str,
        parse: &'static str,
        calls: Cell<u32>,
    }

    impl CommandRunner for FakeFlookupRunner {
        fn run(
            &self,
            program: &str,
            _args: &[String],
            _stdin: Option<&[u8]>,
            _timeout: Duration,
        ) -> Result<CommandOutcome, FstError> {
            self.calls.set(self.calls.get() + 1);
            assert_eq!(program, "flookup");
            let stdout = format!("#{}#\t#{}#\n", self.surface, self.parse).into_bytes();
            Ok(CommandOutcome { status: Some(0), stdout, stderr: Vec::new(), timed_out: false })
        }
    }

    struct PanicsIfCalledRunner;
    impl CommandRunner for PanicsIfCalledRunner {
        fn run(&self, _: &str, _: &[String], _: Option<&[u8]>, _: Duration) -> Result<CommandOutcome, FstError> {
            panic!("backend should not have been called")
        }
    }

    fn dictionary() -> LexiconDictionary {
        LexiconDictionary::from_triples(vec![
            ("chien".to_string(), "dog".to_string(), "N".to_string()),
            ("s".to_string(), "PL".to_string(), "PHI".to_string()),
        ])
    }

    fn morphology_snapshot(rich_morphemes: bool) -> MorphologySnapshot {
        MorphologySnapshot {
            rare_delimiter: '\u{2980}',
            rich_morphemes,
            rules: vec![MorphotacticRule::new("N-PHI", 1)],
            dictionary: dictionary(),
        }
    }

    fn lm_snapshot() -> LanguageModelSnapshot {
        let mut trie = Trie::new();
        trie.insert(&["<s>".to_string()], -1.0, Some(0.0));
        trie.insert(&["chien\u{2980}dog\u{2980}N".to_string()], -0.5, Some(-0.1));
        trie.insert(&["s\u{2980}PL\u{2980}PHI".to_string()], -0.3, None);
        LanguageModelSnapshot { config: LmConfig::default(), trie }
    }

    fn new_parser(cache: BlobParseCache, rich_morphemes: bool) -> MorphologicalParser {
        let tmp = tempdir().unwrap();
        let layout = ArtifactLayout::new(tmp.path(), ObjectKind::Parser, 1, "morphological_parser_1");
        let mut parser = MorphologicalParser::new(layout, ParserConfig::default(), Box::new(cache));
        parser.take_snapshot(morphology_snapshot(rich_morphemes), lm_snapshot()).unwrap();
        parser
    }

    #[test]
    fn returns_no_snapshot_error_before_any_snapshot_is_taken() {
        let tmp = tempdir().unwrap();
        let layout = ArtifactLayout::new(tmp.path(), ObjectKind::Parser, 1, "morphological_parser_1");
        let mut parser = MorphologicalParser::new(layout, ParserConfig::default(), Box::new(BlobParseCache::in_memory()));
        assert!(!parser.has_snapshot());
        let err = parser.parse_one(&PanicsIfCalledRunner, "tombait");
        assert!(matches!(err, Err(ParserError::NoSnapshot)));
    }

    #[test]
    fn take_snapshot_rejects_a_rare_delimiter_that_disagrees_with_the_morphology() {
        let tmp = tempdir().unwrap();
        let layout = ArtifactLayout::new(tmp.path(), ObjectKind::Parser, 1, "morphological_parser_1");
        let mut parser = MorphologicalParser::new(layout, ParserConfig::default(), Box::new(BlobParseCache::in_memory()));
        let mut mismatched_morphology = morphology_snapshot(true);
        mismatched_morphology.rare_delimiter = '|';

        let err = parser.take_snapshot(mismatched_morphology, lm_snapshot());
        assert!(matches!(err, Err(ParserError::Configuration(_))));
        assert!(!parser.has_snapshot());
    }

    #[test]
    fn take_snapshot_rejects_a_language_model_whose_sentinels_disagree() {
        let tmp = tempdir().unwrap();
        let layout = ArtifactLayout::new(tmp.path(), ObjectKind::Parser, 1, "morphological_parser_1");
        let mut parser = MorphologicalParser::new(layout, ParserConfig::default(), Box::new(BlobParseCache::in_memory()));
        let mut mismatched_lm = lm_snapshot();
        mismatched_lm.config.start_symbol = "<start>".to_string();

        let err = parser.take_snapshot(morphology_snapshot(true), mismatched_lm);
        assert!(matches!(err, Err(ParserError::Configuration(_))));
        assert!(!parser.has_snapshot());
    }

    #[test]
    fn cache_hit_short_circuits_without_touching_the_backend() {
        let mut cache = BlobParseCache::in_memory();
        cache.put("tombait".to_string(), Some("tombe\u{2980}fall-ait\u{2980}3SG.IMPV".to_string()));
        let mut parser = new_parser(cache, true);
        let result = parser.parse_one(&PanicsIfCalledRunner, "tombait").unwrap();
        assert_eq!(result, Some("tombe\u{2980}fall-ait\u{2980}3SG.IMPV".to_string()));
    }

    #[test]
    fn parses_and_caches_a_rich_morpheme_candidate() {
        let runner = FakeFlookupRunner {
            surface: "chiens",
            parse: "chien\u{2980}dog\u{2980}N-s\u{2980}PL\u{2980}PHI",
            calls: Cell::new(0),
        };
        let mut parser = new_parser(BlobParseCache::in_memory(), true);

        let result = parser.parse_one(&runner, "chiens").unwrap();
        assert_eq!(result, Some("chien\u{2980}dog\u{2980}N-s\u{2980}PL\u{2980}PHI".to_string()));
        assert_eq!(runner.calls.get(), 1);

        // A second call for the same transcription hits the cache and never
        // touches the backend again.
        let result_again = parser.parse_one(&PanicsIfCalledRunner, "chiens").unwrap();
        assert_eq!(result_again, result);
    }

    #[test]
    fn disambiguates_a_bare_form_candidate_against_the_dictionary() {
        let runner = FakeFlookupRunner { surface: "chiens", parse: "chien-s", calls: Cell::new(0) };
        let mut parser = new_parser(BlobParseCache::in_memory(), false);

        let result = parser.parse_one(&runner, "chiens").unwrap();
        assert_eq!(result, Some("chien\u{2980}dog\u{2980}N-s\u{2980}PL\u{2980}PHI".to_string()));
    }

    #[test]
    fn no_candidates_caches_a_none_parse() {
        let runner = FakeFlookupRunner { surface: "xyz", parse: "+?", calls: Cell::new(0) };
        let mut parser = new_parser(BlobParseCache::in_memory(), true);
        let result = parser.parse_one(&runner, "xyz").unwrap();
        assert_eq!(result, None);
        let cached_again = parser.parse_one(&PanicsIfCalledRunner, "xyz").unwrap();
        assert_eq!(cached_again, None);
    }
}
