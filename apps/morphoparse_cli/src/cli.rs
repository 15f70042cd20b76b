//! Command-line argument parsing and dispatch.
//!
//! Every subcommand operates against one filesystem artifact root shared by
//! all objects (phonologies, morphologies, language models, and parsers
//! each get their own `<kind>_<id>` subdirectory under it, per
//! [`morphoparse_store::ArtifactLayout`]). There is no database and no
//! server: this tool exists to exercise the compile/apply/parse pipeline
//! end to end against real `foma`/`flookup`/`estimate-ngram` installs (or
//! whatever stands in for them) from a shell.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use morphoparse_base::ObjectKind;
use morphoparse_cache::{BlobParseCache, ParseCache};
use morphoparse_collab::LexiconProvider;
use morphoparse_fst::runner::ProcessCommandRunner as FstProcessRunner;
use morphoparse_fst::spec::Direction;
use morphoparse_fst::{morphology, phonology};
use morphoparse_lm::runner::ProcessCommandRunner as LmProcessRunner;
use morphoparse_lm::{generate, LanguageModel, MitlmToolkit};
use morphoparse_parser::{snapshot::LanguageModelSnapshot, MorphologicalParser, MorphologySnapshot};
use morphoparse_store::{ArtifactLayout, FileType};

use crate::config::AppConfig;
use crate::fixtures::LexiconFixture;

/// Direction of an `apply` pass, exposed to the shell without pulling
/// `morphoparse_fst::spec::Direction` (which isn't `clap::ValueEnum`) into
/// the public argument surface.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    Up,
    Down,
}

impl From<DirectionArg> for Direction {
    fn from(value: DirectionArg) -> Self {
        match value {
            DirectionArg::Up => Direction::Up,
            DirectionArg::Down => Direction::Down,
        }
    }
}

#[derive(Parser)]
#[command(name = "morphoparse")]
#[command(about = "Compile, apply, and parse against a filesystem artifact root", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file overriding the default FST/LM/parser tunables. Missing
    /// sections, and a missing file altogether, fall back to defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Save and compile a phonology object from a foma script.
    PhonologyCompile {
        /// The artifact root directory.
        root: PathBuf,
        /// Numeric object id; the artifact lands under `phonology_<id>/`.
        id: u64,
        /// Path to the foma source defining a `phonology` regex.
        #[arg(long)]
        script: PathBuf,
    },

    /// Apply a compiled phonology to a batch of surface forms.
    PhonologyApply {
        root: PathBuf,
        id: u64,
        #[arg(long, value_enum, default_value = "up")]
        direction: DirectionArg,
        /// Inputs to apply the transducer to.
        #[arg(trailing_var_arg = true)]
        inputs: Vec<String>,
    },

    /// Save and compile a morphology object from a foma or lexc script.
    MorphologyCompile {
        root: PathBuf,
        id: u64,
        #[arg(long)]
        script: PathBuf,
        /// Treat `script` as a lexc lexicon rather than a `regex` script.
        #[arg(long)]
        lexc: bool,
        /// Optional disambiguation fixture (lexicon entries + observed
        /// category sequences); persisted as the morphology's dictionary.
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },

    /// Apply a compiled morphology to a batch of forms.
    MorphologyApply {
        root: PathBuf,
        id: u64,
        #[arg(long, value_enum, default_value = "up")]
        direction: DirectionArg,
        /// Wrap inputs/outputs in word boundary symbols (off by default,
        /// unlike phonology, which always does).
        #[arg(long)]
        boundaries: bool,
        #[arg(trailing_var_arg = true)]
        inputs: Vec<String>,
    },

    /// Estimate an n-gram language model from a morpheme corpus and persist
    /// its back-off trie.
    LmGenerate {
        root: PathBuf,
        id: u64,
        /// One whitespace-tokenized sentence per line.
        #[arg(long)]
        corpus: PathBuf,
        #[arg(long)]
        vocabulary: Option<PathBuf>,
    },

    /// Score a sequence of whitespace-separated tokens under a generated
    /// language model.
    LmScore {
        root: PathBuf,
        id: u64,
        #[arg(trailing_var_arg = true)]
        tokens: Vec<String>,
    },

    /// Compose an already-compiled phonology and morphology into a parser's
    /// own morphophonology transducer and compile it.
    ParserCompile {
        root: PathBuf,
        /// The parser object's own id.
        id: u64,
        #[arg(long = "phonology-id")]
        phonology_id: u64,
        #[arg(long = "morphology-id")]
        morphology_id: u64,
    },

    /// Parse a batch of surface transcriptions: disambiguate and rank every
    /// morphophonologically valid candidate, caching the winner.
    ParserParse {
        root: PathBuf,
        id: u64,
        #[arg(long = "lm-id")]
        lm_id: u64,
        /// The disambiguation fixture (lexicon entries + observed category
        /// sequences) this parser's morphology snapshot is built from.
        #[arg(long)]
        lexicon: PathBuf,
        /// Skip disambiguation because the morphology's own FST output
        /// already carries full `form⦀gloss⦀category` tokens.
        #[arg(long = "rich-morphemes")]
        rich_morphemes: bool,
        #[arg(trailing_var_arg = true)]
        transcriptions: Vec<String>,
    },

    /// Discard a parser's persisted parse cache.
    ParserClearCache { root: PathBuf, id: u64 },
}

pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::PhonologyCompile { root, id, script } => cmd_phonology_compile(&config, root, id, script),
        Commands::PhonologyApply { root, id, direction, inputs } => {
            cmd_phonology_apply(&config, root, id, direction, inputs)
        }
        Commands::MorphologyCompile { root, id, script, lexc, lexicon } => {
            cmd_morphology_compile(&config, root, id, script, lexc, lexicon)
        }
        Commands::MorphologyApply { root, id, direction, boundaries, inputs } => {
            cmd_morphology_apply(&config, root, id, direction, boundaries, inputs)
        }
        Commands::LmGenerate { root, id, corpus, vocabulary } => cmd_lm_generate(&config, root, id, corpus, vocabulary),
        Commands::LmScore { root, id, tokens } => cmd_lm_score(&config, root, id, tokens),
        Commands::ParserCompile { root, id, phonology_id, morphology_id } => {
            cmd_parser_compile(root, id, phonology_id, morphology_id)
        }
        Commands::ParserParse { root, id, lm_id, lexicon, rich_morphemes, transcriptions } => {
            cmd_parser_parse(&config, root, id, lm_id, lexicon, rich_morphemes, transcriptions)
        }
        Commands::ParserClearCache { root, id } => cmd_parser_clear_cache(root, id),
    }
}

fn layout(root: &std::path::Path, kind: ObjectKind, id: u64) -> ArtifactLayout {
    let stem = format!("{}_{}", kind.file_stem(), id);
    ArtifactLayout::new(root, kind, id, stem)
}

fn cmd_phonology_compile(
    config: &AppConfig,
    root: PathBuf,
    id: u64,
    script_path: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let layout = layout(&root, ObjectKind::Phonology, id);
    let script = std::fs::read_to_string(&script_path)?;
    phonology::save_script(&layout, &script)?;
    phonology::compile(&FstProcessRunner, &layout, &config.fst)?;
    println!("compiled phonology_{id} at {}", layout.directory().display());
    Ok(())
}

fn cmd_phonology_apply(
    config: &AppConfig,
    root: PathBuf,
    id: u64,
    direction: DirectionArg,
    inputs: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let layout = layout(&root, ObjectKind::Phonology, id);
    let results = phonology::apply(&FstProcessRunner, &layout, direction.into(), &inputs, &config.fst)?;
    print_apply_results(&inputs, &results);
    Ok(())
}

fn cmd_morphology_compile(
    config: &AppConfig,
    root: PathBuf,
    id: u64,
    script_path: PathBuf,
    lexc: bool,
    lexicon_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let layout = layout(&root, ObjectKind::Morphology, id);
    let script = std::fs::read_to_string(&script_path)?;
    let script_type = if lexc { morphology::ScriptType::Lexc } else { morphology::ScriptType::Regex };
    morphology::save_script(&layout, &script)?;
    morphology::compile(&FstProcessRunner, &layout, script_type, &config.fst)?;

    if let Some(lexicon_path) = lexicon_path {
        let fixture = LexiconFixture::load(&lexicon_path)?;
        let dictionary = morphoparse_lexicon::LexiconDictionary::from_triples(
            morphoparse_collab::LexiconProvider::entries(&fixture)?,
        );
        layout.write(FileType::Dictionary, &dictionary.to_bytes()?)?;
        println!("persisted {} dictionary entries", dictionary.len());
    }

    println!("compiled morphology_{id} at {}", layout.directory().display());
    Ok(())
}

fn cmd_morphology_apply(
    config: &AppConfig,
    root: PathBuf,
    id: u64,
    direction: DirectionArg,
    boundaries: bool,
    inputs: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let layout = layout(&root, ObjectKind::Morphology, id);
    let results = morphology::apply(&FstProcessRunner, &layout, direction.into(), &inputs, boundaries, &config.fst)?;
    print_apply_results(&inputs, &results);
    Ok(())
}

fn cmd_lm_generate(
    config: &AppConfig,
    root: PathBuf,
    id: u64,
    corpus_path: PathBuf,
    vocabulary_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let layout = layout(&root, ObjectKind::LanguageModel, id);
    layout.ensure_directory()?;
    layout.write(FileType::Corpus, &std::fs::read(&corpus_path)?)?;
    if let Some(vocabulary_path) = vocabulary_path {
        layout.write(FileType::Vocabulary, &std::fs::read(&vocabulary_path)?)?;
    }

    generate::write_arpa(
        &LmProcessRunner,
        &layout,
        &MitlmToolkit,
        config.lm.order,
        &config.lm.smoothing,
        config.lm.generate_timeout(),
    )?;
    let trie = generate::generate_trie(&layout)?;
    println!("generated languagemodel_{id}, highest observed order {}", trie.order());
    Ok(())
}

fn cmd_lm_score(
    config: &AppConfig,
    root: PathBuf,
    id: u64,
    tokens: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let layout = layout(&root, ObjectKind::LanguageModel, id);
    let trie = generate::load_or_generate_trie(&layout)?;
    let lm = LanguageModel::new(config.lm.clone(), trie);
    let score = lm.probability(&tokens);
    println!("{}\t{score}", tokens.join(" "));
    Ok(())
}

fn cmd_parser_compile(
    root: PathBuf,
    id: u64,
    phonology_id: u64,
    morphology_id: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let phonology_layout = layout(&root, ObjectKind::Phonology, phonology_id);
    let morphology_layout = layout(&root, ObjectKind::Morphology, morphology_id);
    let phonology_script = String::from_utf8(phonology_layout.read(FileType::Script)?)?;
    let morphology_script = String::from_utf8(morphology_layout.read(FileType::Script)?)?;

    let parser_layout = layout(&root, ObjectKind::Parser, id);
    let config = AppConfig::load(None)?;
    let parser = MorphologicalParser::new(parser_layout, config.parser, Box::new(BlobParseCache::in_memory()));
    parser.save_script(&phonology_script, &morphology_script)?;
    parser.compile(&FstProcessRunner)?;
    println!("compiled morphologicalparser_{id} at {}", parser.layout().directory().display());
    Ok(())
}

fn cmd_parser_parse(
    config: &AppConfig,
    root: PathBuf,
    id: u64,
    lm_id: u64,
    lexicon_path: PathBuf,
    rich_morphemes: bool,
    transcriptions: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let parser_layout = layout(&root, ObjectKind::Parser, id);
    let cache = if config.parser.persist_cache {
        BlobParseCache::load(parser_layout.path(FileType::Cache))
    } else {
        BlobParseCache::in_memory()
    };
    let mut parser = MorphologicalParser::new(parser_layout, config.parser.clone(), Box::new(cache));

    let fixture = LexiconFixture::load(&lexicon_path)?;
    let morphology_snapshot = MorphologySnapshot::build(
        config.parser.delimiters.rare_delimiter,
        rich_morphemes,
        &fixture,
        &fixture,
        config.parser.min_rule_count,
    )?;

    let lm_layout = layout(&root, ObjectKind::LanguageModel, lm_id);
    let trie = generate::load_or_generate_trie(&lm_layout)?;
    let language_model_snapshot = LanguageModelSnapshot { config: config.lm.clone(), trie };

    parser.take_snapshot(morphology_snapshot, language_model_snapshot)?;
    let results = parser.parse(&FstProcessRunner, &transcriptions)?;
    for transcription in &transcriptions {
        match results.get(transcription).and_then(Option::as_ref) {
            Some(parse) => println!("{transcription}\t{parse}"),
            None => println!("{transcription}\t(no parse)"),
        }
    }
    Ok(())
}

fn cmd_parser_clear_cache(root: PathBuf, id: u64) -> Result<(), Box<dyn std::error::Error>> {
    let parser_layout = layout(&root, ObjectKind::Parser, id);
    let mut parser = MorphologicalParser::new(
        parser_layout.clone(),
        AppConfig::load(None)?.parser,
        Box::new(BlobParseCache::load(parser_layout.path(FileType::Cache))),
    );
    parser.clear_cache(true)?;
    println!("cleared cache for morphologicalparser_{id}");
    Ok(())
}

fn print_apply_results(inputs: &[String], results: &std::collections::HashMap<String, Vec<String>>) {
    for input in inputs {
        match results.get(input) {
            Some(outputs) if !outputs.is_empty() => {
                for output in outputs {
                    println!("{input}\t{output}");
                }
            }
            _ => println!("{input}\t(no analysis)"),
        }
    }
}
