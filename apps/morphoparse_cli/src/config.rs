//! Loads per-object configuration from an optional TOML file, falling back
//! to each object's own defaults for whichever section is missing or
//! whichever file isn't given at all — the CLI's own stand-in for the
//! version-controlled configuration a real deployment would keep.

use morphoparse_fst::FstConfig;
use morphoparse_lm::LmConfig;
use morphoparse_parser::ParserConfig;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    fst: Option<FstConfig>,
    lm: Option<LmConfig>,
    parser: Option<ParserConfig>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub fst: FstConfig,
    pub lm: LmConfig,
    pub parser: ParserConfig,
}

impl AppConfig {
    /// Loads `path` if given, otherwise the all-defaults configuration.
    /// Sections absent from the file also fall back to their defaults
    /// individually, so a file that only overrides `[lm]` still gets
    /// sensible `fst`/`parser` settings.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| format!("failed to read config file {}: {e}", path.display()))?;
                toml::from_str::<RawConfig>(&text)
                    .map_err(|e| format!("malformed config file {}: {e}", path.display()))?
            }
            None => RawConfig::default(),
        };
        Ok(Self {
            fst: raw.fst.unwrap_or_default(),
            lm: raw.lm.unwrap_or_default(),
            parser: raw.parser.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_path_yields_all_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.lm.order, LmConfig::default().order);
    }

    #[test]
    fn partial_file_only_overrides_its_own_section() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[lm]\norder = 5\nsmoothing = \"ModKN\"\nrare_delimiter = \"\u{2980}\"\nstart_symbol = \"<s>\"\nend_symbol = \"</s>\"\ncategorial = true\ngenerate_timeout_secs = 60\n").unwrap();
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.lm.order, 5);
        assert!(config.lm.categorial);
        assert_eq!(config.fst.word_boundary_symbol, FstConfig::default().word_boundary_symbol);
    }
}
