//! The per-type extension table an artifact's file names are built from.

/// The kind of file within an artifact directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Script,
    CompilerInvocation,
    Binary,
    Log,
    Corpus,
    Vocabulary,
    Arpa,
    Trie,
    Dictionary,
    Cache,
    /// The compile/generate-attempt token: rewritten on every `compile` or
    /// `write_arpa` call, whether it succeeds or fails, so a caller that
    /// kicked off the call on a background worker can poll this file for
    /// completion without needing a callback channel.
    Attempt,
}

impl FileType {
    /// The extension (including any leading underscore-qualified stem
    /// suffix) appended to an artifact's stem, exactly as laid out in the
    /// directory-layout table: script `.script`, binary `.foma`, compiler
    /// `.sh`, log `.log`, corpus `.txt`, arpa `.lm`, vocabulary `.vocab`,
    /// and the pickled blobs `_trie.pickle`, `_dictionary.pickle`,
    /// `_cache.pickle`; `.attempt` is this crate's own addition, with no
    /// counterpart in the original file-type table.
    pub const fn extension(self) -> &'static str {
        match self {
            FileType::Script => ".script",
            FileType::CompilerInvocation => ".sh",
            FileType::Binary => ".foma",
            FileType::Log => ".log",
            FileType::Corpus => ".txt",
            FileType::Vocabulary => ".vocab",
            FileType::Arpa => ".lm",
            FileType::Trie => "_trie.pickle",
            FileType::Dictionary => "_dictionary.pickle",
            FileType::Cache => "_cache.pickle",
            FileType::Attempt => ".attempt",
        }
    }
}
