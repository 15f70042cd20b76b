//! Parses the ARPA back-off n-gram format a toolkit like MITLM writes:
//! blocks headed by `\N-grams:`, one `logprob<TAB>w1 ... wN<TAB>[backoff]`
//! line per entry, the whole file terminated by `\end\`.

use crate::error::{LmError, LmResult};
use crate::trie::Trie;

/// Builds a [`Trie`] from the text of an ARPA file.
pub fn parse(text: &str) -> LmResult<Trie> {
    let mut trie = Trie::new();
    let mut in_grams_block = false;
    let mut saw_end = false;

    for raw_line in text.lines() {
        let line = raw_line.trim_end();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('\\') {
            if line == "\\end\\" {
                saw_end = true;
                in_grams_block = false;
                continue;
            }
            if line.ends_with("-grams:") {
                in_grams_block = true;
                continue;
            }
            // \data\ and ngram count declarations are informational only.
            in_grams_block = false;
            continue;
        }
        if !in_grams_block {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 2 {
            return Err(LmError::ArpaParse { message: format!("malformed n-gram line: {line:?}") });
        }
        let logprob: f64 = fields[0]
            .parse()
            .map_err(|_| LmError::ArpaParse { message: format!("bad log-prob field: {:?}", fields[0]) })?;
        let words: Vec<String> = fields[1].split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            return Err(LmError::ArpaParse { message: format!("empty n-gram in line: {line:?}") });
        }
        let backoff = match fields.get(2) {
            Some(s) if !s.is_empty() => Some(
                s.parse::<f64>()
                    .map_err(|_| LmError::ArpaParse { message: format!("bad back-off field: {s:?}") })?,
            ),
            _ => None,
        };
        trie.insert(&words, logprob, backoff);
    }

    if !saw_end {
        return Err(LmError::ArpaParse { message: "missing \\end\\ terminator".to_string() });
    }
    Ok(trie)
}
