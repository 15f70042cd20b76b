//! Drives the external n-gram estimator and turns its ARPA output into a
//! persisted [`Trie`] blob.

use crate::arpa;
use crate::error::{LmError, LmResult};
use crate::runner::CommandRunner;
use crate::toolkit::Toolkit;
use crate::trie::Trie;
use morphoparse_store::{ArtifactLayout, FileType};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static ATTEMPT_COUNTER: AtomicU64 = AtomicU64::new(0);

fn generate_attempt_token() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = ATTEMPT_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{nanos:x}-{seq:x}")
}

fn write_attempt(layout: &ArtifactLayout) -> LmResult<()> {
    layout.write(FileType::Attempt, generate_attempt_token().as_bytes())?;
    Ok(())
}

/// The most recently recorded generate-attempt token for `layout`, the
/// language-model analogue of `morphoparse_fst::compile_attempt`, or `None`
/// if no generation has ever been attempted.
pub fn generate_attempt(layout: &ArtifactLayout) -> Option<String> {
    layout.read(FileType::Attempt).ok().map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

/// Runs the estimator to (re)generate the ARPA file for this object,
/// verifying exit code, log content, and mtime advancement exactly the way
/// `morphoparse-fst`'s compiler verification does.
pub fn write_arpa(
    runner: &dyn CommandRunner,
    layout: &ArtifactLayout,
    toolkit: &dyn Toolkit,
    order: u32,
    smoothing: &str,
    timeout: Duration,
) -> LmResult<()> {
    let arpa_path = layout.path(FileType::Arpa);
    let corpus_path = layout.path(FileType::Corpus);
    let vocabulary_path = if layout.exists(FileType::Vocabulary) {
        Some(layout.path(FileType::Vocabulary))
    } else {
        None
    };
    let mtime_before = layout.mtime(FileType::Arpa);

    let args = toolkit.command_args(order, smoothing, &corpus_path, &arpa_path, vocabulary_path.as_deref());
    let run_result = runner.run(toolkit.executable(), &args, timeout);
    // Rewritten whether this attempt succeeds or fails, the same contract
    // as `morphoparse_fst::driver::compile`'s attempt token.
    let _ = write_attempt(layout);
    let outcome = run_result?;

    let mut log = Vec::with_capacity(outcome.stdout.len() + outcome.stderr.len());
    log.extend_from_slice(&outcome.stdout);
    log.extend_from_slice(&outcome.stderr);
    layout.write(FileType::Log, &log)?;
    let log_text = String::from_utf8_lossy(&log);

    let verification = toolkit.verification_string(&arpa_path);
    let mtime_after = layout.mtime(FileType::Arpa);
    let succeeded = log_text.contains(&verification)
        && outcome.status == Some(0)
        && layout.exists(FileType::Arpa)
        && mtime_after != mtime_before;

    if !succeeded {
        return Err(LmError::Generation { message: "estimator did not produce a fresh ARPA file".to_string() });
    }
    Ok(())
}

/// Parses the ARPA file already on disk into a [`Trie`] and persists it as
/// a bincode blob next to it.
pub fn generate_trie(layout: &ArtifactLayout) -> LmResult<Trie> {
    let bytes = layout.read(FileType::Arpa)?;
    let text = String::from_utf8_lossy(&bytes);
    let trie = arpa::parse(&text)?;
    let blob = bincode::serialize(&trie).map_err(LmError::CorruptTrie)?;
    layout.write(FileType::Trie, &blob)?;
    Ok(trie)
}

/// Loads a previously-persisted trie blob, or regenerates it from the ARPA
/// file if the blob is missing or corrupt — mirroring the fallback chain
/// the original implementation's `trie` property walks (pickle load, else
/// regenerate from ARPA, else give up).
pub fn load_or_generate_trie(layout: &ArtifactLayout) -> LmResult<Trie> {
    if layout.exists(FileType::Trie) {
        if let Ok(bytes) = layout.read(FileType::Trie) {
            if let Ok(trie) = bincode::deserialize::<Trie>(&bytes) {
                return Ok(trie);
            }
        }
    }
    generate_trie(layout)
}
