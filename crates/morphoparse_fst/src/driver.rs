//! The generic compile/apply/run-tests machinery shared by phonology and
//! morphology objects.
//!
//! Unlike writing an ephemeral shell script that pipes a temp input file
//! into `flookup`, `apply` here feeds the batch directly over the child's
//! stdin and reads its stdout back — the wire contract (`\n`-delimited
//! inputs, `<input>\t<output>\n` outputs, `+?` for no analysis) is
//! unchanged, there's just no shell script or temp file in the middle.

use crate::error::{FstError, FstResult};
use crate::runner::CommandRunner;
use crate::spec::{Direction, FstSpec, FLOOKUP_NO_OUTPUT};
use morphoparse_store::{ArtifactLayout, FileType};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static ATTEMPT_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A process-unique token: wall-clock nanoseconds since the epoch plus a
/// process-wide counter, so two attempts landing in the same nanosecond (as
/// two `compile` calls in a tight test loop can) still produce distinct
/// tokens.
fn generate_attempt_token() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = ATTEMPT_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{nanos:x}-{seq:x}")
}

/// Rewrites the artifact's compile-attempt token, unconditionally. Called
/// once per [`compile`] invocation regardless of whether that attempt
/// succeeds or fails, since external callers poll this file to detect that
/// a background compile has finished at all, not that it finished well.
fn write_attempt(layout: &ArtifactLayout) -> FstResult<()> {
    layout.write(FileType::Attempt, generate_attempt_token().as_bytes())?;
    Ok(())
}

/// The most recently recorded compile-attempt token for `layout`, or `None`
/// if no compile has ever been attempted.
pub fn compile_attempt(layout: &ArtifactLayout) -> Option<String> {
    layout.read(FileType::Attempt).ok().map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes the FST source and the compiler invocation script to the
/// artifact directory. The compiler script is `foma -e "source <script>"
/// -e "regex <object_type>;" -e "save stack <binary>" -e "quit"`, matching
/// the bit-exact invocation a real `foma` binary expects.
pub fn save_script(layout: &ArtifactLayout, script: &str, object_type: &str) -> FstResult<()> {
    layout.write(FileType::Script, script.as_bytes())?;
    let script_path = layout.path(FileType::Script);
    let binary_path = layout.path(FileType::Binary);
    let invocation = format!(
        "#!/bin/sh\nfoma -e \"source {}\" -e \"regex {object_type};\" -e \"save stack {}\" -e \"quit\"\n",
        script_path.display(),
        binary_path.display(),
    );
    layout.write(FileType::CompilerInvocation, invocation.as_bytes())?;
    Ok(())
}

/// Runs the compiler shell script saved by [`save_script`] and verifies the
/// result: exit code 0, the expected verification substring present in the
/// combined stdout/stderr log, and the binary's mtime having advanced past
/// whatever was there before (a leftover binary from a previous failed
/// attempt must not be mistaken for a fresh success).
pub fn compile(runner: &dyn CommandRunner, layout: &ArtifactLayout, spec: &FstSpec, timeout: Duration) -> FstResult<()> {
    let compiler_path = layout.path(FileType::CompilerInvocation);
    let mtime_before = layout.mtime(FileType::Binary);

    let run_result = runner.run("sh", &[compiler_path.display().to_string()], None, timeout);
    // Rewritten on every attempt, success or failure, before this function
    // returns by any path below — including the `?` on a spawn failure.
    let _ = write_attempt(layout);
    let outcome = run_result.map_err(|err| {
        let _ = layout.remove_file(FileType::Binary);
        err
    })?;

    let mut log = Vec::with_capacity(outcome.stdout.len() + outcome.stderr.len());
    log.extend_from_slice(&outcome.stdout);
    log.extend_from_slice(&outcome.stderr);
    layout.write(FileType::Log, &log)?;
    let log_text = String::from_utf8_lossy(&log);

    if !log_text.contains(&spec.verification_substring) {
        let _ = layout.remove_file(FileType::Binary);
        return Err(FstError::VerificationMiss { object_type: spec.object_type.clone() });
    }
    if outcome.status != Some(0) {
        let _ = layout.remove_file(FileType::Binary);
        return Err(FstError::CompileFailed { message: "compiler exited with a non-zero status".into() });
    }
    let mtime_after = layout.mtime(FileType::Binary);
    if !layout.exists(FileType::Binary) || mtime_after == mtime_before {
        let _ = layout.remove_file(FileType::Binary);
        return Err(FstError::CompileFailed {
            message: "compilation process terminated successfully yet no new binary file was written".into(),
        });
    }
    Ok(())
}

/// Applies the compiled binary to `inputs` in the given direction.
/// Returns a map from each input to the (possibly empty) outputs `flookup`
/// produced for it, with `+?` ("no analysis") entries dropped.
pub fn apply(
    runner: &dyn CommandRunner,
    layout: &ArtifactLayout,
    direction: Direction,
    inputs: &[String],
    boundaries: bool,
    word_boundary_symbol: &str,
    timeout: Duration,
) -> FstResult<HashMap<String, Vec<String>>> {
    if inputs.is_empty() {
        return Ok(HashMap::new());
    }
    if !layout.exists(FileType::Binary) {
        return Err(FstError::NotCompiled);
    }
    let binary_path = layout.path(FileType::Binary);

    let wrapped: Vec<String> = if boundaries {
        inputs
            .iter()
            .map(|s| format!("{word_boundary_symbol}{s}{word_boundary_symbol}"))
            .collect()
    } else {
        inputs.to_vec()
    };
    let mut stdin_text = wrapped.join("\n");
    stdin_text.push('\n');

    let mut args = Vec::new();
    if let Some(flag) = direction.flookup_flag() {
        args.push(flag.to_string());
    }
    args.push(binary_path.display().to_string());

    let outcome = runner.run("flookup", &args, Some(stdin_text.as_bytes()), timeout)?;
    let stdout = String::from_utf8_lossy(&outcome.stdout);

    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for line in stdout.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let mut fields = line.splitn(3, '\t');
        let (Some(raw_in), Some(raw_out)) = (fields.next(), fields.next()) else {
            continue;
        };
        let (i, o) = if boundaries {
            (strip_boundary(raw_in, word_boundary_symbol), strip_boundary(raw_out, word_boundary_symbol))
        } else {
            (raw_in.to_string(), raw_out.to_string())
        };
        let entry = result.entry(i).or_default();
        if o != FLOOKUP_NO_OUTPUT && !o.is_empty() {
            entry.push(o);
        }
    }
    // Every requested input gets an entry, even if flookup produced nothing
    // for it at all (as opposed to a `+?` no-analysis line).
    for input in inputs {
        result.entry(input.clone()).or_default();
    }
    Ok(result)
}

fn strip_boundary(s: &str, word_boundary_symbol: &str) -> String {
    if !word_boundary_symbol.is_empty() && s.starts_with(word_boundary_symbol) && s.ends_with(word_boundary_symbol) && s.len() >= 2 * word_boundary_symbol.len() {
        s[word_boundary_symbol.len()..s.len() - word_boundary_symbol.len()].to_string()
    } else {
        s.to_string()
    }
}

/// Extracts `#test <lower> -> <upper>` lines from a script, the convention
/// used to embed regression fixtures directly in FST source.
pub fn extract_tests(script: &str) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for line in script.lines() {
        let Some(rest) = line.strip_prefix("#test ") else { continue };
        let Some((lower, upper)) = rest.split_once("->") else { continue };
        result.entry(lower.trim().to_string()).or_default().push(upper.trim().to_string());
    }
    result
}

#[derive(Debug, Clone)]
pub struct TestResult {
    pub expected: Vec<String>,
    pub actual: Vec<String>,
}

/// Runs every `#test` fixture embedded in `script` downward through the
/// compiled binary and reports expected vs. actual outputs per input.
pub fn run_tests(
    runner: &dyn CommandRunner,
    layout: &ArtifactLayout,
    script: &str,
    boundaries: bool,
    word_boundary_symbol: &str,
    timeout: Duration,
) -> FstResult<Option<HashMap<String, TestResult>>> {
    let tests = extract_tests(script);
    if tests.is_empty() {
        return Ok(None);
    }
    let inputs: Vec<String> = tests.keys().cloned().collect();
    let results = apply(runner, layout, Direction::Down, &inputs, boundaries, word_boundary_symbol, timeout)?;
    let report = tests
        .into_iter()
        .map(|(input, expected)| {
            let actual = results.get(&input).cloned().unwrap_or_default();
            (input, TestResult { expected, actual })
        })
        .collect();
    Ok(Some(report))
}
