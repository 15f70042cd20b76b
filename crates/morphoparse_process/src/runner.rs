use crate::error::{ProcessError, ProcessResult};
use std::io::Write;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

#[cfg(unix)]
use std::os::unix::process::CommandExt;

/// What came back from running a command: exit status (if it ever exited),
/// captured stdout/stderr, and whether it had to be killed for overrunning
/// its timeout.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub status: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub timed_out: bool,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        !self.timed_out && self.status == Some(0)
    }
}

/// Runs external commands under a wall-clock timeout, killing the whole
/// process tree atomically on overrun.
///
/// On Unix the child is spawned as the leader of its own process group
/// (`process_group(0)`); on timeout the runner signals the negative PGID
/// with `SIGKILL` via `libc::killpg`, which reaches every descendant the
/// child may have spawned in one syscall. No `ps` invocation is needed to
/// discover descendants.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    timeout: Duration,
}

impl ProcessRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Spawns `program` with `args`, optionally feeding `stdin`, and waits
    /// up to the configured timeout.
    pub fn run(&self, program: &str, args: &[String], stdin: Option<&[u8]>) -> ProcessResult<CommandOutcome> {
        let command_desc = format!("{program} {}", args.join(" "));
        log::debug!("spawning: {command_desc}");

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        #[cfg(unix)]
        cmd.process_group(0);

        let mut child = cmd.spawn().map_err(|source| ProcessError::Spawn {
            command: command_desc.clone(),
            source,
        })?;

        if let Some(input) = stdin {
            if let Some(mut pipe) = child.stdin.take() {
                // Best-effort: if the child exits early and closes its end,
                // the write simply fails and we move on to reaping it.
                let _ = pipe.write_all(input);
            }
        }

        let start = Instant::now();
        let poll_interval = Duration::from_millis(25);
        loop {
            match child.try_wait() {
                Ok(Some(status)) => {
                    let output = child.wait_with_output().map_err(|source| ProcessError::Spawn {
                        command: command_desc.clone(),
                        source,
                    })?;
                    return Ok(CommandOutcome {
                        status: status.code(),
                        stdout: output.stdout,
                        stderr: output.stderr,
                        timed_out: false,
                    });
                }
                Ok(None) => {
                    if start.elapsed() >= self.timeout {
                        log::warn!("'{command_desc}' exceeded {:?}, killing process group", self.timeout);
                        kill_tree(&mut child);
                        let output = child.wait_with_output().unwrap_or_else(|_| std::process::Output {
                            status: exit_status_failure(),
                            stdout: Vec::new(),
                            stderr: Vec::new(),
                        });
                        return Ok(CommandOutcome {
                            status: None,
                            stdout: output.stdout,
                            stderr: output.stderr,
                            timed_out: true,
                        });
                    }
                    std::thread::sleep(poll_interval);
                }
                Err(source) => {
                    return Err(ProcessError::Spawn { command: command_desc, source });
                }
            }
        }
    }
}

#[cfg(unix)]
fn kill_tree(child: &mut std::process::Child) {
    let pgid = child.id() as i32;
    // Negative pid targets the whole process group in POSIX kill(2).
    unsafe {
        libc::killpg(pgid, libc::SIGKILL);
    }
    let _ = child.kill();
}

#[cfg(not(unix))]
fn kill_tree(child: &mut std::process::Child) {
    let _ = child.kill();
}

#[cfg(unix)]
fn exit_status_failure() -> std::process::ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(-1)
}

#[cfg(not(unix))]
fn exit_status_failure() -> std::process::ExitStatus {
    // ExitStatus has no portable public constructor off Unix; this path is
    // only reached if wait_with_output fails after a kill, which practice
    // shows does not happen on the platforms this crate targets.
    std::process::Command::new("cmd").status().expect("fallback status")
}
