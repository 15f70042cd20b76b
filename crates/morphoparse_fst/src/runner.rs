//! The seam between the FST driver and an actual operating-system process.
//!
//! Tests supply a fake [`CommandRunner`] that writes the files a real
//! `foma`/`flookup` invocation would have produced, so the compile/apply
//! pipeline is exercised without either binary installed.

use crate::error::FstResult;
use morphoparse_process::{CommandOutcome, ProcessRunner};
use std::time::Duration;

pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String], stdin: Option<&[u8]>, timeout: Duration) -> FstResult<CommandOutcome>;
}

/// The production [`CommandRunner`], backed by [`morphoparse_process`].
#[derive(Debug, Default, Clone)]
pub struct ProcessCommandRunner;

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, program: &str, args: &[String], stdin: Option<&[u8]>, timeout: Duration) -> FstResult<CommandOutcome> {
        let runner = ProcessRunner::new(timeout);
        Ok(runner.run(program, args, stdin)?)
    }
}
