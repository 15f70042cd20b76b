//! The seam between the n-gram estimator invocation and an actual
//! operating-system process — mirrors `morphoparse_fst::CommandRunner` so
//! tests can supply a fake that writes the ARPA output a real
//! `estimate-ngram` call would have produced.

use crate::error::LmResult;
use morphoparse_process::{CommandOutcome, ProcessRunner};
use std::time::Duration;

pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String], timeout: Duration) -> LmResult<CommandOutcome>;
}

#[derive(Debug, Default, Clone)]
pub struct ProcessCommandRunner;

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, program: &str, args: &[String], timeout: Duration) -> LmResult<CommandOutcome> {
        let runner = ProcessRunner::new(timeout);
        Ok(runner.run(program, args, None)?)
    }
}
