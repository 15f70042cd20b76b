//! `morphoparse` CLI — standalone binary.
//!
//! A thin wrapper around [`morphoparse_cli::run_cli`], handling error
//! display and exit codes. All command logic lives in the library crate.
//!
//! # Exit Codes
//!
//! - `0` — success
//! - `1` — error (message printed to stderr)

fn main() {
    if let Err(e) = morphoparse_cli::run_cli() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
