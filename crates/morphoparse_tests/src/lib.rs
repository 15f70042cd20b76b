//! Integration-test-only crate; all suites live under `tests/`.
