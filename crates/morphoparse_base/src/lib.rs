//! # morphoparse-base
//!
//! Shared structural types for the morphological parser engine.
//!
//! This crate provides the vocabulary that every other crate in the
//! workspace builds on:
//!
//! - [`Delimiters`] — configurable separators used to join/split rich morphemes
//! - [`RichMorpheme`]/[`ObjectKind`] — the domain's core small value types
//! - [`MorphotacticRule`] — a named category sequence with an observed count
//!
//! # Design Principles
//!
//! This crate has **no knowledge of subprocesses, the filesystem, or any
//! external toolkit**. It provides only plain data and the pure functions
//! that operate on it; higher-level crates own all I/O.

pub mod delimiters;
pub mod morpheme;
pub mod object_kind;
pub mod rule;

pub use delimiters::Delimiters;
pub use morpheme::RichMorpheme;
pub use object_kind::ObjectKind;
pub use rule::MorphotacticRule;
