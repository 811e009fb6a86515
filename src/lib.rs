#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Library layout
//!
//! - [`extract`] — pure per-record derivation (record → [`SubjectRow`])
//! - [`export`] — the read-parse-transform-write pipeline
//! - [`error`] — error types and the [`Result`] alias
//!
//! The binary in `src/main.rs` is a thin driver over [`write_subjects`]
//! with fixed input and output filenames.

pub mod error;
pub mod export;
pub mod extract;

pub use error::{ExtractError, Result};
pub use export::write_subjects;
pub use extract::{subject_headings, subject_row, SubjectRow, NULL_SENTINEL};
