#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Spreadsheet-backed student directory.
//!
//! Reads the first worksheet of an `.xlsx`/`.xls`/`.ods` workbook whose header
//! row names the five required columns, and optionally generates a sample
//! workbook when the file does not exist.

mod reader;
mod sample;
mod source;

pub use reader::read_directory;
pub use sample::{sample_students, write_sample, write_workbook};
pub use source::{SampleFallback, SpreadsheetSource};
