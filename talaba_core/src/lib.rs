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

//! Student directory: records, the immutable in-memory `Directory`, the
//! lookup engine and the store that owns the current snapshot.

pub mod directory;
pub mod error;
pub mod lookup;
pub mod record;
pub mod store;

pub use directory::{Directory, GroupEntry, Listing, Stats};
pub use error::{LoadError, LookupError, LookupResult};
pub use record::{REQUIRED_COLUMNS, StudentRecord};
pub use store::{DirectorySource, DirectoryStore, ReloadPolicy, Snapshot};

/// Normalize an identifier or identifier query: trim, then upper-case.
#[must_use]
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim().to_uppercase()
}
